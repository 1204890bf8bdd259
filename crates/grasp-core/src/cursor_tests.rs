use std::rc::Rc;

use super::*;

fn tok(kind: TokenKind, value: &str) -> Node {
    Node::token(Token::new(kind, value, 0, 1, 1))
}

fn marker(kind: TokenKind) -> Node {
    tok(kind, "")
}

/// root [ _start, a, ( _start, b, _end ), _end ]
fn sample() -> Rc<Tree> {
    let inner = Tree::new(
        TreeKind::Wrapped,
        Some(Token::new(TokenKind::BracketLeft, "(", 0, 1, 1)),
        vec![
            marker(TokenKind::Start),
            tok(TokenKind::Symbol, "b"),
            marker(TokenKind::End),
        ],
    );
    Rc::new(Tree::new(
        TreeKind::Root,
        None,
        vec![
            marker(TokenKind::Start),
            tok(TokenKind::Symbol, "a"),
            Node::tree(inner),
            marker(TokenKind::End),
        ],
    ))
}

fn value(cursor: &Cursor) -> &str {
    cursor.node().as_token().map_or("", |t| t.value.as_str())
}

#[test]
fn navigates_down_right_left_up() {
    let root = Cursor::from_tree(sample());
    assert_eq!(root.depth(), 0);
    assert!(root.up().is_none());
    assert!(root.right().is_none());

    let first = root.down().unwrap();
    assert_eq!(first.node().token_kind(), Some(TokenKind::Start));
    assert_eq!(first.depth(), 1);
    assert!(first.left().is_none());

    let a = first.right().unwrap();
    assert_eq!(value(&a), "a");
    assert_eq!(a.index(), Some(1));

    let wrapped = a.right().unwrap();
    assert_eq!(wrapped.node().tree_kind(), Some(TreeKind::Wrapped));

    let b = wrapped.down().unwrap().right().unwrap();
    assert_eq!(value(&b), "b");
    assert_eq!(b.depth(), 2);

    let back = b.up().unwrap();
    assert!(back.is_same_position(&wrapped));
    assert_eq!(value(&back.left().unwrap()), "a");
}

#[test]
fn leaves_have_no_children() {
    let root = Cursor::from_tree(sample());
    let a = root.down().unwrap().right().unwrap();
    assert!(a.down().is_none());
}

#[test]
fn down_then_up_is_identity() {
    let tree = sample();
    let root = Cursor::from_tree(Rc::clone(&tree));
    let up = root.down().unwrap().right().unwrap().up().unwrap();
    assert!(up.node().ptr_eq(&Node::Tree(tree)));
}

#[test]
fn replace_rebuilds_path_and_shares_the_rest() {
    let tree = sample();
    let root = Cursor::from_tree(Rc::clone(&tree));
    let wrapped = root.down().unwrap().right().unwrap().right().unwrap();
    let b = wrapped.down().unwrap().right().unwrap();

    let edited = b.replace(tok(TokenKind::Symbol, "B")).root();
    let Node::Tree(new_root) = &edited else {
        panic!("root must be a tree");
    };

    // Original is untouched.
    let Node::Tree(old_inner) = &tree.children[2] else {
        panic!("expected wrapped tree");
    };
    assert_eq!(old_inner.children[1].as_token().unwrap().value, "b");

    // Edited path is rebuilt.
    let Node::Tree(new_inner) = &new_root.children[2] else {
        panic!("expected wrapped tree");
    };
    assert_eq!(new_inner.children[1].as_token().unwrap().value, "B");

    // Off-path nodes are shared.
    assert!(new_root.children[1].ptr_eq(&tree.children[1]));
    assert!(new_inner.children[0].ptr_eq(&old_inner.children[0]));
}

#[test]
fn replacement_survives_sibling_moves() {
    let tree = sample();
    let a = Cursor::from_tree(tree).down().unwrap().right().unwrap();
    let replaced = a.replace(tok(TokenKind::Symbol, "A"));
    let there_and_back = replaced.right().unwrap().left().unwrap();
    assert_eq!(value(&there_and_back), "A");
}

#[test]
fn same_position_requires_same_parent() {
    let tree = sample();
    let one = Cursor::from_tree(Rc::clone(&tree)).down().unwrap();
    let two = Cursor::from_tree(tree).down().unwrap();
    assert!(one.is_same_position(&two));
    assert!(!one.is_same_position(&one.right().unwrap()));
}
