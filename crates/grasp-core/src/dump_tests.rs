use super::*;

fn sample() -> Node {
    let open = Token::new(TokenKind::StringStart, "\"", 4, 1, 5);
    let mut string = Tree::new(
        TreeKind::String,
        Some(open.clone()),
        vec![
            Node::token(Token::new(TokenKind::Start, "", 5, 1, 6)),
            Node::token(Token::new(TokenKind::StringValue, "a\tb", 5, 1, 6)),
            Node::token(Token::new(TokenKind::End, "", 8, 1, 9)),
        ],
    );
    string.closing = Some(Token::new(TokenKind::StringEnd, "\"", 8, 1, 9));

    Node::tree(Tree::new(
        TreeKind::Root,
        None,
        vec![
            Node::token(Token::new(TokenKind::Start, "", 0, 1, 1)),
            Node::token(Token::new(TokenKind::Symbol, "foo", 0, 1, 1)),
            Node::token(Token::new(TokenKind::Whitespace, " ", 3, 1, 4)),
            Node::tree(string),
            Node::token(Token::new(TokenKind::End, "", 9, 1, 10)),
        ],
    ))
}

#[test]
fn dumps_tree() {
    let res = dump_node(&sample(), DumpOptions::default());

    insta::assert_snapshot!(res, @r#"
    root-tree
      _start
      symbol "foo"
      whitespace " "
      string-tree "\"" "\""
        _start
        string-value "a\tb"
        _end
      _end
    "#);
}

#[test]
fn dumps_spans() {
    let options = DumpOptions {
        spans: true,
        ..Default::default()
    };
    let res = dump_node(&sample(), options);

    insta::assert_snapshot!(res, @r#"
    root-tree
      _start 1:1
      symbol "foo" 1:1
      whitespace " " 1:4
      string-tree "\"" "\""
        _start 1:6
        string-value "a\tb" 1:6
        _end 1:9
      _end 1:10
    "#);
}

#[test]
fn force_closed_tree_has_no_closer() {
    let tree = Tree::new(
        TreeKind::Wrapped,
        Some(Token::new(TokenKind::BracketLeft, "(", 0, 1, 1)),
        vec![],
    );
    assert!(tree.is_force_closed());
    assert!(!Tree::new(TreeKind::Block, None, vec![]).is_force_closed());
}

#[test]
fn json_uses_type_tags() {
    let json = to_json(&sample()).unwrap();
    assert!(json.contains(r#""type": "root-tree""#));
    assert!(json.contains(r#""type": "string-tree""#));
    assert!(json.contains(r#""startsWith": {"#));
    assert!(json.contains(r#""lineBreaks": 0"#));
}
