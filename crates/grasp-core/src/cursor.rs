//! Persistent zipper over a [`Tree`].
//!
//! A cursor is a focused node plus a linked list of parent frames. Every
//! move returns a new cursor; nothing is mutated in place. [`Cursor::replace`]
//! swaps the focused node, and the change is carried into the parents lazily:
//! the first move away from the edited position rebuilds the parent tree
//! (sharing every untouched child), and so on up to the root.

use std::rc::Rc;

use crate::tree::{Node, Tree};

#[derive(Debug)]
struct Frame {
    /// Parent of the focused node, possibly already patched.
    tree: Rc<Tree>,
    /// Index of the focused node within `tree.children`.
    index: usize,
    /// `tree` differs from the corresponding child of the grandparent.
    changed: bool,
    parent: Option<Rc<Frame>>,
    depth: usize,
}

#[derive(Clone, Debug)]
pub struct Cursor {
    node: Node,
    frame: Option<Rc<Frame>>,
    /// `node` differs from `frame.tree.children[frame.index]`.
    changed: bool,
}

impl Cursor {
    /// Cursor focused on `node`, which becomes the root of navigation.
    pub fn new(node: Node) -> Self {
        Self {
            node,
            frame: None,
            changed: false,
        }
    }

    pub fn from_tree(tree: Rc<Tree>) -> Self {
        Self::new(Node::Tree(tree))
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Number of `down` moves separating this position from the root.
    pub fn depth(&self) -> usize {
        self.frame.as_ref().map_or(0, |f| f.depth)
    }

    /// Index among siblings; `None` at the root.
    pub fn index(&self) -> Option<usize> {
        self.frame.as_ref().map(|f| f.index)
    }

    /// First child of the focused tree.
    pub fn down(&self) -> Option<Cursor> {
        let Node::Tree(tree) = &self.node else {
            return None;
        };
        let first = tree.children.first()?.clone();
        Some(Cursor {
            node: first,
            frame: Some(Rc::new(Frame {
                tree: Rc::clone(tree),
                index: 0,
                changed: self.changed,
                parent: self.frame.clone(),
                depth: self.depth() + 1,
            })),
            changed: false,
        })
    }

    /// Parent, rebuilt if anything below it was replaced.
    pub fn up(&self) -> Option<Cursor> {
        let frame = self.synced_frame()?;
        Some(Cursor {
            node: Node::Tree(Rc::clone(&frame.tree)),
            frame: frame.parent.clone(),
            changed: frame.changed,
        })
    }

    pub fn right(&self) -> Option<Cursor> {
        self.sibling(1)
    }

    pub fn left(&self) -> Option<Cursor> {
        self.sibling(-1)
    }

    fn sibling(&self, delta: isize) -> Option<Cursor> {
        let frame = self.synced_frame()?;
        let index = frame.index.checked_add_signed(delta)?;
        let node = frame.tree.children.get(index)?.clone();
        Some(Cursor {
            node,
            frame: Some(Rc::new(Frame {
                tree: Rc::clone(&frame.tree),
                index,
                changed: frame.changed,
                parent: frame.parent.clone(),
                depth: frame.depth,
            })),
            changed: false,
        })
    }

    /// New cursor at the same position with `node` in place of the focus.
    pub fn replace(&self, node: Node) -> Cursor {
        Cursor {
            node,
            frame: self.frame.clone(),
            changed: true,
        }
    }

    /// Climb to the root and return it, with every replacement applied.
    pub fn root(&self) -> Node {
        let mut cursor = self.clone();
        while let Some(up) = cursor.up() {
            cursor = up;
        }
        cursor.node
    }

    /// Both cursors focus the same slot of the same (unmodified) parent.
    ///
    /// Used by the query engine to detect matches that consumed nothing.
    pub fn is_same_position(&self, other: &Cursor) -> bool {
        match (&self.frame, &other.frame) {
            (None, None) => self.node.ptr_eq(&other.node),
            (Some(a), Some(b)) => a.index == b.index && Rc::ptr_eq(&a.tree, &b.tree),
            _ => false,
        }
    }

    /// Parent frame with the focused node patched in, if it was replaced.
    fn synced_frame(&self) -> Option<Rc<Frame>> {
        let frame = self.frame.as_ref()?;
        if !self.changed {
            return Some(Rc::clone(frame));
        }
        let mut tree = Tree::clone(&frame.tree);
        tree.children[frame.index] = self.node.clone();
        Some(Rc::new(Frame {
            tree: Rc::new(tree),
            index: frame.index,
            changed: true,
            parent: frame.parent.clone(),
            depth: frame.depth,
        }))
    }
}
