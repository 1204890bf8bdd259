//! Nesting trees built on top of the token stream.

use std::rc::Rc;

use serde::Serialize;

use crate::token::{Token, TokenKind};

/// Tree classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TreeKind {
    #[serde(rename = "root-tree")]
    Root,
    /// Bracketed region, e.g. `( ... )`.
    #[serde(rename = "wrapped-tree")]
    Wrapped,
    /// Quoted string.
    #[serde(rename = "string-tree")]
    String,
    /// Interpolation region inside a string.
    #[serde(rename = "template-tree")]
    Template,
    /// Indentation block, inferred from leading whitespace only.
    #[serde(rename = "block-tree")]
    Block,
}

impl TreeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TreeKind::Root => "root-tree",
            TreeKind::Wrapped => "wrapped-tree",
            TreeKind::String => "string-tree",
            TreeKind::Template => "template-tree",
            TreeKind::Block => "block-tree",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "root" | "root-tree" => Some(TreeKind::Root),
            "wrapped" | "wrapped-tree" => Some(TreeKind::Wrapped),
            "string" | "string-tree" => Some(TreeKind::String),
            "template" | "template-tree" => Some(TreeKind::Template),
            "block" | "block-tree" => Some(TreeKind::Block),
            _ => None,
        }
    }
}

impl std::fmt::Display for TreeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interior node.
///
/// `children` always starts with a `_start` marker and ends with an `_end`
/// marker once the tree builder has finished with it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    #[serde(rename = "type")]
    pub kind: TreeKind,
    #[serde(rename = "startsWith", skip_serializing_if = "Option::is_none")]
    pub opening: Option<Token>,
    #[serde(rename = "endsWith", skip_serializing_if = "Option::is_none")]
    pub closing: Option<Token>,
    pub children: Vec<Node>,
}

impl Tree {
    pub fn new(kind: TreeKind, opening: Option<Token>, children: Vec<Node>) -> Self {
        Self {
            kind,
            opening,
            closing: None,
            children,
        }
    }

    /// A delimited tree (bracket, string, template) that reached end of input
    /// without its closer.
    pub fn is_force_closed(&self) -> bool {
        matches!(
            self.kind,
            TreeKind::Wrapped | TreeKind::String | TreeKind::Template
        ) && self.closing.is_none()
    }

    /// Children without the `_start`/`_end` markers.
    pub fn inner_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|n| !n.is_marker())
    }

    /// Source text covered by this tree, delimiters included.
    pub fn text(&self) -> String {
        let mut out = String::new();
        write_text(self, &mut out);
        out
    }
}

fn write_text(tree: &Tree, out: &mut String) {
    if let Some(opening) = &tree.opening {
        out.push_str(&opening.value);
    }
    for child in &tree.children {
        match child {
            Node::Token(token) => out.push_str(&token.value),
            Node::Tree(tree) => write_text(tree, out),
        }
    }
    if let Some(closing) = &tree.closing {
        out.push_str(&closing.value);
    }
}

/// A tree child: either a token leaf or a nested tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Token(Rc<Token>),
    Tree(Rc<Tree>),
}

impl Node {
    pub fn token(token: Token) -> Self {
        Node::Token(Rc::new(token))
    }

    pub fn tree(tree: Tree) -> Self {
        Node::Tree(Rc::new(tree))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            Node::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Node::Tree(tree) => Some(tree),
            Node::Token(_) => None,
        }
    }

    pub fn token_kind(&self) -> Option<TokenKind> {
        self.as_token().map(|t| t.kind)
    }

    pub fn tree_kind(&self) -> Option<TreeKind> {
        self.as_tree().map(|t| t.kind)
    }

    pub fn is_minor(&self) -> bool {
        self.token_kind().is_some_and(TokenKind::is_minor)
    }

    pub fn is_marker(&self) -> bool {
        self.token_kind().is_some_and(TokenKind::is_marker)
    }

    /// Kind name as used in dumps (`symbol`, `wrapped-tree`, ...).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Token(token) => token.kind.as_str(),
            Node::Tree(tree) => tree.kind.as_str(),
        }
    }

    /// Pointer identity; equal nodes in different trees are not the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Token(a), Node::Token(b)) => Rc::ptr_eq(a, b),
            (Node::Tree(a), Node::Tree(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::token(token)
    }
}

impl From<Tree> for Node {
    fn from(tree: Tree) -> Self {
        Node::tree(tree)
    }
}
