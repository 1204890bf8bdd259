//! Human-readable and JSON renderings of trees.
//!
//! The text format puts one node per line, children indented by two spaces:
//!
//! ```text
//! root-tree
//!   _start
//!   symbol "foo"
//!   wrapped-tree "(" ")"
//!     _start
//!     _end
//!   _end
//! ```

use crate::colors::Colors;
use crate::token::Token;
use crate::tree::{Node, Tree};

#[derive(Clone, Copy, Debug, Default)]
pub struct DumpOptions {
    /// Append `line:col` to every token.
    pub spans: bool,
    pub colors: Colors,
}

pub fn dump_tree(tree: &Tree, options: DumpOptions) -> String {
    let mut out = String::new();
    write_tree(tree, 0, options, &mut out);
    out
}

pub fn dump_node(node: &Node, options: DumpOptions) -> String {
    let mut out = String::new();
    write_node(node, 0, options, &mut out);
    out
}

pub fn dump_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>, options: DumpOptions) -> String {
    let mut out = String::new();
    for token in tokens {
        write_token(token, 0, options, &mut out);
    }
    out
}

/// Pretty JSON with `type`-tagged nodes.
pub fn to_json(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

fn write_node(node: &Node, depth: usize, options: DumpOptions, out: &mut String) {
    match node {
        Node::Token(token) => write_token(token, depth, options, out),
        Node::Tree(tree) => write_tree(tree, depth, options, out),
    }
}

fn write_tree(tree: &Tree, depth: usize, options: DumpOptions, out: &mut String) {
    let c = options.colors;
    out.push_str(&"  ".repeat(depth));
    out.push_str(&c.kind(tree.kind.as_str()));
    if let Some(opening) = &tree.opening {
        out.push(' ');
        out.push_str(&c.text(&quote(&opening.value)));
    }
    if let Some(closing) = &tree.closing
        && !closing.is_zero_width()
    {
        out.push(' ');
        out.push_str(&c.text(&quote(&closing.value)));
    }
    out.push('\n');
    for child in &tree.children {
        write_node(child, depth + 1, options, out);
    }
}

fn write_token(token: &Token, depth: usize, options: DumpOptions, out: &mut String) {
    let c = options.colors;
    out.push_str(&"  ".repeat(depth));
    if token.kind.is_marker() {
        out.push_str(&c.meta(token.kind.as_str()));
    } else {
        out.push_str(token.kind.as_str());
        out.push(' ');
        out.push_str(&c.text(&quote(&token.value)));
    }
    if options.spans {
        out.push(' ');
        out.push_str(&c.meta(&format!("{}:{}", token.line, token.col)));
    }
    out.push('\n');
}

fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c if c.is_control() => result.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
