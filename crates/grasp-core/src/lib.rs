#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by every grasp crate.
//!
//! - [`Token`] / [`TokenKind`]: flat lexical tokens, the leaves of a tree
//! - [`Tree`] / [`TreeKind`] / [`Node`]: the shallow nesting tree
//! - [`Cursor`]: a persistent zipper used for navigation and edits
//! - [`dump`]: text and JSON renderings for debugging and snapshots

pub mod colors;
pub mod cursor;
pub mod dump;
pub mod token;
pub mod tree;

#[cfg(test)]
mod cursor_tests;
#[cfg(test)]
mod dump_tests;

pub use colors::Colors;
pub use cursor::Cursor;
pub use dump::{DumpOptions, dump_node, dump_tokens, dump_tree, to_json};
pub use token::{Token, TokenKind};
pub use tree::{Node, Tree, TreeKind};
