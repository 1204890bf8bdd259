//! Tree construction from tokens.

mod tree_builder;


pub use tree_builder::build_tree;
