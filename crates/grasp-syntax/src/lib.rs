//! Lexing and tree building for grasp.
//!
//! - [`config`]: declarative language descriptions, built in Rust or loaded
//!   from JSON
//! - [`lexer`]: rule tables and the tokenizer
//! - [`parser`]: the tree builder (brackets, strings, templates, indent
//!   blocks)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use config::{
    BracketOption, CommentOption, LanguageConfig, LexerConfig, ParserConfig, StringOption,
    TemplateOption,
};
pub use error::{ConfigError, ParseError};
pub use lexer::{RuleTable, Tokenizer, tokenize};
pub use parser::build_tree;
