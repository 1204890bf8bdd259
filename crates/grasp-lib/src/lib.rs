//! grasp: queries over loosely parsed source code.
//!
//! Source text is tokenized from a declarative language description, folded
//! into a tree of brackets, strings, templates and indentation blocks, and
//! searched with backtracking queries that fold a context through handlers.
//!
//! # Example
//!
//! ```
//! use grasp_lib::{ANY, LangQuery, Query, Token};
//!
//! let push = |mut names: Vec<String>, token: &Token| {
//!     names.push(token.value.clone());
//!     names
//! };
//! let query = Query::new().sym("import").sym_with(ANY, push);
//!
//! let python = grasp_lib::langs::python();
//! let names = python.query("import os\nimport sys\n", &query, Vec::new())?;
//! assert_eq!(names, Some(vec!["os".to_string(), "sys".to_string()]));
//! # Ok::<(), grasp_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod query;

#[cfg(test)]
mod query_tests;

pub use grasp_langs as langs;
pub use grasp_syntax as syntax;

pub use grasp_core::{Cursor, Node, Token, TokenKind, Tree, TreeKind};
pub use grasp_langs::{Lang, LangImpl, LoadError};
pub use grasp_query::{
    ANY, CompiledQuery, Pattern, PrintTracer, Query, QueryError, StrOptions, Tracer,
    TreeOptions, Verbosity, alt, begin, comment, comment_with, end, handler, many, num,
    num_with, op, op_with, opt, re, str, str_parts, str_with, sym, sym_with, tree,
};
pub use grasp_syntax::{ConfigError, LanguageConfig, ParseError};
pub use query::LangQuery;

/// Errors from any grasp layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Inconsistent lexical description.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Query that cannot be compiled.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Language description that cannot be read or decoded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Result type for grasp operations.
pub type Result<T> = std::result::Result<T, Error>;
