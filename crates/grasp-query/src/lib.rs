#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Backtracking query engine over grasp trees.
//!
//! Queries are built with the chainable [`Query`] builder, compiled into
//! immutable matchers, and run against a [`Cursor`](grasp_core::Cursor).
//! A run folds a user context through handler callbacks and returns the
//! final context, or `None` when nothing matched.
//!
//! - [`builder`]: `Query`, `TreeOptions`, `StrOptions` and starter functions
//! - [`checkpoint`]: positions and backtracking state passed between matchers
//! - [`trace`]: execution tracing

pub mod builder;
pub mod checkpoint;
pub mod error;
mod matcher;
pub mod pattern;
pub mod run;
pub mod trace;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
pub mod test_utils;
#[cfg(test)]
mod trace_tests;

pub use builder::{
    Query, StrOptions, TreeOptions, alt, begin, comment, comment_with, end, handler, many, num,
    num_with, op, op_with, opt, str, str_parts, str_with, sym, sym_with, tree,
};
pub use checkpoint::{Checkpoint, Frontier, Match};
pub use error::QueryError;
pub use matcher::{BoxedMatcher, Matcher, NodeHandler, TokenHandler, TreeHandler};
pub use pattern::{ANY, Pattern, re};
pub use run::CompiledQuery;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
