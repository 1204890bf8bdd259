//! Configuration-driven lexer.
//!
//! [`RuleTable::build`] turns a [`LexerConfig`](crate::LexerConfig) into
//! ordered per-state rules; [`Tokenizer`] walks the input with them.

mod rules;
mod table;
mod tokenizer;

#[cfg(test)]
mod table_tests;
#[cfg(test)]
mod tokenizer_tests;

pub use rules::{Action, Rule, RuleMatch, compare_chunks, is_prefix_ordered, sort_rules};
pub use table::{ROOT_STATE, RuleTable};
pub use tokenizer::{Tokenizer, tokenize};
