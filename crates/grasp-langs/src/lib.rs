#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Language descriptions for grasp.
//!
//! A [`Lang`] bundles a [`LanguageConfig`] with the rule table compiled
//! from it, and turns source text into tokens or trees. Built-in languages
//! are behind `lang-*` features; [`dynamic`] loads others from JSON.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use grasp_core::{Cursor, Token, Tree};
use grasp_syntax::{
    ConfigError, LanguageConfig, ParseError, RuleTable, Tokenizer, build_tree, tokenize,
};

pub mod builtin;
pub mod dynamic;
pub mod grammar;

#[cfg(test)]
mod dynamic_tests;

pub use builtin::*;
pub use dynamic::LoadError;

/// User-facing language type. Works with any language (built-in or dynamic).
pub type Lang = Arc<dyn LangImpl>;

/// Unified facade over a compiled language description.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;

    fn config(&self) -> &LanguageConfig;

    /// Rule table compiled from `config().lexer`.
    fn rules(&self) -> &RuleTable;

    fn tokenize(&self, source: &str) -> Vec<Token> {
        tokenize(self.rules(), source)
    }

    /// Parse source code into a root tree.
    fn parse(&self, source: &str) -> Result<Rc<Tree>, ParseError> {
        build_tree(Tokenizer::new(self.rules(), source), &self.config().parser)
    }

    /// Parse source code and return a cursor on the root tree.
    fn cursor(&self, source: &str) -> Result<Cursor, ParseError> {
        self.parse(source).map(Cursor::from_tree)
    }
}

impl fmt::Debug for dyn LangImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lang").field("name", &self.name()).finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct LangInner {
    name: String,
    config: LanguageConfig,
    rules: RuleTable,
}

impl LangInner {
    /// Compiles the rule table; fails on an inconsistent description.
    pub fn new(name: &str, config: LanguageConfig) -> Result<Self, ConfigError> {
        let rules = RuleTable::build(&config.lexer)?;
        Ok(Self {
            name: name.to_owned(),
            config,
            rules,
        })
    }
}

impl LangImpl for LangInner {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &LanguageConfig {
        &self.config
    }

    fn rules(&self) -> &RuleTable {
        &self.rules
    }
}
