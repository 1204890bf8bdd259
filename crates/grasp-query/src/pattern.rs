//! Value constraints for token and string matchers.

use regex_automata::meta::Regex;

use crate::error::QueryError;

/// What a matched token's text must look like.
///
/// Plain strings convert into [`Pattern::Exact`]; use [`re`] for regexes.
/// Regexes are unanchored: `re("oo")` accepts `foo`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Pattern {
    #[default]
    Any,
    Exact(String),
    Regex(String),
}

/// Matches any value.
pub const ANY: Pattern = Pattern::Any;

pub fn re(pattern: impl Into<String>) -> Pattern {
    Pattern::Regex(pattern.into())
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Pattern::Exact(value.to_string())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::Exact(value)
    }
}

impl Pattern {
    pub(crate) fn compile(&self) -> Result<ValueMatcher, QueryError> {
        Ok(match self {
            Pattern::Any => ValueMatcher::Any,
            Pattern::Exact(value) => ValueMatcher::Exact(value.clone()),
            Pattern::Regex(pattern) => {
                let regex = Regex::new(pattern).map_err(|err| QueryError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: err.to_string(),
                })?;
                ValueMatcher::Regex(regex)
            }
        })
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Any => f.write_str("_"),
            Pattern::Exact(value) => write!(f, "{value:?}"),
            Pattern::Regex(pattern) => write!(f, "/{pattern}/"),
        }
    }
}

/// Compiled [`Pattern`].
#[derive(Clone, Debug)]
pub(crate) enum ValueMatcher {
    Any,
    Exact(String),
    Regex(Regex),
}

impl ValueMatcher {
    pub(crate) fn is_match(&self, value: &str) -> bool {
        match self {
            ValueMatcher::Any => true,
            ValueMatcher::Exact(expected) => expected == value,
            ValueMatcher::Regex(regex) => regex.is_match(value),
        }
    }
}
