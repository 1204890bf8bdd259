//! Lexical rules and their ordering.
//!
//! At any input position the tokenizer takes the first rule of the current
//! state that matches, so the order of rules inside a state decides every
//! ambiguity. Rules are ranked:
//!
//! 1. number patterns, so `.42` is a number and not `.` followed by `42`
//! 2. rules with a literal prefix ("chunk"): literals, comments, escapes
//!    and variable templates, longest-prefix first
//! 3. plain patterns, in declaration order
//! 4. fallbacks
//!
//! Within rank 2, a chunk that extends another chunk always comes first
//! (`**=` before `**` before `*`); unrelated chunks are ordered by text,
//! descending. Sorting is stable and idempotent.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use grasp_core::TokenKind;
use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use super::table::RuleTable;
use crate::error::ConfigError;

/// How a rule recognizes input.
#[derive(Clone, Debug)]
pub enum RuleMatch {
    Literal(String),
    Pattern(Regex),
    /// Always matches exactly one character.
    Fallback,
}

/// State transition performed after a rule matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Stay,
    Push(String),
    Pop,
}

#[derive(Clone, Debug)]
pub struct Rule {
    pub name: String,
    pub kind: TokenKind,
    pub matcher: RuleMatch,
    /// Literal text every match starts with; orders the rule among literals.
    pub chunk: Option<String>,
    pub action: Action,
    /// Sub-lexer for the matched text (variable templates).
    pub sub: Option<Arc<RuleTable>>,
}

impl Rule {
    pub fn literal(name: impl Into<String>, kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            name: name.into(),
            kind,
            chunk: Some(text.clone()),
            matcher: RuleMatch::Literal(text),
            action: Action::Stay,
            sub: None,
        }
    }

    pub fn pattern(
        name: impl Into<String>,
        kind: TokenKind,
        what: &'static str,
        pattern: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.into(),
            kind,
            matcher: RuleMatch::Pattern(compile(what, pattern)?),
            chunk: None,
            action: Action::Stay,
            sub: None,
        })
    }

    pub fn fallback(name: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            name: name.into(),
            kind,
            matcher: RuleMatch::Fallback,
            chunk: None,
            action: Action::Stay,
            sub: None,
        }
    }

    pub fn with_chunk(mut self, chunk: impl Into<String>) -> Self {
        self.chunk = Some(chunk.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn with_sub(mut self, sub: RuleTable) -> Self {
        self.sub = Some(Arc::new(sub));
        self
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.matcher, RuleMatch::Literal(_))
    }

    pub fn literal_text(&self) -> Option<&str> {
        match &self.matcher {
            RuleMatch::Literal(text) => Some(text),
            _ => None,
        }
    }

    /// Length in bytes of the match at `pos`, if any.
    ///
    /// Zero-length pattern matches count as no match.
    pub fn match_len(&self, input: &str, pos: usize) -> Option<usize> {
        let rest = input.get(pos..)?;
        match &self.matcher {
            RuleMatch::Literal(text) => rest.starts_with(text.as_str()).then_some(text.len()),
            RuleMatch::Pattern(regex) => {
                let search = Input::new(input)
                    .span(pos..input.len())
                    .anchored(Anchored::Yes);
                let m = regex.search(&search)?;
                let len = m.end() - pos;
                (len > 0).then_some(len)
            }
            RuleMatch::Fallback => rest.chars().next().map(char::len_utf8),
        }
    }

    fn rank(&self) -> u8 {
        if self.kind == TokenKind::Number {
            0
        } else if self.chunk.is_some() {
            1
        } else if matches!(self.matcher, RuleMatch::Fallback) {
            3
        } else {
            2
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.kind)?;
        match &self.matcher {
            RuleMatch::Literal(text) => write!(f, " {text:?}")?,
            RuleMatch::Pattern(_) => match &self.chunk {
                Some(chunk) => write!(f, " /{chunk:?}.../")?,
                None => f.write_str(" /.../")?,
            },
            RuleMatch::Fallback => f.write_str(" *")?,
        }
        match &self.action {
            Action::Stay => {}
            Action::Push(state) => write!(f, " -> {state}")?,
            Action::Pop => f.write_str(" <-")?,
        }
        if self.sub.is_some() {
            f.write_str(" (sub-lexer)")?;
        }
        Ok(())
    }
}

pub(crate) fn compile(what: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|err| ConfigError::InvalidPattern {
        what,
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}

/// Order two chunks: extensions before their prefixes, then descending text.
pub fn compare_chunks(x: &str, y: &str) -> Ordering {
    if x == y {
        Ordering::Equal
    } else if y.starts_with(x) {
        Ordering::Greater
    } else if x.starts_with(y) {
        Ordering::Less
    } else {
        y.cmp(x)
    }
}

fn compare_rules(x: &Rule, y: &Rule) -> Ordering {
    x.rank().cmp(&y.rank()).then_with(|| match (&x.chunk, &y.chunk) {
        (Some(x), Some(y)) => compare_chunks(x, y),
        _ => Ordering::Equal,
    })
}

/// Stable in-place sort of one state's rules.
pub fn sort_rules(rules: &mut [Rule]) {
    rules.sort_by(compare_rules);
}

/// Checks that no chunk is followed by a chunk extending it.
pub fn is_prefix_ordered(rules: &[Rule]) -> bool {
    rules.iter().enumerate().all(|(i, earlier)| {
        let Some(short) = &earlier.chunk else {
            return true;
        };
        rules[i + 1..].iter().all(|later| match &later.chunk {
            Some(long) => long == short || !long.starts_with(short.as_str()),
            None => true,
        })
    })
}
