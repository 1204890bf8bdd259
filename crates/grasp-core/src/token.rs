//! Flat lexical tokens.
//!
//! Tokens are the leaves of every tree. They are produced by the tokenizer,
//! never mutated after the tree is built, and shared between trees and
//! cursors through `Rc`.

use serde::{Deserialize, Serialize};

/// Token classification.
///
/// `Start` and `End` are zero-width markers inserted by the tree builder;
/// `Unknown` is what the fallback rule produces for input no other rule
/// accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Newline,
    Whitespace,
    Comment,
    Symbol,
    Number,
    Operator,
    BracketLeft,
    BracketRight,
    StringStart,
    StringValue,
    StringEnd,
    TemplateStart,
    TemplateEnd,
    #[serde(rename = "_start")]
    Start,
    #[serde(rename = "_end")]
    End,
    #[serde(rename = "_")]
    Unknown,
}

impl TokenKind {
    pub const ALL: [TokenKind; 16] = [
        TokenKind::Newline,
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::Symbol,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::BracketLeft,
        TokenKind::BracketRight,
        TokenKind::StringStart,
        TokenKind::StringValue,
        TokenKind::StringEnd,
        TokenKind::TemplateStart,
        TokenKind::TemplateEnd,
        TokenKind::Start,
        TokenKind::End,
        TokenKind::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Newline => "newline",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Symbol => "symbol",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::BracketLeft => "bracket-left",
            TokenKind::BracketRight => "bracket-right",
            TokenKind::StringStart => "string-start",
            TokenKind::StringValue => "string-value",
            TokenKind::StringEnd => "string-end",
            TokenKind::TemplateStart => "template-start",
            TokenKind::TemplateEnd => "template-end",
            TokenKind::Start => "_start",
            TokenKind::End => "_end",
            TokenKind::Unknown => "_",
        }
    }

    /// Whitespace, newlines and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment
        )
    }

    /// Kinds skipped by query matchers before they look at a node.
    ///
    /// This is trivia plus the `_start` marker. `_end` is deliberately not
    /// minor: it is what `end()` anchors on.
    pub fn is_minor(self) -> bool {
        self.is_trivia() || self == TokenKind::Start
    }

    pub fn is_marker(self) -> bool {
        matches!(self, TokenKind::Start | TokenKind::End)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical token.
///
/// `offset` is a byte offset into the source; `line` and `col` are 1-based,
/// with columns counted in characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
    pub line_breaks: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        value: impl Into<String>,
        offset: usize,
        line: usize,
        col: usize,
    ) -> Self {
        let value = value.into();
        let line_breaks = value.matches('\n').count();
        Self {
            kind,
            value,
            offset,
            line,
            col,
            line_breaks,
        }
    }

    /// Zero-width token of `kind` placed exactly where `self` starts.
    pub fn marker_before(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            value: String::new(),
            offset: self.offset,
            line: self.line,
            col: self.col,
            line_breaks: 0,
        }
    }

    /// Zero-width token of `kind` placed right after `self` ends.
    pub fn marker_after(&self, kind: TokenKind) -> Token {
        let (line, col) = self.end_point();
        Token {
            kind,
            value: String::new(),
            offset: self.offset + self.value.len(),
            line,
            col,
            line_breaks: 0,
        }
    }

    /// Line and column of the first character after this token.
    pub fn end_point(&self) -> (usize, usize) {
        match self.value.rfind('\n') {
            Some(idx) => (
                self.line + self.line_breaks,
                self.value[idx + 1..].chars().count() + 1,
            ),
            None => (self.line, self.col + self.value.chars().count()),
        }
    }

    pub fn is_zero_width(&self) -> bool {
        self.value.is_empty()
    }
}
