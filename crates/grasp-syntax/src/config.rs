//! Declarative language descriptions.
//!
//! A [`LanguageConfig`] is everything the rule-table builder and the tree
//! builder need to know about a language. Built-in languages construct it in
//! Rust; dynamic languages deserialize it from camelCase JSON:
//!
//! ```json
//! {
//!   "lexer": {
//!     "joinLines": "\\",
//!     "comments": [{ "type": "line-comment", "startsWith": "#" }],
//!     "symbols": "[_a-zA-Z][_a-zA-Z0-9]*",
//!     "numbers": "[0-9]+",
//!     "operators": ["=", ","],
//!     "brackets": [{ "startsWith": "(", "endsWith": ")" }],
//!     "strings": [{ "startsWith": "\"", "escapeChar": "\\" }]
//!   },
//!   "parser": { "useIndentBlocks": true }
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub lexer: LexerConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexerConfig {
    /// Line continuation marker; `marker` followed by a newline lexes as
    /// whitespace.
    #[serde(default)]
    pub join_lines: Option<String>,
    #[serde(default)]
    pub comments: Vec<CommentOption>,
    /// Regex source for identifiers.
    pub symbols: String,
    /// Regex source for numeric literals.
    pub numbers: String,
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default)]
    pub brackets: Vec<BracketOption>,
    #[serde(default)]
    pub strings: Vec<StringOption>,
}

impl LexerConfig {
    pub fn new(symbols: impl Into<String>, numbers: impl Into<String>) -> Self {
        Self {
            symbols: symbols.into(),
            numbers: numbers.into(),
            ..Default::default()
        }
    }

    pub fn join_lines(mut self, marker: impl Into<String>) -> Self {
        self.join_lines = Some(marker.into());
        self
    }

    pub fn comment(mut self, comment: CommentOption) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators.extend(operators.into_iter().map(Into::into));
        self
    }

    pub fn bracket(mut self, starts_with: impl Into<String>, ends_with: impl Into<String>) -> Self {
        self.brackets.push(BracketOption {
            starts_with: starts_with.into(),
            ends_with: ends_with.into(),
        });
        self
    }

    pub fn string(mut self, string: StringOption) -> Self {
        self.strings.push(string);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CommentOption {
    /// Runs to the end of the line, newline excluded.
    #[serde(rename_all = "camelCase")]
    LineComment { starts_with: String },
    /// Runs to the first `ends_with`, newlines included.
    #[serde(rename_all = "camelCase")]
    MultilineComment {
        starts_with: String,
        ends_with: String,
    },
}

impl CommentOption {
    pub fn line(starts_with: impl Into<String>) -> Self {
        CommentOption::LineComment {
            starts_with: starts_with.into(),
        }
    }

    pub fn multiline(starts_with: impl Into<String>, ends_with: impl Into<String>) -> Self {
        CommentOption::MultilineComment {
            starts_with: starts_with.into(),
            ends_with: ends_with.into(),
        }
    }

    pub fn starts_with(&self) -> &str {
        match self {
            CommentOption::LineComment { starts_with }
            | CommentOption::MultilineComment { starts_with, .. } => starts_with,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketOption {
    pub starts_with: String,
    pub ends_with: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringOption {
    pub starts_with: String,
    /// Defaults to `starts_with`.
    #[serde(default)]
    pub ends_with: Option<String>,
    /// Escape character; it and the character after it are always content.
    #[serde(default)]
    pub escape_char: Option<String>,
    #[serde(default)]
    pub templates: Vec<TemplateOption>,
}

impl StringOption {
    pub fn new(starts_with: impl Into<String>) -> Self {
        Self {
            starts_with: starts_with.into(),
            ..Default::default()
        }
    }

    pub fn ends_with(mut self, ends_with: impl Into<String>) -> Self {
        self.ends_with = Some(ends_with.into());
        self
    }

    pub fn escape_char(mut self, escape: impl Into<String>) -> Self {
        self.escape_char = Some(escape.into());
        self
    }

    pub fn templates(mut self, templates: impl IntoIterator<Item = TemplateOption>) -> Self {
        self.templates.extend(templates);
        self
    }

    pub fn end(&self) -> &str {
        self.ends_with.as_deref().unwrap_or(&self.starts_with)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TemplateOption {
    /// `${ expr }`: the template body is lexed with the root rules until
    /// `ends_with`.
    #[serde(rename_all = "camelCase")]
    Expr {
        starts_with: String,
        ends_with: String,
    },
    /// `$name.field`: a run of symbols joined by the allowed operators, lexed
    /// by a dedicated sub-lexer.
    #[serde(rename_all = "camelCase")]
    Var {
        starts_with: String,
        symbols: String,
        #[serde(default)]
        operators: Vec<String>,
    },
}

impl TemplateOption {
    pub fn expr(starts_with: impl Into<String>, ends_with: impl Into<String>) -> Self {
        TemplateOption::Expr {
            starts_with: starts_with.into(),
            ends_with: ends_with.into(),
        }
    }

    pub fn var<I, S>(starts_with: impl Into<String>, symbols: impl Into<String>, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TemplateOption::Var {
            starts_with: starts_with.into(),
            symbols: symbols.into(),
            operators: operators.into_iter().map(Into::into).collect(),
        }
    }

    pub fn starts_with(&self) -> &str {
        match self {
            TemplateOption::Expr { starts_with, .. } | TemplateOption::Var { starts_with, .. } => {
                starts_with
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Group indented lines into block trees (Python-style).
    #[serde(default)]
    pub use_indent_blocks: bool,
}
