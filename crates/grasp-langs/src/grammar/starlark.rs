//! Starlark, the Bazel configuration language.
//!
//! See <https://github.com/bazelbuild/starlark/blob/master/spec.md#lexical-elements>.

use grasp_syntax::{CommentOption, LanguageConfig, LexerConfig, ParserConfig, StringOption};

use super::{BRACKETS, numbers};

#[rustfmt::skip]
const OPERATORS: &[&str] = &[
    "+",   "-",   "*",   "//",  "%",   "**",
    "~",   "&",   "|",   "^",   "<<",  ">>",
    ".",   ",",   "=",   ";",   ":",
    "<",   ">",   ">=",  "<=",  "==",  "!=",
    "+=",  "-=",  "*=",  "//=", "%=",
    "&=",  "|=",  "^=",  "<<=", ">>=",
];

pub fn config() -> LanguageConfig {
    let mut lexer = LexerConfig::new("[_a-zA-Z][_a-zA-Z0-9]*", numbers(false))
        .join_lines("\\")
        .comment(CommentOption::line("#"))
        .operators(OPERATORS.iter().copied());
    for (start, end) in BRACKETS {
        lexer = lexer.bracket(start, end);
    }

    for quote in ["'", "\"", "'''", "\"\"\""] {
        lexer = lexer.string(StringOption::new(quote).escape_char("\\"));
    }
    for prefix in ["r", "rb", "br"] {
        for quote in ["'", "\""] {
            lexer = lexer.string(StringOption::new(format!("{prefix}{quote}")).ends_with(quote));
        }
    }

    LanguageConfig {
        lexer,
        parser: ParserConfig {
            use_indent_blocks: true,
        },
    }
}
