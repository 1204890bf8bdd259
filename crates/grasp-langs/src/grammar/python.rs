//! Python.
//!
//! See <https://docs.python.org/3/reference/lexical_analysis.html>.

use grasp_syntax::{
    CommentOption, LanguageConfig, LexerConfig, ParserConfig, StringOption, TemplateOption,
};

use super::{BRACKETS, numbers};

#[rustfmt::skip]
const OPERATORS: &[&str] = &[
    "+",   "-",   "*",   "**",  "/",   "//",  "%",   "@",
    "<<",  ">>",  "&",   "|",   "^",   "~",   ":=",
    "<",   ">",   "<=",  ">=",  "==",  "!=",
    ".",   ",",   ":",   ";",   "=",   "->",  "!",
    "+=",  "-=",  "*=",  "/=",  "//=", "%=",  "@=",
    "&=",  "|=",  "^=",  ">>=", "<<=", "**=",
];

const QUOTES: [&str; 4] = ["'''", "\"\"\"", "'", "\""];

/// String prefixes: `(prefix, escapes, formatted)`.
const PREFIXES: [(&str, bool, bool); 8] = [
    ("", true, false),
    ("b", true, false),
    ("u", true, false),
    ("r", false, false),
    ("rb", false, false),
    ("br", false, false),
    ("f", true, true),
    ("rf", false, true),
];

pub fn config() -> LanguageConfig {
    let mut lexer = LexerConfig::new("[_a-zA-Z][_a-zA-Z0-9]*", numbers(true))
        .join_lines("\\")
        .comment(CommentOption::line("#"))
        .operators(OPERATORS.iter().copied());
    for (start, end) in BRACKETS {
        lexer = lexer.bracket(start, end);
    }

    for (prefix, escapes, formatted) in PREFIXES {
        for quote in QUOTES {
            let mut string = StringOption::new(format!("{prefix}{quote}")).ends_with(quote);
            if escapes {
                string = string.escape_char("\\");
            }
            if formatted {
                string = string.templates([TemplateOption::expr("{", "}")]);
            }
            lexer = lexer.string(string);
        }
    }

    LanguageConfig {
        lexer,
        parser: ParserConfig {
            use_indent_blocks: true,
        },
    }
}
