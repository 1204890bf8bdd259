//! Groovy, including Gradle build scripts.
//!
//! See <https://docs.groovy-lang.org/latest/html/documentation/#groovy-operators>.

use grasp_syntax::{
    CommentOption, LanguageConfig, LexerConfig, ParserConfig, StringOption, TemplateOption,
};

use super::{BRACKETS, numbers};

#[rustfmt::skip]
const OPERATORS: &[&str] = &[
    "+",   "-",   "*",   "/",   "%",   "**",
    "++",  "--",
    "+=",  "-=",  "*=",  "/=",  "%=",  "**=",
    "==",  "!=",  "<",   "<=",  ">",   ">=",  "===", "!==", "<=>",
    "&&",  "||",  "!",
    "&",   "|",   "^",   "~",
    "<<",  ">>",  ">>>",
    "?",   "?:",
    "=",   "?=",
    ".",   "?.",  ".@",  ".&",  "::",
    "=~",  "==~",
    "*.",  ":",
    "..",  "..<",
    "<>",
    "<<=", ">>=", ">>>=", "&=", "^=",  "|=",
    "->",
    ",",   ";",
];

fn templates() -> [TemplateOption; 2] {
    [
        TemplateOption::var("$", "[a-zA-Z_][a-zA-Z0-9_]*", ["."]),
        TemplateOption::expr("${", "}"),
    ]
}

pub fn config() -> LanguageConfig {
    let mut lexer = LexerConfig::new("[a-zA-Z$_][a-zA-Z0-9$_]*", numbers(true))
        .join_lines("\\")
        .comment(CommentOption::line("#!"))
        .comment(CommentOption::line("//"))
        .comment(CommentOption::multiline("/*", "*/"))
        .operators(OPERATORS.iter().copied());
    for (start, end) in BRACKETS {
        lexer = lexer.bracket(start, end);
    }

    lexer = lexer
        .string(StringOption::new("'").escape_char("\\"))
        .string(StringOption::new("'''").escape_char("\\"))
        .string(StringOption::new("\"").escape_char("\\").templates(templates()))
        .string(StringOption::new("\"\"\"").escape_char("\\").templates(templates()));

    LanguageConfig {
        lexer,
        parser: ParserConfig {
            use_indent_blocks: false,
        },
    }
}
