//! Scala, including sbt build definitions.

use grasp_syntax::{
    CommentOption, LanguageConfig, LexerConfig, ParserConfig, StringOption, TemplateOption,
};

use super::{BRACKETS, numbers};

#[rustfmt::skip]
const OPERATORS: &[&str] = &[
    "+",   "-",   "*",   "/",   "%",   "%%",  "%%%", "**",
    "++",  "--",
    "+=",  "++=", "-=",  "*=",  "/=",  "%=",  "**=",
    "==",  "!=",  "<",   "<=",  ">",   ">=",  "===", "!==", "<=>",
    "&&",  "||",  "!",
    "&",   "|",   "^",   "~",
    "<<",  ">>",  ">>>",
    "?",   "?:",
    ":=",  "=",   "?=",
    ".",   "?.",  ".@",  ".&",  "::",  ":::",
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
        TemplateOption::var("$", "[a-zA-Z_][a-zA-Z0-9_]*", std::iter::empty::<&str>()),
        TemplateOption::expr("${", "}"),
    ]
}

pub fn config() -> LanguageConfig {
    let mut lexer = LexerConfig::new("[_a-zA-Z][_a-zA-Z0-9]*", numbers(false))
        .join_lines("\\")
        .comment(CommentOption::line("//"))
        .comment(CommentOption::multiline("/*", "*/"))
        .operators(OPERATORS.iter().copied());
    for (start, end) in BRACKETS {
        lexer = lexer.bracket(start, end);
    }

    lexer = lexer
        .string(StringOption::new("\"").escape_char("\\"))
        .string(StringOption::new("raw\"").ends_with("\""));
    for interpolator in ["s", "f"] {
        let string = StringOption::new(format!("{interpolator}\""))
            .ends_with("\"")
            .escape_char("\\")
            .templates(templates());
        lexer = lexer.string(string);
    }

    LanguageConfig {
        lexer,
        parser: ParserConfig {
            use_indent_blocks: false,
        },
    }
}
