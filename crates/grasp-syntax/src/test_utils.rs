//! Sample language and dump helpers shared by the unit tests.

use grasp_core::{DumpOptions, dump_tokens, dump_tree};

use crate::config::{CommentOption, LexerConfig, ParserConfig, StringOption, TemplateOption};
use crate::lexer::{RuleTable, tokenize};
use crate::parser::build_tree;

/// A small C/Python hybrid exercising every lexer feature.
pub fn sample_lexer() -> LexerConfig {
    LexerConfig::new(
        "[_a-zA-Z][_a-zA-Z0-9]*",
        r"[0-9]+(?:\.[0-9]+)?|\.[0-9]+",
    )
    .join_lines("\\")
    .comment(CommentOption::line("#"))
    .comment(CommentOption::multiline("/*", "*/"))
    .operators(["+", "-", "*", "**", "**=", "=", ".", ":", ","])
    .bracket("(", ")")
    .bracket("[", "]")
    .bracket("{", "}")
    .string(
        StringOption::new("\"")
            .escape_char("\\")
            .templates([
                TemplateOption::expr("${", "}"),
                TemplateOption::var("$", "[a-z]+", ["."]),
            ]),
    )
    .string(StringOption::new("'"))
}

pub fn sample_table() -> RuleTable {
    RuleTable::build(&sample_lexer()).unwrap()
}

pub fn lex(source: &str) -> String {
    dump_tokens(&tokenize(&sample_table(), source), DumpOptions::default())
}

pub fn lex_spans(source: &str) -> String {
    let options = DumpOptions {
        spans: true,
        ..Default::default()
    };
    dump_tokens(&tokenize(&sample_table(), source), options)
}

pub fn parse(source: &str, use_indent_blocks: bool) -> String {
    let config = ParserConfig { use_indent_blocks };
    let tree = build_tree(tokenize(&sample_table(), source), &config).unwrap();
    dump_tree(&tree, DumpOptions::default())
}
