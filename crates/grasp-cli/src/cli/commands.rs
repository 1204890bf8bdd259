//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! `tokens` and `tree` take the same source and language flags.

use clap::Command;

use super::args::*;

/// Add source input and language selection args.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(lang_file_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("grasp")
        .about("Tokenize, parse and inspect structured source text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(tree_command())
        .subcommand(rules_command())
        .subcommand(langs_command())
}

/// Show the flat token stream of a source file.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream of a source file")
        .override_usage(
            "\
  grasp tokens <SOURCE>
  grasp tokens -s <TEXT> -l <LANG>
  grasp tokens <SOURCE> --lang-file <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  grasp tokens app.py                   # language from extension
  grasp tokens -s 'f"{x}"' -l python    # inline source
  grasp tokens app.ini --lang-file ini.json
  grasp tokens app.py --spans           # with line:col"#,
        );

    with_input_args(cmd)
        .arg(json_arg())
        .arg(spans_arg())
        .arg(color_arg())
}

/// Show the tree built from a source file.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the tree of a source file")
        .override_usage(
            "\
  grasp tree <SOURCE>
  grasp tree -s <TEXT> -l <LANG>
  grasp tree <SOURCE> --lang-file <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  grasp tree BUILD.bazel                # language from extension
  grasp tree -s 'a(b)' -l starlark      # inline source
  grasp tree app.py --json              # JSON output
  grasp tree app.py --spans             # with line:col"#,
        );

    with_input_args(cmd)
        .arg(json_arg())
        .arg(spans_arg())
        .arg(color_arg())
}

/// Show the compiled lexer rule table of a language.
pub fn rules_command() -> Command {
    Command::new("rules")
        .about("Show the lexer rule table of a language")
        .override_usage(
            "\
  grasp rules -l <LANG>
  grasp rules --lang-file <FILE>",
        )
        .arg(lang_arg())
        .arg(lang_file_arg())
        .arg(color_arg())
}

/// List built-in languages.
pub fn langs_command() -> Command {
    Command::new("langs")
        .about("List built-in languages with aliases and extensions")
        .arg(json_arg())
}
