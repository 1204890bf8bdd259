use grasp_core::{Colors, DumpOptions};
use indoc::indoc;

use super::CommandError;
use super::tokens::render_tokens;
use super::tree::render_tree;

fn plain() -> DumpOptions {
    DumpOptions::default()
}

#[test]
fn tree_text() {
    let out = render_tree(&grasp_langs::python(), "f(x)", false, plain()).unwrap();
    insta::assert_snapshot!(out, @r#"
    root-tree
      _start
      symbol "f"
      wrapped-tree "(" ")"
        _start
        symbol "x"
        _end
      _end
    "#);
}

#[test]
fn tree_spans() {
    let options = DumpOptions {
        spans: true,
        colors: Colors::OFF,
    };
    let out = render_tree(&grasp_langs::python(), "f(x)", false, options).unwrap();
    insta::assert_snapshot!(out, @r#"
    root-tree
      _start 1:1
      symbol "f" 1:1
      wrapped-tree "(" ")"
        _start 1:3
        symbol "x" 1:3
        _end 1:4
      _end 1:5
    "#);
}

#[test]
fn tree_colors() {
    let options = DumpOptions {
        spans: false,
        colors: Colors::ON,
    };
    let out = render_tree(&grasp_langs::python(), "x", false, options).unwrap();
    assert!(out.starts_with("\x1b[34mroot-tree\x1b[0m"), "{out:?}");
}

#[test]
fn tree_json() {
    let out = render_tree(&grasp_langs::starlark(), "a(b)", true, plain()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["type"], "root-tree");
    assert_eq!(value["children"][1]["type"], "symbol");
    assert_eq!(value["children"][1]["value"], "a");

    let call = &value["children"][2];
    assert_eq!(call["type"], "wrapped-tree");
    assert_eq!(call["startsWith"]["value"], "(");
    assert_eq!(call["endsWith"]["value"], ")");
}

#[test]
fn tree_parse_error() {
    let input = indoc! {"
        a:
        \tb
          c
    "};
    let err = render_tree(&grasp_langs::python(), input, false, plain()).unwrap_err();
    assert!(matches!(err, CommandError::Parse(_)));
    assert!(err.to_string().starts_with("inconsistent indentation at 3:3"), "{err}");
}

#[test]
fn tokens_text() {
    let out = render_tokens(&grasp_langs::python(), "a = 1", false, plain()).unwrap();
    insta::assert_snapshot!(out, @r#"
    symbol "a"
    whitespace " "
    operator "="
    whitespace " "
    number "1"
    "#);
}

#[test]
fn tokens_json() {
    let out = render_tokens(&grasp_langs::python(), "a\nb", true, plain()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    let tokens = value.as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1]["type"], "newline");
    assert_eq!(tokens[1]["lineBreaks"], 1);
    assert_eq!(tokens[2]["line"], 2);
}
