use grasp_core::{DumpOptions, dump_tree};
use grasp_syntax::ConfigError;
use indoc::indoc;

use super::dynamic::*;
use crate::LangImpl;

const INI: &str = indoc! {r#"
    {
      "lexer": {
        "comments": [{ "type": "line-comment", "startsWith": ";" }],
        "symbols": "[a-z]+",
        "numbers": "[0-9]+",
        "operators": ["="],
        "brackets": [{ "startsWith": "[", "endsWith": "]" }]
      }
    }
"#};

#[test]
fn load_from_json() {
    let lang = from_json("ini", INI).unwrap();
    assert_eq!(lang.name(), "ini");
    assert!(!lang.config().parser.use_indent_blocks);

    let tree = lang.parse("[a]\nb=1 ; c").unwrap();
    insta::assert_snapshot!(dump_tree(&tree, DumpOptions::default()), @r#"
    root-tree
      _start
      wrapped-tree "[" "]"
        _start
        symbol "a"
        _end
      newline "\n"
      symbol "b"
      operator "="
      number "1"
      whitespace " "
      comment "; c"
      _end
    "#);
}

#[test]
fn malformed_json() {
    let err = from_json("broken", r#"{ "lexer": { "symbols": 1 } }"#).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn inconsistent_config() {
    let json = r#"{ "lexer": { "symbols": "[a-z]+", "numbers": "[0-9]+", "brackets": [{ "startsWith": "", "endsWith": ")" }] } }"#;
    let err = from_json("broken", json).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Config(ConfigError::EmptyDelimiter { what: "bracket" })
    ));
}

#[test]
fn missing_file() {
    let err = from_file(std::path::Path::new("/nonexistent/lang.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read `/nonexistent/lang.json`"));
}
