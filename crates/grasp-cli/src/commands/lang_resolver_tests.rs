use std::path::Path;

use grasp_lib::LangImpl;

use super::lang_resolver::{resolve_lang, suggest_language};

#[test]
fn by_name() {
    let lang = resolve_lang(Some("py"), None, None).unwrap();
    assert_eq!(lang.name(), "python");
}

#[test]
fn name_wins_over_extension() {
    let lang = resolve_lang(Some("scala"), None, Some(Path::new("BUILD.bzl"))).unwrap();
    assert_eq!(lang.name(), "scala");
}

#[test]
fn by_extension() {
    let lang = resolve_lang(None, None, Some(Path::new("app/build.gradle"))).unwrap();
    assert_eq!(lang.name(), "groovy");
}

#[test]
fn unknown_name() {
    let err = resolve_lang(Some("cobol"), None, None).unwrap_err();
    assert_eq!(err, "unknown language: 'cobol'");
}

#[test]
fn unknown_extension() {
    let err = resolve_lang(None, None, Some(Path::new("notes.txt"))).unwrap_err();
    assert_eq!(err, "cannot infer language from extension '.txt', use -l/--lang");
}

#[test]
fn stdin_needs_a_language() {
    let err = resolve_lang(None, None, Some(Path::new("-"))).unwrap_err();
    assert_eq!(err, "-l/--lang or --lang-file is required (cannot infer from input)");

    let err = resolve_lang(None, None, None).unwrap_err();
    assert_eq!(err, "-l/--lang or --lang-file is required (cannot infer from input)");
}

#[test]
fn lang_file_missing() {
    let err = resolve_lang(
        Some("python"),
        Some(Path::new("/nonexistent/grasp/lang.json")),
        None,
    )
    .unwrap_err();
    assert!(err.starts_with("cannot read `/nonexistent/grasp/lang.json`"), "{err}");
}

#[test]
fn lang_file_loaded() {
    let path = std::env::temp_dir().join(format!("grasp-lang-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "lexer": { "symbols": "[a-z]+", "numbers": "[0-9]+" } }"#).unwrap();

    let lang = resolve_lang(None, Some(&path), Some(Path::new("x.py"))).unwrap();
    let tokens = lang.tokenize("ab 12");
    std::fs::remove_file(&path).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].value, "12");
}

#[test]
fn suggestions() {
    assert_eq!(suggest_language("pyhton").as_deref(), Some("python"));
    assert_eq!(suggest_language("Gradel").as_deref(), Some("groovy"));
    assert_eq!(suggest_language("skala").as_deref(), Some("scala"));
    assert_eq!(suggest_language("haskell"), None);
}
