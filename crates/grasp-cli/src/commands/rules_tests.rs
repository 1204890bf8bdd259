use grasp_core::Colors;
use grasp_lib::LangImpl;
use grasp_lib::langs::dynamic;

use super::rules::render_rules;

#[test]
fn plain_rendering_matches_table_display() {
    let lang = grasp_langs::scala();
    let out = render_rules(lang.rules(), Colors::OFF);

    assert_eq!(out, lang.rules().to_string());
    assert!(out.starts_with("state $\n"), "{out}");
    assert!(out.contains("(sub-lexer)"), "{out}");
}

#[test]
fn dynamic_language() {
    let json = r#"{ "lexer": { "symbols": "[a-z]+", "numbers": "[0-9]+", "operators": [","] } }"#;
    let lang = dynamic::from_json("custom", json).unwrap();
    let out = render_rules(lang.rules(), Colors::OFF);

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "state $");
    assert!(lines.contains(&"  op$0 operator \",\""), "{out}");
    assert!(lines.contains(&"  unknown _ *"), "{out}");
}

#[test]
fn colored_headers() {
    let lang = grasp_langs::python();
    let out = render_rules(lang.rules(), Colors::ON);

    assert!(out.starts_with("\x1b[34mstate $\x1b[0m\n"), "{out:?}");
    assert!(!out.contains("\x1b[34m  "), "{out:?}");
}
