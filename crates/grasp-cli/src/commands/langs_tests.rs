use grasp_langs::LangInfo;

use super::langs::{render_json, render_list};

const INFOS: [LangInfo; 2] = [
    LangInfo {
        name: "python",
        aliases: &["python", "py"],
        extensions: &["py", "pyi"],
    },
    LangInfo {
        name: "custom",
        aliases: &["custom"],
        extensions: &[],
    },
];

#[test]
fn list() {
    insta::assert_snapshot!(render_list(&INFOS), @r"
    Supported languages (2):
      python (py) [.py, .pyi]
      custom
    ");
}

#[test]
fn json() {
    let out = render_json(&INFOS).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value[0]["name"], "python");
    assert_eq!(value[0]["aliases"], serde_json::json!(["python", "py"]));
    assert_eq!(value[1]["extensions"], serde_json::json!([]));
}

#[test]
fn builtin_list() {
    let out = render_list(&grasp_langs::all_info());
    assert!(out.contains("  starlark (star, bazel, bzl) [.star, .bzl, .bazel, .sky]\n"), "{out}");
    assert!(out.contains("  groovy (gradle) ["), "{out}");
}
