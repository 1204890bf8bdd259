use grasp_core::TreeKind;

use super::*;
use crate::test_utils::{Values, parse, push, run};

fn build_error(query: Query<Values>) -> QueryError {
    match query.build() {
        Ok(_) => panic!("query unexpectedly built"),
        Err(err) => err,
    }
}

#[test]
fn invalid_repetition() {
    let err = build_error(Query::new().many_range(sym("a"), 3, Some(1)));
    assert_eq!(err, QueryError::InvalidRepetition { min: 3, max: 1 });
    insta::assert_snapshot!(err, @"repetition minimum 3 exceeds maximum 1");
}

#[test]
fn unbounded_repetition_is_valid() {
    assert!(Query::<Values>::new().many_range(sym("a"), 3, None).build().is_ok());
    assert!(Query::<Values>::new().many_range(sym("a"), 0, Some(0)).build().is_ok());
}

#[test]
fn empty_alternation() {
    let err = build_error(alt(Vec::new()));
    assert_eq!(err, QueryError::EmptyAlternation);
}

#[test]
fn invalid_regex() {
    let err = build_error(sym("a").op(re("(")));
    assert!(matches!(&err, QueryError::InvalidPattern { pattern, .. } if pattern == "("));
    assert!(err.to_string().starts_with("invalid pattern `(`: "));
}

#[test]
fn nested_errors_surface() {
    let inner = sym(re("["));
    let err = build_error(tree(TreeOptions::new().search(many(inner))));
    assert!(matches!(err, QueryError::InvalidPattern { .. }));

    let err = build_error(str_parts(StrOptions::new().template(alt(Vec::new()))));
    assert_eq!(err, QueryError::EmptyAlternation);
}

#[test]
fn run_reports_build_errors() {
    let query: Query<Values> = sym(re("("));
    assert!(query.run(&parse("a"), Vec::new()).is_err());
}

#[test]
fn empty_query_matches_anywhere() {
    let query = Query::<Values>::new();
    assert!(query.is_empty());
    assert_eq!(run(&query, "a"), Some(Vec::new()));
}

#[test]
fn join_appends_steps() {
    let query = sym_with("a", push).join(op(".").sym_with("b", push));
    assert!(!query.is_empty());
    assert_eq!(run(&query, "a.b"), Some(vec!["a".into(), "b".into()]));
}

#[test]
fn compiled_query_is_reusable() {
    let compiled = sym_with(ANY, push).compile().unwrap();

    let first = compiled.run(&parse("a"), Vec::new());
    let second = compiled.run(&parse("b c"), vec!["x".into()]);

    assert_eq!(first, Some(vec!["a".into()]));
    assert_eq!(second, Some(vec!["x".into(), "b".into(), "c".into()]));
}

#[test]
fn root_query_is_not_wrapped() {
    let root = || TreeOptions::<Values>::new().kind(TreeKind::Root);

    // A lone root tree step runs directly against the root cursor.
    let query = tree(root().max_matches(1).search(sym_with(ANY, push)));
    assert_eq!(run(&query, "a b"), Some(vec!["a".into()]));
    assert_eq!(run(&tree(root()), "a b"), Some(Vec::new()));

    // Anything else is searched for below the root and never sees it.
    assert_eq!(run(&tree(root()).end(), "a b"), None);
}

#[test]
fn patterns_convert_from_strings() {
    assert_eq!(Pattern::from("a"), Pattern::Exact("a".into()));
    assert_eq!(Pattern::from(String::from("a")), Pattern::Exact("a".into()));
    assert_eq!(re("a+"), Pattern::Regex("a+".into()));
    assert_eq!(ANY, Pattern::default());

    assert_eq!(ANY.to_string(), "_");
    assert_eq!(Pattern::from("a").to_string(), "\"a\"");
    assert_eq!(re("a+").to_string(), "/a+/");
}
