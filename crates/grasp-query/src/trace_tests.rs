use grasp_core::Colors;

use super::*;
use crate::test_utils::{Values, parse};

fn trace(query: &Query<Values>, source: &str, verbosity: Verbosity) -> String {
    let compiled = query.compile().unwrap();
    let mut tracer = PrintTracer::new(verbosity, Colors::OFF);
    compiled.run_traced(&parse(source), Vec::new(), &mut tracer);
    tracer.into_lines().join("\n")
}

#[test]
fn default_trace() {
    let query = sym("foo").op(".");

    insta::assert_snapshot!(trace(&query, "foo.", Verbosity::Default), @r"
    ▶ search root-tree
      ● sym symbol
      ● op operator
      ✓ match #1
    ◀ 1 matches
    ● tree root-tree
    ");
}

#[test]
fn verbose_trace() {
    let query = sym("foo").op(".");

    insta::assert_snapshot!(trace(&query, "foo.", Verbosity::Verbose), @r#"
    ▶ search root-tree
      ● sym symbol "foo"
      ● op operator "."
      ✓ match #1
      ○ sym _end
    ◀ 1 matches
    ● tree root-tree
    "#);
}

#[test]
fn very_verbose_trace_has_positions() {
    let query = sym("foo");
    let output = trace(&query, "foo", Verbosity::VeryVerbose);

    assert!(output.contains("→ sym symbol \"foo\" 1:1"), "{output}");
    assert!(output.contains("· 1 _start"), "{output}");
}

#[test]
fn backtracking_is_traced() {
    let query = many(op("-")).op("-").sym("x");
    let output = trace(&query, "---x", Verbosity::Default);

    assert!(output.contains("↺ step 0"), "{output}");
    assert!(output.contains("✓ match #1"), "{output}");
}

#[test]
fn failed_search_is_traced() {
    let query = sym("zzz");
    let output = trace(&query, "a", Verbosity::Verbose);

    assert!(output.contains("○ sym symbol \"a\""), "{output}");
    assert!(output.contains("◀ 0 matches"), "{output}");
    assert!(output.ends_with("○ tree root-tree"), "{output}");
}

#[test]
fn noop_tracer_matches_plain_run() {
    let query: Query<Values> = sym("foo");
    let compiled = query.compile().unwrap();
    let cursor = parse("foo");

    let traced = compiled.run_traced(&cursor, Vec::new(), &mut NoopTracer);
    assert_eq!(traced, compiled.run(&cursor, Vec::new()));
}
