use grasp_core::TokenKind;

use super::*;
use crate::config::{LexerConfig, StringOption, TemplateOption};
use crate::error::ConfigError;
use crate::test_utils::{sample_lexer, sample_table};

fn minimal() -> LexerConfig {
    LexerConfig::new("[a-z]+", "[0-9]+")
}

#[test]
fn state_names() {
    let table = sample_table();
    let names: Vec<_> = table.states().map(|(name, _)| name).collect();
    assert_eq!(names, ["$", "str$0", "str$1", "str$0$tpl$0"]);
    assert_eq!(table.state_index("str$1"), Some(2));
    assert!(table.state("missing").is_none());
}

#[test]
fn every_state_is_prefix_ordered() {
    assert!(sample_table().is_prefix_ordered());
}

#[test]
fn root_rules_start_with_number_and_end_with_fallback() {
    let table = sample_table();
    let root = table.root();
    assert_eq!(root.first().map(|r| r.kind), Some(TokenKind::Number));
    assert_eq!(root.last().map(|r| r.kind), Some(TokenKind::Unknown));
    assert!(root.iter().any(|r| r.action == Action::Push("str$0".into())));
}

#[test]
fn string_state() {
    let table = sample_table();
    let rules = table.state("str$0").unwrap();

    let end = rules.iter().find(|r| r.kind == TokenKind::StringEnd).unwrap();
    assert_eq!(end.literal_text(), Some("\""));
    assert_eq!(end.action, Action::Pop);

    let var = rules.iter().find(|r| r.sub.is_some()).unwrap();
    assert_eq!(var.chunk.as_deref(), Some("$"));

    assert_eq!(rules.last().map(|r| r.kind), Some(TokenKind::StringValue));
}

#[test]
fn template_state_replaces_closing_bracket() {
    let table = sample_table();
    let rules = table.state("str$0$tpl$0").unwrap();

    let closers: Vec<_> = rules
        .iter()
        .filter(|r| r.literal_text() == Some("}"))
        .collect();
    assert_eq!(closers.len(), 1);
    assert_eq!(closers[0].kind, TokenKind::TemplateEnd);
    assert_eq!(closers[0].action, Action::Pop);

    assert!(rules.iter().any(|r| r.literal_text() == Some("{")));
    assert_eq!(rules.len(), table.root().len());
}

#[test]
fn template_end_is_added_when_root_lacks_it() {
    let config = minimal().string(
        StringOption::new("`").templates([TemplateOption::expr("#{", "}")]),
    );
    let table = RuleTable::build(&config).unwrap();

    let rules = table.state("str$0$tpl$0").unwrap();
    assert_eq!(rules.len(), table.root().len() + 1);
    assert!(rules.iter().any(|r| r.kind == TokenKind::TemplateEnd));
}

#[test]
fn duplicate_operators_are_merged() {
    let config = minimal().operators(["?=", "+", "?="]);
    let table = RuleTable::build(&config).unwrap();
    let ops = table
        .root()
        .iter()
        .filter(|r| r.kind == TokenKind::Operator)
        .count();
    assert_eq!(ops, 2);
}

#[test]
fn rendering_lists_states() {
    let config = minimal().bracket("(", ")");
    let res = RuleTable::build(&config).unwrap().to_string();

    insta::assert_snapshot!(res, @r#"
    state $
      number number /.../
      bracket$0$end bracket-right ")"
      bracket$0$start bracket-left "("
      newline newline /.../
      whitespace whitespace /.../
      symbol symbol /.../
      unknown _ *
    "#);
}

#[test]
fn empty_delimiter() {
    let err = RuleTable::build(&minimal().bracket("", ")")).unwrap_err();
    assert_eq!(err, ConfigError::EmptyDelimiter { what: "bracket" });

    let err = RuleTable::build(&minimal().string(StringOption::new(""))).unwrap_err();
    assert_eq!(err, ConfigError::EmptyDelimiter { what: "string" });
}

#[test]
fn duplicate_bracket() {
    let config = minimal().bracket("(", ")").bracket("(", "]");
    let err = RuleTable::build(&config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::DuplicateDelimiter {
            delimiter: "(".into()
        }
    );
}

#[test]
fn string_opener_clashes_with_bracket() {
    let config = minimal().bracket("<", ">").string(StringOption::new("<"));
    let err = RuleTable::build(&config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::DuplicateDelimiter {
            delimiter: "<".into()
        }
    );
}

#[test]
fn template_conflicts_with_string_end() {
    let config = minimal().string(
        StringOption::new("'").templates([TemplateOption::expr("'", "'")]),
    );
    let err = RuleTable::build(&config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::TemplateConflict {
            template: "'".into()
        }
    );
}

#[test]
fn variable_template_operator_must_be_declared() {
    let mut config = sample_lexer();
    config.strings[0].templates = vec![TemplateOption::var("$", "[a-z]+", ["->"])];
    let err = RuleTable::build(&config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UndeclaredOperator {
            template: "$".into(),
            operator: "->".into()
        }
    );
}

#[test]
fn invalid_symbol_pattern() {
    let err = RuleTable::build(&LexerConfig::new("[a-", "[0-9]+")).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidPattern { what: "symbol", ref pattern, .. } if pattern == "[a-"
    ));
}
