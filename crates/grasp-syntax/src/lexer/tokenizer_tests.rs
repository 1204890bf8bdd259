use grasp_core::TokenKind;

use super::*;
use crate::test_utils::{lex, lex_spans, sample_table};

#[test]
fn empty_input() {
    assert!(tokenize(&sample_table(), "").is_empty());
}

#[test]
fn simple_expression() {
    insta::assert_snapshot!(lex("foo + 42"), @r#"
    symbol "foo"
    whitespace " "
    operator "+"
    whitespace " "
    number "42"
    "#);
}

#[test]
fn longest_operator_wins() {
    insta::assert_snapshot!(lex("a**=b**c*d"), @r#"
    symbol "a"
    operator "**="
    symbol "b"
    operator "**"
    symbol "c"
    operator "*"
    symbol "d"
    "#);
}

#[test]
fn leading_dot_number() {
    insta::assert_snapshot!(lex(".42 a.b"), @r#"
    number ".42"
    whitespace " "
    symbol "a"
    operator "."
    symbol "b"
    "#);
}

#[test]
fn comments() {
    insta::assert_snapshot!(lex("x # hi\n/* a\nb */y"), @r##"
    symbol "x"
    whitespace " "
    comment "# hi"
    newline "\n"
    comment "/* a\nb */"
    symbol "y"
    "##);
}

#[test]
fn crlf_is_one_newline() {
    insta::assert_snapshot!(lex("a\r\nb"), @r#"
    symbol "a"
    newline "\r\n"
    symbol "b"
    "#);
}

#[test]
fn unknown_characters() {
    insta::assert_snapshot!(lex("a ? é"), @r#"
    symbol "a"
    whitespace " "
    _ "?"
    whitespace " "
    _ "é"
    "#);
}

#[test]
fn string_with_escape_and_expression_template() {
    insta::assert_snapshot!(lex(r#""a\"b${f(1)}""#), @r#"
    string-start "\""
    string-value "a"
    string-value "\\\""
    string-value "b"
    template-start "${"
    symbol "f"
    bracket-left "("
    number "1"
    bracket-right ")"
    template-end "}"
    string-end "\""
    "#);
}

#[test]
fn variable_template_is_split_by_sub_lexer() {
    insta::assert_snapshot!(lex_spans(r#""$a.b""#), @r#"
    string-start "\"" 1:1
    template-start "$" 1:2
    symbol "a" 1:3
    operator "." 1:4
    symbol "b" 1:5
    template-end "" 1:6
    string-end "\"" 1:6
    "#);
}

#[test]
fn variable_template_needs_a_symbol() {
    insta::assert_snapshot!(lex(r#""$1""#), @r#"
    string-start "\""
    string-value "$"
    string-value "1"
    string-end "\""
    "#);
}

#[test]
fn string_without_templates_is_plain_text() {
    insta::assert_snapshot!(lex("'${x}'"), @r#"
    string-start "'"
    string-value "$"
    string-value "{"
    string-value "x"
    string-value "}"
    string-end "'"
    "#);
}

#[test]
fn unterminated_string_stays_in_string_state() {
    let table = sample_table();
    let mut tokenizer = Tokenizer::new(&table, "'ab");
    assert_eq!(tokenizer.state(), Some(ROOT_STATE));

    let first = tokenizer.next().unwrap();
    assert_eq!(first.kind, TokenKind::StringStart);
    assert_eq!(tokenizer.state(), Some("str$1"));

    let rest: Vec<_> = tokenizer.map(|t| t.kind).collect();
    assert_eq!(rest, [TokenKind::StringValue, TokenKind::StringValue]);
}

#[test]
fn closer_at_root_does_not_pop() {
    insta::assert_snapshot!(lex("}x"), @r#"
    bracket-right "}"
    symbol "x"
    "#);
}

#[test]
fn line_join_is_whitespace() {
    let tokens = tokenize(&sample_table(), "foo\\\nbar");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Whitespace);
    assert_eq!(tokens[1].value, "\\\n");
    assert_eq!(tokens[1].line_breaks, 1);

    let bar = &tokens[2];
    assert_eq!(bar.kind, TokenKind::Symbol);
    assert_eq!((bar.offset, bar.line, bar.col), (5, 2, 1));
}

#[test]
fn positions_count_characters() {
    insta::assert_snapshot!(lex_spans("é=1\n  b"), @r#"
    _ "é" 1:1
    operator "=" 1:2
    number "1" 1:3
    newline "\n" 1:4
    whitespace "  " 2:1
    symbol "b" 2:3
    "#);

    let tokens = tokenize(&sample_table(), "é=1");
    assert_eq!(tokens[1].offset, 2);
}

#[test]
fn tokens_cover_the_input() {
    let source = "x = f\"${a}b $c\" # done\n";
    let tokens = tokenize(&sample_table(), source);
    let joined: String = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::TemplateEnd || !t.value.is_empty())
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(joined, source);
}
