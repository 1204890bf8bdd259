//! Rule tables: named lexer states, each an ordered list of rules.
//!
//! The root state `$` lexes ordinary code. Every string option adds a state
//! `str$N` for its body, and every expression template inside it adds
//! `str$N$tpl$M`, a copy of the root rules where the template end pops back
//! into the string. Variable templates carry their own single-state table
//! used to re-lex the matched text.

use std::collections::HashSet;
use std::fmt;

use grasp_core::TokenKind;
use indexmap::IndexMap;

use super::rules::{Action, Rule, is_prefix_ordered, sort_rules};
use crate::config::{CommentOption, LexerConfig, StringOption, TemplateOption};
use crate::error::ConfigError;

pub const ROOT_STATE: &str = "$";

#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    states: IndexMap<String, Vec<Rule>>,
}

impl RuleTable {
    /// Validates `config` and builds the table. Every state is sorted.
    pub fn build(config: &LexerConfig) -> Result<Self, ConfigError> {
        validate(config)?;

        let mut table = RuleTable::default();
        let mut root = root_rules(config)?;

        let mut string_states = Vec::with_capacity(config.strings.len());
        for (i, string) in config.strings.iter().enumerate() {
            let state = format!("str${i}");
            root.push(
                Rule::literal(format!("{state}$start"), TokenKind::StringStart, &string.starts_with)
                    .with_action(Action::Push(state.clone())),
            );
            string_states.push((state, string));
        }

        root.push(Rule::fallback("unknown", TokenKind::Unknown));
        sort_rules(&mut root);

        let mut bodies = Vec::with_capacity(string_states.len());
        let mut template_states = Vec::new();
        for (state, string) in string_states {
            let (rules, templates) = string_rules(&state, string)?;
            bodies.push((state, rules));
            template_states.extend(templates);
        }

        let templates: Vec<_> = template_states
            .into_iter()
            .map(|(state, ends_with)| {
                let rules = template_rules(&state, &root, &ends_with);
                (state, rules)
            })
            .collect();

        table.states.insert(ROOT_STATE.to_string(), root);
        for (state, rules) in bodies.into_iter().chain(templates) {
            table.insert(state, rules);
        }
        Ok(table)
    }

    fn insert(&mut self, state: String, mut rules: Vec<Rule>) {
        sort_rules(&mut rules);
        self.states.insert(state, rules);
    }

    pub fn state(&self, name: &str) -> Option<&[Rule]> {
        self.states.get(name).map(Vec::as_slice)
    }

    pub fn state_index(&self, name: &str) -> Option<usize> {
        self.states.get_index_of(name)
    }

    pub fn rules_at(&self, index: usize) -> &[Rule] {
        self.states
            .get_index(index)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn root(&self) -> &[Rule] {
        self.rules_at(0)
    }

    pub fn states(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.states
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// True if every state keeps longer chunks ahead of their prefixes.
    pub fn is_prefix_ordered(&self) -> bool {
        self.states.values().all(|rules| is_prefix_ordered(rules))
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        for (name, rules) in &self.states {
            writeln!(f, "{pad}state {name}")?;
            for rule in rules {
                writeln!(f, "{pad}  {rule}")?;
                if let Some(sub) = &rule.sub {
                    sub.write_indented(f, indent + 2)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

fn escape(text: &str) -> String {
    regex_syntax::escape(text)
}

fn root_rules(config: &LexerConfig) -> Result<Vec<Rule>, ConfigError> {
    let mut rules = vec![Rule::pattern(
        "newline",
        TokenKind::Newline,
        "newline",
        r"\r?\n",
    )?];

    let whitespace = match &config.join_lines {
        Some(marker) => format!(r"(?:[ \t\r]|{}\r?\n)+", escape(marker)),
        None => r"[ \t\r]+".to_string(),
    };
    rules.push(Rule::pattern(
        "whitespace",
        TokenKind::Whitespace,
        "whitespace",
        &whitespace,
    )?);

    for (i, comment) in config.comments.iter().enumerate() {
        let pattern = match comment {
            CommentOption::LineComment { starts_with } => {
                format!(r"{}[^\r\n]*", escape(starts_with))
            }
            CommentOption::MultilineComment {
                starts_with,
                ends_with,
            } => format!(r"{}(?s:.)*?{}", escape(starts_with), escape(ends_with)),
        };
        rules.push(
            Rule::pattern(format!("comment${i}"), TokenKind::Comment, "comment", &pattern)?
                .with_chunk(comment.starts_with()),
        );
    }

    rules.push(Rule::pattern(
        "symbol",
        TokenKind::Symbol,
        "symbol",
        &config.symbols,
    )?);
    rules.push(Rule::pattern(
        "number",
        TokenKind::Number,
        "number",
        &config.numbers,
    )?);

    let mut seen = HashSet::new();
    for (i, op) in config.operators.iter().enumerate() {
        if seen.insert(op.as_str()) {
            rules.push(Rule::literal(format!("op${i}"), TokenKind::Operator, op));
        }
    }

    for (i, bracket) in config.brackets.iter().enumerate() {
        rules.push(Rule::literal(
            format!("bracket${i}$start"),
            TokenKind::BracketLeft,
            &bracket.starts_with,
        ));
        rules.push(Rule::literal(
            format!("bracket${i}$end"),
            TokenKind::BracketRight,
            &bracket.ends_with,
        ));
    }

    Ok(rules)
}

/// Rules of one string body, plus the expression-template states it needs.
fn string_rules(
    state: &str,
    string: &StringOption,
) -> Result<(Vec<Rule>, Vec<(String, String)>), ConfigError> {
    let mut rules = vec![
        Rule::literal(format!("{state}$end"), TokenKind::StringEnd, string.end())
            .with_action(Action::Pop),
    ];
    let mut templates = Vec::new();

    for (j, template) in string.templates.iter().enumerate() {
        let name = format!("{state}$tpl${j}");
        match template {
            TemplateOption::Expr {
                starts_with,
                ends_with,
            } => {
                rules.push(
                    Rule::literal(format!("{name}$start"), TokenKind::TemplateStart, starts_with)
                        .with_action(Action::Push(name.clone())),
                );
                templates.push((name, ends_with.clone()));
            }
            TemplateOption::Var {
                starts_with,
                symbols,
                operators,
            } => {
                let symbol = format!("(?:{symbols})");
                let pattern = if operators.is_empty() {
                    format!("{}{symbol}", escape(starts_with))
                } else {
                    let ops = operators
                        .iter()
                        .map(|op| escape(op))
                        .collect::<Vec<_>>()
                        .join("|");
                    format!("{}{symbol}(?:(?:{ops}){symbol})*", escape(starts_with))
                };
                rules.push(
                    Rule::pattern(name, TokenKind::TemplateStart, "template", &pattern)?
                        .with_chunk(starts_with)
                        .with_sub(var_table(starts_with, symbols, operators)?),
                );
            }
        }
    }

    if let Some(escape_char) = &string.escape_char {
        rules.push(
            Rule::pattern(
                format!("{state}$escape"),
                TokenKind::StringValue,
                "escape",
                &format!("{}(?s:.)", escape(escape_char)),
            )?
            .with_chunk(escape_char),
        );
    }

    rules.push(Rule::fallback(format!("{state}$value"), TokenKind::StringValue));
    Ok((rules, templates))
}

/// Root rules where `ends_with` closes the template instead of lexing as
/// whatever the root makes of it.
fn template_rules(state: &str, root: &[Rule], ends_with: &str) -> Vec<Rule> {
    let end = Rule::literal(format!("{state}$end"), TokenKind::TemplateEnd, ends_with)
        .with_action(Action::Pop);

    let mut rules = root.to_vec();
    match rules
        .iter()
        .position(|rule| rule.literal_text() == Some(ends_with))
    {
        Some(index) => rules[index] = end,
        None => rules.push(end),
    }
    rules
}

/// Single-state table splitting a variable template into its parts.
fn var_table(
    starts_with: &str,
    symbols: &str,
    operators: &[String],
) -> Result<RuleTable, ConfigError> {
    let mut rules = vec![
        Rule::literal("start", TokenKind::TemplateStart, starts_with),
        Rule::pattern("symbol", TokenKind::Symbol, "template symbol", symbols)?,
    ];
    for (i, op) in operators.iter().enumerate() {
        rules.push(Rule::literal(format!("op${i}"), TokenKind::Operator, op));
    }
    rules.push(Rule::fallback("unknown", TokenKind::Unknown));

    let mut table = RuleTable::default();
    table.insert(ROOT_STATE.to_string(), rules);
    Ok(table)
}

fn non_empty(text: &str, what: &'static str) -> Result<(), ConfigError> {
    if text.is_empty() {
        return Err(ConfigError::EmptyDelimiter { what });
    }
    Ok(())
}

fn validate(config: &LexerConfig) -> Result<(), ConfigError> {
    if let Some(marker) = &config.join_lines {
        non_empty(marker, "line join")?;
    }
    for comment in &config.comments {
        non_empty(comment.starts_with(), "comment")?;
        if let CommentOption::MultilineComment { ends_with, .. } = comment {
            non_empty(ends_with, "comment")?;
        }
    }
    for op in &config.operators {
        non_empty(op, "operator")?;
    }

    let mut openers = HashSet::new();
    for bracket in &config.brackets {
        non_empty(&bracket.starts_with, "bracket")?;
        non_empty(&bracket.ends_with, "bracket")?;
        if !openers.insert(bracket.starts_with.as_str()) {
            return Err(ConfigError::DuplicateDelimiter {
                delimiter: bracket.starts_with.clone(),
            });
        }
    }

    for string in &config.strings {
        non_empty(&string.starts_with, "string")?;
        non_empty(string.end(), "string")?;
        if let Some(escape_char) = &string.escape_char {
            non_empty(escape_char, "string escape")?;
        }
        if !openers.insert(string.starts_with.as_str()) {
            return Err(ConfigError::DuplicateDelimiter {
                delimiter: string.starts_with.clone(),
            });
        }

        for template in &string.templates {
            non_empty(template.starts_with(), "template")?;
            if template.starts_with() == string.end() {
                return Err(ConfigError::TemplateConflict {
                    template: template.starts_with().to_string(),
                });
            }
            match template {
                TemplateOption::Expr { ends_with, .. } => non_empty(ends_with, "template")?,
                TemplateOption::Var {
                    starts_with,
                    operators,
                    ..
                } => {
                    for op in operators {
                        if !config.operators.contains(op) {
                            return Err(ConfigError::UndeclaredOperator {
                                template: starts_with.clone(),
                                operator: op.clone(),
                            });
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
