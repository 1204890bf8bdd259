//! Lazy tokenizer driven by a [`RuleTable`].
//!
//! The tokenizer keeps a stack of lexer states, starting at the root. At each
//! position the first rule of the top state that matches wins; its action
//! may push a state (string or template bodies) or pop back. A pop at the
//! root is ignored. Rules with a sub-lexer have their matched text re-lexed
//! and are followed by a zero-width `template-end` token.
//!
//! Positions: `offset` is in bytes, `line` and `col` are 1-based and columns
//! count characters.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use grasp_core::{Token, TokenKind};

use super::rules::Action;
use super::table::RuleTable;

pub struct Tokenizer<'t, 's> {
    table: &'t RuleTable,
    source: &'s str,
    pos: usize,
    base: usize,
    line: usize,
    col: usize,
    stack: Vec<usize>,
    pending: VecDeque<Token>,
}

impl<'t, 's> Tokenizer<'t, 's> {
    pub fn new(table: &'t RuleTable, source: &'s str) -> Self {
        Self::with_origin(table, source, 0, 1, 1)
    }

    /// Tokenizer for a slice that starts at `offset`, `line`, `col` of a
    /// larger source.
    fn with_origin(
        table: &'t RuleTable,
        source: &'s str,
        offset: usize,
        line: usize,
        col: usize,
    ) -> Self {
        Self {
            table,
            source,
            pos: 0,
            base: offset,
            line,
            col,
            stack: vec![0],
            pending: VecDeque::new(),
        }
    }

    /// Name of the state the next token will be lexed in.
    pub fn state(&self) -> Option<&'t str> {
        let index = *self.stack.last()?;
        self.table.states().nth(index).map(|(name, _)| name)
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let value = &self.source[self.pos..self.pos + len];
        let token = Token::new(kind, value, self.base + self.pos, self.line, self.col);
        self.pos += len;
        (self.line, self.col) = token.end_point();
        token
    }

    fn apply(&mut self, action: &Action) {
        match action {
            Action::Stay => {}
            Action::Push(state) => {
                if let Some(index) = self.table.state_index(state) {
                    self.stack.push(index);
                }
            }
            Action::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
        }
    }
}

impl Iterator for Tokenizer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.pos >= self.source.len() {
            return None;
        }

        let table = self.table;
        let state = self.stack.last().copied().unwrap_or(0);
        let found = table
            .rules_at(state)
            .iter()
            .find_map(|rule| Some((rule, rule.match_len(self.source, self.pos)?)));

        let Some((rule, len)) = found else {
            let len = self.source[self.pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            return Some(self.emit(TokenKind::Unknown, len));
        };

        let token = self.emit(rule.kind, len);
        self.apply(&rule.action);

        let Some(sub) = &rule.sub else {
            return Some(token);
        };
        let end = token.marker_after(TokenKind::TemplateEnd);
        self.pending.extend(Tokenizer::with_origin(
            sub,
            &token.value,
            token.offset,
            token.line,
            token.col,
        ));
        self.pending.push_back(end);
        self.pending.pop_front()
    }
}

impl FusedIterator for Tokenizer<'_, '_> {}

/// Tokenizes all of `source`.
pub fn tokenize(table: &RuleTable, source: &str) -> Vec<Token> {
    Tokenizer::new(table, source).collect()
}
