//! Tree builder: folds the flat token stream into a shallow tree.
//!
//! Brackets, strings and templates open nested trees that close on their
//! matching token. With indent blocks enabled, leading whitespace at
//! nesting depth zero groups lines into block trees, Python-style. Unclosed
//! trees are force-closed at end of input, so any token stream yields a
//! tree; only inconsistent indentation is an error.
//!
//! Every tree's children start with a zero-width `_start` marker and end
//! with an `_end` marker. Markers take the position of the token that
//! follows them, or the end of the previous token when nothing follows.

use std::mem;
use std::rc::Rc;

use grasp_core::{Node, Token, TokenKind, Tree, TreeKind};

use crate::config::ParserConfig;
use crate::error::ParseError;

/// Builds the root tree for `tokens`.
pub fn build_tree(
    tokens: impl IntoIterator<Item = Token>,
    config: &ParserConfig,
) -> Result<Rc<Tree>, ParseError> {
    let mut builder = TreeBuilder::new(config);
    for token in tokens {
        builder.push(token)?;
    }
    builder.finish()
}

struct TreeBuilder {
    use_indent_blocks: bool,
    /// Open trees, root first; the last one receives new children.
    stack: Vec<Tree>,
    prev: Token,
    nesting: usize,
    /// Indentation of every open block, outermost first.
    levels: Vec<String>,
    at_line_start: bool,
    indent: String,
    buffered: Vec<Token>,
}

impl TreeBuilder {
    fn new(config: &ParserConfig) -> Self {
        let start = Token::new(TokenKind::Start, "", 0, 1, 1);
        let root = Tree::new(TreeKind::Root, None, vec![Node::token(start.clone())]);
        Self {
            use_indent_blocks: config.use_indent_blocks,
            stack: vec![root],
            prev: start,
            nesting: 0,
            levels: Vec::new(),
            at_line_start: true,
            indent: String::new(),
            buffered: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Tree {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn current_kind(&self) -> TreeKind {
        self.stack.last().map_or(TreeKind::Root, |tree| tree.kind)
    }

    /// Zero-width marker at `at`, or right after the previous token.
    fn marker(&self, kind: TokenKind, at: Option<&Token>) -> Token {
        match at {
            Some(token) => token.marker_before(kind),
            None => self.prev.marker_after(kind),
        }
    }

    fn push_child(&mut self, node: Node) {
        self.current().children.push(node);
    }

    fn flush_buffered(&mut self) {
        let buffered = mem::take(&mut self.buffered);
        self.current()
            .children
            .extend(buffered.into_iter().map(Node::token));
    }

    fn open(&mut self, kind: TreeKind, opening: Option<Token>) {
        self.stack.push(Tree::new(kind, opening, Vec::new()));
    }

    /// Closes the current tree with an `_end` marker and attaches it to its
    /// parent.
    fn close(&mut self, closing: Option<Token>, at: Option<&Token>) -> Result<(), ParseError> {
        let end = self.marker(TokenKind::End, at);
        if self.stack.len() < 2 {
            return Err(ParseError::UnbalancedTree);
        }
        let mut tree = self.stack.pop().ok_or(ParseError::UnbalancedTree)?;
        tree.children.push(Node::token(end));
        tree.closing = closing;
        self.push_child(Node::tree(tree));
        Ok(())
    }

    /// Closes a template that was never explicitly ended.
    fn close_template(&mut self, at: &Token) -> Result<(), ParseError> {
        let closing = self.marker(TokenKind::TemplateEnd, Some(at));
        self.close(Some(closing), Some(at))?;
        self.nesting = self.nesting.saturating_sub(1);
        Ok(())
    }

    fn open_block(&mut self, at: &Token, indent: String) {
        let mut children = vec![Node::token(at.marker_before(TokenKind::Start))];
        children.extend(mem::take(&mut self.buffered).into_iter().map(Node::token));
        self.stack.push(Tree::new(TreeKind::Block, None, children));
        self.levels.push(indent);
    }

    fn push(&mut self, token: Token) -> Result<(), ParseError> {
        if self.current().children.is_empty() {
            let start = token.marker_before(TokenKind::Start);
            self.push_child(Node::token(start));
        }

        if self.use_indent_blocks && self.nesting == 0 {
            match token.kind {
                TokenKind::Newline => {
                    self.flush_buffered();
                    self.indent.clear();
                    self.at_line_start = true;
                }
                TokenKind::Whitespace if self.at_line_start => {
                    self.indent.push_str(&token.value);
                    self.buffered.push(token.clone());
                    self.prev = token;
                    return Ok(());
                }
                TokenKind::Comment if self.at_line_start => {
                    self.flush_buffered();
                    self.indent.clear();
                }
                _ if self.at_line_start => {
                    self.resolve_indent(&token)?;
                    self.at_line_start = false;
                }
                _ => {}
            }
        }

        self.push_token(token)
    }

    /// Opens or closes blocks so the line starting at `token` sits in the
    /// block matching its indentation.
    fn resolve_indent(&mut self, token: &Token) -> Result<(), ParseError> {
        let indent = mem::take(&mut self.indent);
        let top = self.levels.last().map_or("", String::as_str);

        if indent == top {
            self.flush_buffered();
            return Ok(());
        }
        if indent.starts_with(top) {
            self.open_block(token, indent);
            return Ok(());
        }
        if !top.starts_with(indent.as_str()) {
            return Err(inconsistent(token, top, &indent));
        }

        while let Some(top) = self.levels.last()
            && top != &indent
            && top.starts_with(indent.as_str())
        {
            self.close(None, Some(token))?;
            self.levels.pop();
        }

        let top = self.levels.last().map_or("", String::as_str);
        if indent == top {
            self.flush_buffered();
        } else if indent.starts_with(top) {
            self.open_block(token, indent);
        } else {
            return Err(inconsistent(token, top, &indent));
        }
        Ok(())
    }

    fn push_token(&mut self, token: Token) -> Result<(), ParseError> {
        let kind = self.current_kind();
        match (token.kind, kind) {
            (TokenKind::StringValue, TreeKind::Template) => {
                self.close_template(&token)?;
                self.push_child(Node::token(token.clone()));
            }
            (TokenKind::StringValue, _) if self.prev.kind == TokenKind::StringValue => {
                self.coalesce(token);
                return Ok(());
            }
            (TokenKind::BracketLeft, _) => {
                self.open(TreeKind::Wrapped, Some(token.clone()));
                self.nesting += 1;
            }
            (TokenKind::BracketRight, TreeKind::Wrapped)
            | (TokenKind::StringEnd, TreeKind::String)
            | (TokenKind::TemplateEnd, TreeKind::Template) => {
                self.close(Some(token.clone()), Some(&token))?;
                self.nesting = self.nesting.saturating_sub(1);
            }
            (TokenKind::StringStart, _) => {
                self.open(TreeKind::String, Some(token.clone()));
                self.nesting += 1;
            }
            (TokenKind::TemplateStart, TreeKind::String) => {
                self.open(TreeKind::Template, Some(token.clone()));
                self.nesting += 1;
            }
            (TokenKind::TemplateStart, TreeKind::Template) => {
                self.close_template(&token)?;
                self.open(TreeKind::Template, Some(token.clone()));
                self.nesting += 1;
            }
            (TokenKind::StringEnd, TreeKind::Template) => {
                self.close_template(&token)?;
                self.close(Some(token.clone()), Some(&token))?;
                self.nesting = self.nesting.saturating_sub(1);
            }
            _ => self.push_child(Node::token(token.clone())),
        }
        self.prev = token;
        Ok(())
    }

    /// Appends a string value to the one right before it.
    fn coalesce(&mut self, token: Token) {
        if let Some(Node::Token(last)) = self.current().children.last_mut()
            && last.kind == TokenKind::StringValue
        {
            let last = Rc::make_mut(last);
            last.value.push_str(&token.value);
            last.line_breaks += token.line_breaks;
            self.prev = last.clone();
            return;
        }
        self.push_child(Node::token(token.clone()));
        self.prev = token;
    }

    fn finish(mut self) -> Result<Rc<Tree>, ParseError> {
        self.flush_buffered();
        while self.stack.len() > 1 {
            if self.current().children.is_empty() {
                let start = self.marker(TokenKind::Start, None);
                self.push_child(Node::token(start));
            }
            self.close(None, None)?;
        }

        let end = self.marker(TokenKind::End, None);
        let mut root = self.stack.pop().ok_or(ParseError::UnbalancedTree)?;
        root.children.push(Node::token(end));
        Ok(Rc::new(root))
    }
}

fn inconsistent(token: &Token, expected: &str, found: &str) -> ParseError {
    ParseError::InconsistentIndent {
        line: token.line,
        col: token.col,
        expected: expected.to_string(),
        found: found.to_string(),
    }
}
