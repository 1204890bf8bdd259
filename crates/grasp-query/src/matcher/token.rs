use grasp_core::{Node, TokenKind};

use super::{Matcher, TokenHandler};
use crate::checkpoint::{Checkpoint, Match, consume, seek, seek_keeping_comments};
use crate::pattern::ValueMatcher;
use crate::trace::Tracer;

/// Matches one token by kind and value.
pub(crate) struct TokenMatcher<Ctx> {
    pub(crate) kind: TokenKind,
    pub(crate) value: ValueMatcher,
    pub(crate) handler: Option<TokenHandler<Ctx>>,
}

impl<Ctx> TokenMatcher<Ctx> {
    fn name(&self) -> &'static str {
        match self.kind {
            TokenKind::Symbol => "sym",
            TokenKind::Operator => "op",
            TokenKind::Number => "num",
            kind => kind.as_str(),
        }
    }
}

impl<Ctx: Clone> Matcher<Ctx> for TokenMatcher<Ctx> {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let name = self.name();
        let at = if self.kind == TokenKind::Comment {
            seek_keeping_comments(input)
        } else {
            seek(input)
        };
        let Some(at) = at else {
            tracer.trace_match_failure(name, None);
            return None;
        };

        let node = at.cursor.node();
        tracer.trace_match_enter(name, node);
        let token = match node {
            Node::Token(token) if token.kind == self.kind && self.value.is_match(&token.value) => {
                token
            }
            _ => {
                tracer.trace_match_failure(name, Some(node));
                return None;
            }
        };
        tracer.trace_match_success(name, node);

        let context = match &self.handler {
            Some(handler) => handler(at.context.clone(), &**token),
            None => at.context.clone(),
        };
        Some(Match::single(consume(at, context)))
    }
}
