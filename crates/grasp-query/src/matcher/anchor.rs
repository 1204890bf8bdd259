use grasp_core::TokenKind;

use super::{Matcher, NodeHandler};
use crate::checkpoint::{Checkpoint, Match, consume, seek};
use crate::trace::Tracer;

/// Matches the `_start` marker of a level, without skipping anything first.
pub(crate) struct BeginMatcher;

impl<Ctx: Clone> Matcher<Ctx> for BeginMatcher {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let node = input.cursor.node();
        if input.end_of_level || node.token_kind() != Some(TokenKind::Start) {
            tracer.trace_match_failure("begin", (!input.end_of_level).then_some(node));
            return None;
        }
        tracer.trace_match_success("begin", node);
        Some(Match::single(consume(input.clone(), input.context.clone())))
    }
}

/// Matches the `_end` marker of a level without moving past it.
pub(crate) struct EndMatcher;

impl<Ctx: Clone> Matcher<Ctx> for EndMatcher {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        if input.end_of_level {
            return Some(Match::single(input.clone()));
        }
        let Some(at) = seek(input) else {
            tracer.trace_match_failure("end", None);
            return None;
        };
        let node = at.cursor.node();
        if node.token_kind() != Some(TokenKind::End) {
            tracer.trace_match_failure("end", Some(node));
            return None;
        }
        tracer.trace_match_success("end", node);
        Some(Match::single(at))
    }
}

/// Folds the context without looking at the tree.
pub(crate) struct VoidMatcher<Ctx> {
    pub(crate) handler: NodeHandler<Ctx>,
}

impl<Ctx: Clone> Matcher<Ctx> for VoidMatcher<Ctx> {
    fn match_at(&self, input: &Checkpoint<Ctx>, _tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let context = (self.handler)(input.context.clone(), input.last.as_ref());
        Some(Match::single(Checkpoint {
            context,
            ..input.clone()
        }))
    }
}
