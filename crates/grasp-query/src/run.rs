//! Running compiled queries.

use grasp_core::Cursor;

use crate::checkpoint::Checkpoint;
use crate::matcher::BoxedMatcher;
use crate::trace::{NoopTracer, Tracer};

/// A query ready to run against whole trees.
///
/// Produced by [`Query::compile`](crate::Query::compile). Immutable; one
/// compiled query can be run any number of times.
#[derive(Clone)]
pub struct CompiledQuery<Ctx> {
    matcher: BoxedMatcher<Ctx>,
}

impl<Ctx: Clone> CompiledQuery<Ctx> {
    pub(crate) fn new(matcher: BoxedMatcher<Ctx>) -> Self {
        Self { matcher }
    }

    /// Folded context of the first match, or `None`.
    pub fn run(&self, root: &Cursor, context: Ctx) -> Option<Ctx> {
        self.run_traced(root, context, &mut NoopTracer)
    }

    pub fn run_traced(&self, root: &Cursor, context: Ctx, tracer: &mut dyn Tracer) -> Option<Ctx> {
        let input = Checkpoint::new(root.clone(), context);
        let found = self.matcher.match_at(&input, tracer)?;
        Some(found.checkpoint.context)
    }
}
