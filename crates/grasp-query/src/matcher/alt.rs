use super::{BoxedMatcher, Matcher};
use crate::checkpoint::{Checkpoint, Frontier, Match};
use crate::trace::Tracer;

/// First branch that matches, in declaration order.
///
/// Each branch contributes at most its first match; the frontier only
/// remembers which branch to try next.
pub(crate) struct AltMatcher<Ctx> {
    pub(crate) branches: Vec<BoxedMatcher<Ctx>>,
}

impl<Ctx: Clone> AltMatcher<Ctx> {
    fn try_from(
        &self,
        input: Checkpoint<Ctx>,
        first: usize,
        tracer: &mut dyn Tracer,
    ) -> Option<Match<Ctx>> {
        for (index, branch) in self.branches.iter().enumerate().skip(first) {
            if let Some(found) = branch.match_at(&input, tracer) {
                return Some(Match {
                    checkpoint: found.checkpoint,
                    frontier: Frontier::Alt {
                        input,
                        next: index + 1,
                    },
                });
            }
        }
        None
    }
}

impl<Ctx: Clone> Matcher<Ctx> for AltMatcher<Ctx> {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        self.try_from(input.clone(), 0, tracer)
    }

    fn next_match(&self, frontier: Frontier<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let Frontier::Alt { input, next } = frontier else {
            return None;
        };
        self.try_from(input, next, tracer)
    }
}
