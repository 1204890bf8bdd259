use super::{BoxedMatcher, Matcher};
use crate::checkpoint::{Checkpoint, Frontier, Match};
use crate::trace::Tracer;

/// Steps matched left to right with backtracking.
///
/// The frontier holds one entry per completed step. When step `i` fails,
/// step `i - 1` is asked for its next alternative and matching resumes
/// forward from there.
pub(crate) struct SeqMatcher<Ctx> {
    pub(crate) steps: Vec<BoxedMatcher<Ctx>>,
}

impl<Ctx: Clone> SeqMatcher<Ctx> {
    fn run_from(
        &self,
        mut stack: Vec<Frontier<Ctx>>,
        mut current: Checkpoint<Ctx>,
        tracer: &mut dyn Tracer,
    ) -> Option<Match<Ctx>> {
        loop {
            let Some(step) = self.steps.get(stack.len()) else {
                return Some(Match {
                    checkpoint: current,
                    frontier: Frontier::Seq(stack),
                });
            };
            match step.match_at(&current, tracer) {
                Some(found) => {
                    stack.push(found.frontier);
                    current = found.checkpoint;
                }
                None => current = self.backtrack(&mut stack, tracer)?,
            }
        }
    }

    /// Pops completed steps until one yields another alternative.
    fn backtrack(
        &self,
        stack: &mut Vec<Frontier<Ctx>>,
        tracer: &mut dyn Tracer,
    ) -> Option<Checkpoint<Ctx>> {
        while let Some(frontier) = stack.pop() {
            if matches!(frontier, Frontier::Exhausted) {
                continue;
            }
            let index = stack.len();
            tracer.trace_backtrack(index);
            if let Some(found) = self.steps[index].next_match(frontier, tracer) {
                stack.push(found.frontier);
                return Some(found.checkpoint);
            }
        }
        None
    }
}

impl<Ctx: Clone> Matcher<Ctx> for SeqMatcher<Ctx> {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let stack = Vec::with_capacity(self.steps.len());
        self.run_from(stack, input.clone(), tracer)
    }

    fn next_match(&self, frontier: Frontier<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let Frontier::Seq(mut stack) = frontier else {
            return None;
        };
        let current = self.backtrack(&mut stack, tracer)?;
        self.run_from(stack, current, tracer)
    }
}
