use super::{BoxedMatcher, Matcher};
use crate::checkpoint::{Checkpoint, Frontier, Match};
use crate::trace::Tracer;

/// Greedy bounded repetition.
///
/// All end positions for `min..=max` repetitions are computed up front,
/// round by round. An inner match that consumed nothing does not count as
/// a repetition, which also bounds unlimited repetition. Results are handed
/// out most repetitions first. Within one round, the matches reached from
/// the last origin come first, each origin's in the order the inner matcher
/// found them.
pub(crate) struct ManyMatcher<Ctx> {
    pub(crate) inner: BoxedMatcher<Ctx>,
    pub(crate) min: usize,
    /// `None` is unbounded.
    pub(crate) max: Option<usize>,
}

impl<Ctx: Clone> ManyMatcher<Ctx> {
    /// Every end position one more repetition can reach from `round`.
    fn next_round(
        &self,
        round: &[Checkpoint<Ctx>],
        tracer: &mut dyn Tracer,
    ) -> Vec<Checkpoint<Ctx>> {
        let mut next = Vec::new();
        for from in round {
            let mut group = Vec::new();
            let mut found = self.inner.match_at(from, tracer);
            while let Some(Match {
                checkpoint,
                frontier,
            }) = found
            {
                if checkpoint.consumed_since(from) {
                    group.push(checkpoint);
                }
                found = self.inner.next_match(frontier, tracer);
            }
            // Later origins go first.
            next.splice(0..0, group);
        }
        next
    }
}

fn release<Ctx>(mut pending: Vec<Checkpoint<Ctx>>) -> Option<Match<Ctx>> {
    let checkpoint = pending.pop()?;
    Some(Match {
        checkpoint,
        frontier: Frontier::Many(pending),
    })
}

impl<Ctx: Clone> Matcher<Ctx> for ManyMatcher<Ctx> {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        // Stack of results; the next one to release is last.
        let mut pending = Vec::new();
        if self.min == 0 {
            pending.push(input.clone());
        }

        let mut round = vec![input.clone()];
        let mut reps = 0;
        while self.max.is_none_or(|max| reps < max) {
            let next = self.next_round(&round, tracer);
            if next.is_empty() {
                break;
            }
            reps += 1;
            if reps >= self.min {
                pending.extend(next.iter().rev().cloned());
            }
            round = next;
        }

        release(pending)
    }

    fn next_match(&self, frontier: Frontier<Ctx>, _tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let Frontier::Many(pending) = frontier else {
            return None;
        };
        release(pending)
    }
}
