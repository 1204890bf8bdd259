use std::rc::Rc;

use grasp_core::{Cursor, Node, Token, Tree, TreeKind};

use super::{BoxedMatcher, Matcher, TreeHandler};
use crate::checkpoint::{Checkpoint, Match, consume, seek};
use crate::trace::Tracer;

/// Matches one tree node, optionally searching its descendants.
pub(crate) struct TreeMatcher<Ctx> {
    pub(crate) kind: Option<TreeKind>,
    pub(crate) opening: Option<String>,
    pub(crate) closing: Option<String>,
    pub(crate) search: Option<Search<Ctx>>,
    pub(crate) pre: Option<TreeHandler<Ctx>>,
    pub(crate) post: Option<TreeHandler<Ctx>>,
}

impl<Ctx> TreeMatcher<Ctx> {
    fn accepts(&self, tree: &Tree) -> bool {
        self.kind.is_none_or(|kind| kind == tree.kind)
            && delimiter_matches(self.opening.as_deref(), tree.opening.as_ref())
            && delimiter_matches(self.closing.as_deref(), tree.closing.as_ref())
    }
}

fn delimiter_matches(expected: Option<&str>, actual: Option<&Token>) -> bool {
    expected.is_none_or(|text| actual.is_some_and(|token| token.value == text))
}

impl<Ctx: Clone> Matcher<Ctx> for TreeMatcher<Ctx> {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let name = "tree";
        let Some(at) = seek(input) else {
            tracer.trace_match_failure(name, None);
            return None;
        };

        let node = at.cursor.node();
        tracer.trace_match_enter(name, node);
        let tree = match node {
            Node::Tree(tree) if self.accepts(tree) => Rc::clone(tree),
            _ => {
                tracer.trace_match_failure(name, Some(node));
                return None;
            }
        };

        let mut context = at.context.clone();
        if let Some(pre) = &self.pre {
            context = pre(context, &tree);
        }
        if let Some(search) = &self.search {
            let Some(found) = search.run(&at.cursor, &tree, context, tracer) else {
                tracer.trace_match_failure(name, Some(node));
                return None;
            };
            context = found;
        }
        if let Some(post) = &self.post {
            context = post(context, &tree);
        }

        tracer.trace_match_success(name, node);
        Some(Match::single(consume(at, context)))
    }
}

/// Pre-order walk over the descendants of a tree, attempting a query at
/// every node it reaches.
///
/// A match hands its context to the next attempt and the walk resumes
/// after whatever the match consumed. `max_depth` counts levels below the
/// searched tree; `0` means no limit for either bound.
pub(crate) struct Search<Ctx> {
    pub(crate) query: BoxedMatcher<Ctx>,
    pub(crate) max_depth: usize,
    pub(crate) max_matches: usize,
}

impl<Ctx: Clone> Search<Ctx> {
    /// Folded context, or `None` if the query never matched.
    fn run(
        &self,
        root: &Cursor,
        tree: &Tree,
        mut context: Ctx,
        tracer: &mut dyn Tracer,
    ) -> Option<Ctx> {
        tracer.trace_search_enter(tree);
        let base = root.depth();
        let mut count = 0;
        let mut next = self.step(root, base, true);

        while let Some(cursor) = next {
            tracer.trace_search_visit(cursor.depth() - base, cursor.node());
            let input = Checkpoint::new(cursor.clone(), context.clone());
            next = match self.query.match_at(&input, tracer) {
                Some(found) => {
                    count += 1;
                    tracer.trace_search_match(count);
                    let Checkpoint {
                        cursor: after,
                        context: folded,
                        end_of_level,
                        ..
                    } = found.checkpoint;
                    context = folded;
                    if self.max_matches != 0 && count >= self.max_matches {
                        break;
                    }
                    if end_of_level {
                        self.step(&after, base, false)
                    } else if after.is_same_position(&cursor) {
                        self.step(&cursor, base, true)
                    } else {
                        Some(after)
                    }
                }
                None => self.step(&cursor, base, true),
            };
        }

        tracer.trace_search_exit(count);
        (count > 0).then_some(context)
    }

    /// Next position in pre-order that stays below `base`.
    fn step(&self, cursor: &Cursor, base: usize, descend: bool) -> Option<Cursor> {
        let within_depth = self.max_depth == 0 || cursor.depth() - base < self.max_depth;
        if descend
            && within_depth
            && let Some(down) = cursor.down()
        {
            return Some(down);
        }

        let mut cursor = cursor.clone();
        loop {
            if cursor.depth() <= base {
                return None;
            }
            if let Some(right) = cursor.right() {
                return Some(right);
            }
            cursor = cursor.up()?;
        }
    }
}
