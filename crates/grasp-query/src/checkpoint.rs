//! Matcher input and output: checkpoints and frontiers.
//!
//! A [`Checkpoint`] is a position in the tree plus the user context folded
//! so far. Every successful match returns the checkpoint after the match
//! together with a [`Frontier`]: the immutable state needed to ask the same
//! matcher for its next alternative. Nothing is stored in the matchers
//! themselves, so a compiled query can be run any number of times.

use grasp_core::{Cursor, Node, TokenKind};

#[derive(Clone, Debug)]
pub struct Checkpoint<Ctx> {
    pub cursor: Cursor,
    pub context: Ctx,
    /// The node under the cursor was consumed and has no right sibling.
    pub end_of_level: bool,
    /// Last node consumed on the way here.
    pub last: Option<Node>,
}

impl<Ctx> Checkpoint<Ctx> {
    pub fn new(cursor: Cursor, context: Ctx) -> Self {
        Self {
            cursor,
            context,
            end_of_level: false,
            last: None,
        }
    }

    /// True if `self` lies past `before`: the cursor moved, or the last
    /// node of a level was consumed.
    pub fn consumed_since(&self, before: &Checkpoint<Ctx>) -> bool {
        !self.cursor.is_same_position(&before.cursor)
            || (self.end_of_level && !before.end_of_level)
    }
}

/// Resumption state of a matcher.
#[derive(Clone, Debug)]
pub enum Frontier<Ctx> {
    /// No further alternatives.
    Exhausted,
    /// Frontiers of the completed steps of a sequence, first step first.
    Seq(Vec<Frontier<Ctx>>),
    /// Remaining repetition results; the next one is last.
    Many(Vec<Checkpoint<Ctx>>),
    /// Input of an alternation and the index of the branch to try next.
    Alt { input: Checkpoint<Ctx>, next: usize },
}

#[derive(Clone, Debug)]
pub struct Match<Ctx> {
    pub checkpoint: Checkpoint<Ctx>,
    pub frontier: Frontier<Ctx>,
}

impl<Ctx> Match<Ctx> {
    pub fn single(checkpoint: Checkpoint<Ctx>) -> Self {
        Self {
            checkpoint,
            frontier: Frontier::Exhausted,
        }
    }
}

/// Moves past nodes for which `skip` holds.
///
/// Fails at the end of a level or when only skipped nodes remain.
pub(crate) fn seek_by<Ctx: Clone>(
    input: &Checkpoint<Ctx>,
    skip: impl Fn(&Node) -> bool,
) -> Option<Checkpoint<Ctx>> {
    if input.end_of_level {
        return None;
    }
    let mut cursor = input.cursor.clone();
    while skip(cursor.node()) {
        cursor = cursor.right()?;
    }
    Some(Checkpoint {
        cursor,
        ..input.clone()
    })
}

/// Moves past whitespace, newlines, comments and `_start`.
pub(crate) fn seek<Ctx: Clone>(input: &Checkpoint<Ctx>) -> Option<Checkpoint<Ctx>> {
    seek_by(input, Node::is_minor)
}

/// Like [`seek`] but stops at comments.
pub(crate) fn seek_keeping_comments<Ctx: Clone>(
    input: &Checkpoint<Ctx>,
) -> Option<Checkpoint<Ctx>> {
    seek_by(input, |node| {
        node.is_minor() && node.token_kind() != Some(TokenKind::Comment)
    })
}

/// Checkpoint after consuming the node under `at.cursor`.
pub(crate) fn consume<Ctx>(at: Checkpoint<Ctx>, context: Ctx) -> Checkpoint<Ctx> {
    let node = at.cursor.node().clone();
    let (cursor, end_of_level) = match at.cursor.right() {
        Some(right) => (right, false),
        None => (at.cursor, true),
    };
    Checkpoint {
        cursor,
        context,
        end_of_level,
        last: Some(node),
    }
}
