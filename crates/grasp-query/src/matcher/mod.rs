//! Compiled query combinators.
//!
//! Every matcher answers two questions: where does the first match starting
//! at a checkpoint end ([`Matcher::match_at`]), and, given the frontier of a
//! previous match, where does the next one end ([`Matcher::next_match`]).
//! Backtracking lives entirely in the frontier values, so matchers are
//! immutable and a compiled query can be shared between runs.

mod alt;
mod anchor;
mod many;
mod seq;
mod string;
mod token;
mod tree;

use std::rc::Rc;

use grasp_core::{Node, Token, Tree};

use crate::checkpoint::{Checkpoint, Frontier, Match};
use crate::trace::Tracer;

pub(crate) use alt::AltMatcher;
pub(crate) use anchor::{BeginMatcher, EndMatcher, VoidMatcher};
pub(crate) use many::ManyMatcher;
pub(crate) use seq::SeqMatcher;
pub(crate) use string::{PartMatcher, StrForm, StrMatcher};
pub(crate) use token::TokenMatcher;
pub(crate) use tree::{Search, TreeMatcher};

/// Folds a matched token into the context.
pub type TokenHandler<Ctx> = Rc<dyn Fn(Ctx, &Token) -> Ctx>;

/// Folds a matched tree into the context.
pub type TreeHandler<Ctx> = Rc<dyn Fn(Ctx, &Tree) -> Ctx>;

/// Folds the last consumed node, if any, into the context.
pub type NodeHandler<Ctx> = Rc<dyn Fn(Ctx, Option<&Node>) -> Ctx>;

pub trait Matcher<Ctx> {
    /// First match starting at `input`.
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>>;

    /// Next match after the one that produced `frontier`.
    ///
    /// Matchers with a single possible outcome return [`Frontier::Exhausted`]
    /// and keep this default.
    fn next_match(&self, frontier: Frontier<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let _ = (frontier, tracer);
        None
    }
}

pub type BoxedMatcher<Ctx> = Rc<dyn Matcher<Ctx>>;
