use std::borrow::Cow;
use std::rc::Rc;

use grasp_core::{Cursor, Node, Token, TokenKind, Tree, TreeKind};

use super::{BoxedMatcher, Matcher, TokenHandler, TreeHandler};
use crate::checkpoint::{Checkpoint, Match, consume, seek};
use crate::pattern::ValueMatcher;
use crate::trace::Tracer;

/// Matches one string tree.
pub(crate) struct StrMatcher<Ctx> {
    pub(crate) form: StrForm<Ctx>,
    pub(crate) pre: Option<TreeHandler<Ctx>>,
    pub(crate) post: Option<TreeHandler<Ctx>>,
}

pub(crate) enum StrForm<Ctx> {
    /// The whole text of a string without templates.
    Content {
        value: ValueMatcher,
        handler: Option<TokenHandler<Ctx>>,
    },
    /// One matcher per child, in order, markers aside.
    Parts(Vec<PartMatcher<Ctx>>),
}

pub(crate) enum PartMatcher<Ctx> {
    Content {
        value: ValueMatcher,
        handler: Option<TokenHandler<Ctx>>,
    },
    /// Runs against the children of a template, from its `_start`.
    Template(BoxedMatcher<Ctx>),
}

impl<Ctx: Clone> Matcher<Ctx> for StrMatcher<Ctx> {
    fn match_at(&self, input: &Checkpoint<Ctx>, tracer: &mut dyn Tracer) -> Option<Match<Ctx>> {
        let name = "str";
        let Some(at) = seek(input) else {
            tracer.trace_match_failure(name, None);
            return None;
        };

        let node = at.cursor.node();
        tracer.trace_match_enter(name, node);
        let tree = match node {
            Node::Tree(tree) if tree.kind == TreeKind::String => Rc::clone(tree),
            _ => {
                tracer.trace_match_failure(name, Some(node));
                return None;
            }
        };

        let mut context = at.context.clone();
        if let Some(pre) = &self.pre {
            context = pre(context, &tree);
        }
        let matched = match &self.form {
            StrForm::Content { value, handler } => {
                content_of(&tree).and_then(|token| apply(value, handler, &token, context))
            }
            StrForm::Parts(parts) => match_parts(parts, &at.cursor, context, tracer),
        };
        let Some(mut context) = matched else {
            tracer.trace_match_failure(name, Some(node));
            return None;
        };
        if let Some(post) = &self.post {
            context = post(context, &tree);
        }

        tracer.trace_match_success(name, node);
        Some(Match::single(consume(at, context)))
    }
}

/// The single value token of a template-free string.
///
/// An empty string has no value token; an empty one is made up at the
/// position of its `_start`.
fn content_of(tree: &Tree) -> Option<Cow<'_, Token>> {
    let mut inner = tree.inner_children();
    match (inner.next(), inner.next()) {
        (None, _) => {
            let start = tree.children.first().and_then(Node::as_token)?;
            Some(Cow::Owned(start.marker_before(TokenKind::StringValue)))
        }
        (Some(Node::Token(token)), None) if token.kind == TokenKind::StringValue => {
            Some(Cow::Borrowed(&**token))
        }
        _ => None,
    }
}

fn apply<Ctx: Clone>(
    value: &ValueMatcher,
    handler: &Option<TokenHandler<Ctx>>,
    token: &Token,
    context: Ctx,
) -> Option<Ctx> {
    if !value.is_match(&token.value) {
        return None;
    }
    Some(match handler {
        Some(handler) => handler(context, token),
        None => context,
    })
}

fn match_parts<Ctx: Clone>(
    parts: &[PartMatcher<Ctx>],
    string: &Cursor,
    mut context: Ctx,
    tracer: &mut dyn Tracer,
) -> Option<Ctx> {
    let mut parts = parts.iter();
    let mut child = string.down();
    while let Some(cursor) = child {
        if !cursor.node().is_marker() {
            context = match_part(parts.next()?, &cursor, context, tracer)?;
        }
        child = cursor.right();
    }
    match parts.next() {
        Some(_) => None,
        None => Some(context),
    }
}

fn match_part<Ctx: Clone>(
    part: &PartMatcher<Ctx>,
    cursor: &Cursor,
    context: Ctx,
    tracer: &mut dyn Tracer,
) -> Option<Ctx> {
    match (part, cursor.node()) {
        (PartMatcher::Content { value, handler }, Node::Token(token))
            if token.kind == TokenKind::StringValue =>
        {
            apply(value, handler, token, context)
        }
        (PartMatcher::Template(inner), Node::Tree(tree)) if tree.kind == TreeKind::Template => {
            let input = Checkpoint::new(cursor.down()?, context);
            inner.match_at(&input, tracer).map(|found| found.checkpoint.context)
        }
        _ => None,
    }
}
