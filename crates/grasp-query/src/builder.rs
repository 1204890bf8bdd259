//! Chainable query builder.
//!
//! A [`Query`] is a plain description: a list of steps matched in order.
//! Nothing is validated until [`Query::build`] compiles it into matchers.
//!
//! ```ignore
//! let query = Query::new()
//!     .sym_with("foo", push)
//!     .op(".")
//!     .many(Query::new().sym_with(ANY, push));
//! ```

use std::rc::Rc;

use grasp_core::{Cursor, Node, Token, TokenKind, Tree, TreeKind};

use crate::error::QueryError;
use crate::matcher::{
    AltMatcher, BeginMatcher, BoxedMatcher, EndMatcher, ManyMatcher, NodeHandler, PartMatcher,
    Search, SeqMatcher, StrForm, StrMatcher, TokenHandler, TokenMatcher, TreeHandler,
    TreeMatcher, VoidMatcher,
};
use crate::pattern::Pattern;
use crate::run::CompiledQuery;

#[derive(Clone)]
pub struct Query<Ctx> {
    steps: Vec<Step<Ctx>>,
}

#[derive(Clone)]
enum Step<Ctx> {
    Token {
        kind: TokenKind,
        pattern: Pattern,
        handler: Option<TokenHandler<Ctx>>,
    },
    Many {
        inner: Query<Ctx>,
        min: usize,
        max: Option<usize>,
    },
    Alt(Vec<Query<Ctx>>),
    Tree(TreeOptions<Ctx>),
    Str {
        pattern: Pattern,
        handler: Option<TokenHandler<Ctx>>,
    },
    StrParts(StrOptions<Ctx>),
    Begin,
    End,
    Handler(NodeHandler<Ctx>),
}

impl<Ctx> Default for Query<Ctx> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<Ctx: Clone + 'static> Query<Ctx> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, step: Step<Ctx>) -> Self {
        self.steps.push(step);
        self
    }

    /// Token of `kind` whose text satisfies `pattern`.
    pub fn token(self, kind: TokenKind, pattern: impl Into<Pattern>) -> Self {
        self.push(Step::Token {
            kind,
            pattern: pattern.into(),
            handler: None,
        })
    }

    pub fn token_with(
        self,
        kind: TokenKind,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
    ) -> Self {
        self.push(Step::Token {
            kind,
            pattern: pattern.into(),
            handler: Some(Rc::new(handler)),
        })
    }

    pub fn sym(self, pattern: impl Into<Pattern>) -> Self {
        self.token(TokenKind::Symbol, pattern)
    }

    pub fn sym_with(
        self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
    ) -> Self {
        self.token_with(TokenKind::Symbol, pattern, handler)
    }

    pub fn op(self, pattern: impl Into<Pattern>) -> Self {
        self.token(TokenKind::Operator, pattern)
    }

    pub fn op_with(
        self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
    ) -> Self {
        self.token_with(TokenKind::Operator, pattern, handler)
    }

    pub fn num(self, pattern: impl Into<Pattern>) -> Self {
        self.token(TokenKind::Number, pattern)
    }

    pub fn num_with(
        self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
    ) -> Self {
        self.token_with(TokenKind::Number, pattern, handler)
    }

    /// Comment token. Unlike every other matcher, comments are not skipped
    /// on the way to it.
    pub fn comment(self, pattern: impl Into<Pattern>) -> Self {
        self.token(TokenKind::Comment, pattern)
    }

    pub fn comment_with(
        self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
    ) -> Self {
        self.token_with(TokenKind::Comment, pattern, handler)
    }

    /// One or more repetitions of `inner`.
    pub fn many(self, inner: Query<Ctx>) -> Self {
        self.many_range(inner, 1, None)
    }

    /// Between `min` and `max` repetitions of `inner`; `None` is unbounded.
    pub fn many_range(self, inner: Query<Ctx>, min: usize, max: Option<usize>) -> Self {
        self.push(Step::Many { inner, min, max })
    }

    /// Zero or one occurrence of `inner`.
    pub fn opt(self, inner: Query<Ctx>) -> Self {
        self.many_range(inner, 0, Some(1))
    }

    pub fn alt(self, branches: impl IntoIterator<Item = Query<Ctx>>) -> Self {
        self.push(Step::Alt(branches.into_iter().collect()))
    }

    pub fn tree(self, options: TreeOptions<Ctx>) -> Self {
        self.push(Step::Tree(options))
    }

    /// String without templates whose whole text satisfies `pattern`.
    pub fn str(self, pattern: impl Into<Pattern>) -> Self {
        self.push(Step::Str {
            pattern: pattern.into(),
            handler: None,
        })
    }

    /// Like [`Query::str`]; the handler receives the string's value token.
    pub fn str_with(
        self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
    ) -> Self {
        self.push(Step::Str {
            pattern: pattern.into(),
            handler: Some(Rc::new(handler)),
        })
    }

    /// String whose children match `options` one to one.
    pub fn str_parts(self, options: StrOptions<Ctx>) -> Self {
        self.push(Step::StrParts(options))
    }

    /// Start of the current level.
    pub fn begin(self) -> Self {
        self.push(Step::Begin)
    }

    /// End of the current level, past trailing whitespace and comments.
    pub fn end(self) -> Self {
        self.push(Step::End)
    }

    /// Folds the context with the last consumed node. Consumes nothing.
    pub fn handler(self, handler: impl Fn(Ctx, Option<&Node>) -> Ctx + 'static) -> Self {
        self.push(Step::Handler(Rc::new(handler)))
    }

    /// Appends the steps of `other`.
    pub fn join(mut self, other: Query<Ctx>) -> Self {
        self.steps.extend(other.steps);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// A single root tree step, used as is by [`Query::compile`].
    fn is_root_query(&self) -> bool {
        matches!(
            self.steps.as_slice(),
            [Step::Tree(options)] if options.kind == Some(TreeKind::Root)
        )
    }

    /// Compiles the steps into a matcher.
    pub fn build(&self) -> Result<BoxedMatcher<Ctx>, QueryError> {
        if let [step] = self.steps.as_slice() {
            return step.build();
        }
        let steps = self
            .steps
            .iter()
            .map(Step::build)
            .collect::<Result<_, _>>()?;
        Ok(Rc::new(SeqMatcher { steps }))
    }

    /// Compiles the query for running against a whole tree.
    ///
    /// Unless the query already is a root tree query, it is wrapped in a
    /// search over the root tree.
    pub fn compile(&self) -> Result<CompiledQuery<Ctx>, QueryError> {
        let matcher = if self.is_root_query() {
            self.build()?
        } else {
            Query::new()
                .tree(TreeOptions::new().kind(TreeKind::Root).search(self.clone()))
                .build()?
        };
        Ok(CompiledQuery::new(matcher))
    }

    /// Compiles and runs the query on the tree under `root`.
    pub fn run(&self, root: &Cursor, context: Ctx) -> Result<Option<Ctx>, QueryError> {
        Ok(self.compile()?.run(root, context))
    }
}

impl<Ctx: Clone + 'static> Step<Ctx> {
    fn build(&self) -> Result<BoxedMatcher<Ctx>, QueryError> {
        Ok(match self {
            Step::Token {
                kind,
                pattern,
                handler,
            } => Rc::new(TokenMatcher {
                kind: *kind,
                value: pattern.compile()?,
                handler: handler.clone(),
            }),
            Step::Many { inner, min, max } => {
                if let Some(max) = *max
                    && *min > max
                {
                    return Err(QueryError::InvalidRepetition { min: *min, max });
                }
                Rc::new(ManyMatcher {
                    inner: inner.build()?,
                    min: *min,
                    max: *max,
                })
            }
            Step::Alt(branches) => {
                if branches.is_empty() {
                    return Err(QueryError::EmptyAlternation);
                }
                let branches = branches
                    .iter()
                    .map(Query::build)
                    .collect::<Result<_, _>>()?;
                Rc::new(AltMatcher { branches })
            }
            Step::Tree(options) => Rc::new(options.build()?),
            Step::Str { pattern, handler } => Rc::new(StrMatcher {
                form: StrForm::Content {
                    value: pattern.compile()?,
                    handler: handler.clone(),
                },
                pre: None,
                post: None,
            }),
            Step::StrParts(options) => Rc::new(options.build()?),
            Step::Begin => Rc::new(BeginMatcher),
            Step::End => Rc::new(EndMatcher),
            Step::Handler(handler) => Rc::new(VoidMatcher {
                handler: handler.clone(),
            }),
        })
    }
}

/// Options of a tree step.
///
/// Without a kind any tree matches. `opening` and `closing` compare the
/// delimiter text exactly; trees without that delimiter never match them.
#[derive(Clone)]
pub struct TreeOptions<Ctx> {
    kind: Option<TreeKind>,
    opening: Option<String>,
    closing: Option<String>,
    search: Option<Query<Ctx>>,
    max_depth: usize,
    max_matches: usize,
    pre: Option<TreeHandler<Ctx>>,
    post: Option<TreeHandler<Ctx>>,
}

impl<Ctx> Default for TreeOptions<Ctx> {
    fn default() -> Self {
        Self {
            kind: None,
            opening: None,
            closing: None,
            search: None,
            max_depth: 0,
            max_matches: 0,
            pre: None,
            post: None,
        }
    }
}

impl<Ctx: Clone + 'static> TreeOptions<Ctx> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TreeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn opening(mut self, text: impl Into<String>) -> Self {
        self.opening = Some(text.into());
        self
    }

    pub fn closing(mut self, text: impl Into<String>) -> Self {
        self.closing = Some(text.into());
        self
    }

    /// Query attempted at every descendant; the tree matches only if it
    /// matched at least once.
    pub fn search(mut self, query: Query<Ctx>) -> Self {
        self.search = Some(query);
        self
    }

    /// Levels below the tree the search may enter; `0` is unlimited.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Matches after which the search stops; `0` is unlimited.
    pub fn max_matches(mut self, count: usize) -> Self {
        self.max_matches = count;
        self
    }

    pub fn pre_handler(mut self, handler: impl Fn(Ctx, &Tree) -> Ctx + 'static) -> Self {
        self.pre = Some(Rc::new(handler));
        self
    }

    pub fn post_handler(mut self, handler: impl Fn(Ctx, &Tree) -> Ctx + 'static) -> Self {
        self.post = Some(Rc::new(handler));
        self
    }

    fn build(&self) -> Result<TreeMatcher<Ctx>, QueryError> {
        let search = match &self.search {
            Some(query) => Some(Search {
                query: query.build()?,
                max_depth: self.max_depth,
                max_matches: self.max_matches,
            }),
            None => None,
        };
        Ok(TreeMatcher {
            kind: self.kind,
            opening: self.opening.clone(),
            closing: self.closing.clone(),
            search,
            pre: self.pre.clone(),
            post: self.post.clone(),
        })
    }
}

/// Pieces of a string step, matched against the string's children in
/// order. The number of pieces must equal the number of children.
#[derive(Clone)]
pub struct StrOptions<Ctx> {
    parts: Vec<StrPart<Ctx>>,
    pre: Option<TreeHandler<Ctx>>,
    post: Option<TreeHandler<Ctx>>,
}

#[derive(Clone)]
enum StrPart<Ctx> {
    Content {
        pattern: Pattern,
        handler: Option<TokenHandler<Ctx>>,
    },
    Template(Query<Ctx>),
}

impl<Ctx> Default for StrOptions<Ctx> {
    fn default() -> Self {
        Self {
            parts: Vec::new(),
            pre: None,
            post: None,
        }
    }
}

impl<Ctx: Clone + 'static> StrOptions<Ctx> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Literal text between templates.
    pub fn content(mut self, pattern: impl Into<Pattern>) -> Self {
        self.parts.push(StrPart::Content {
            pattern: pattern.into(),
            handler: None,
        });
        self
    }

    pub fn content_with(
        mut self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
    ) -> Self {
        self.parts.push(StrPart::Content {
            pattern: pattern.into(),
            handler: Some(Rc::new(handler)),
        });
        self
    }

    /// Template whose children match `query`, starting at the first one.
    pub fn template(mut self, query: Query<Ctx>) -> Self {
        self.parts.push(StrPart::Template(query));
        self
    }

    pub fn pre_handler(mut self, handler: impl Fn(Ctx, &Tree) -> Ctx + 'static) -> Self {
        self.pre = Some(Rc::new(handler));
        self
    }

    pub fn post_handler(mut self, handler: impl Fn(Ctx, &Tree) -> Ctx + 'static) -> Self {
        self.post = Some(Rc::new(handler));
        self
    }

    fn build(&self) -> Result<StrMatcher<Ctx>, QueryError> {
        let parts = self
            .parts
            .iter()
            .map(|part| {
                Ok(match part {
                    StrPart::Content { pattern, handler } => PartMatcher::Content {
                        value: pattern.compile()?,
                        handler: handler.clone(),
                    },
                    StrPart::Template(query) => PartMatcher::Template(query.build()?),
                })
            })
            .collect::<Result<_, QueryError>>()?;
        Ok(StrMatcher {
            form: StrForm::Parts(parts),
            pre: self.pre.clone(),
            post: self.post.clone(),
        })
    }
}

// Free-standing starters, so queries read like `sym("foo").op(".")`.

pub fn sym<Ctx: Clone + 'static>(pattern: impl Into<Pattern>) -> Query<Ctx> {
    Query::new().sym(pattern)
}

pub fn sym_with<Ctx: Clone + 'static>(
    pattern: impl Into<Pattern>,
    handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
) -> Query<Ctx> {
    Query::new().sym_with(pattern, handler)
}

pub fn op<Ctx: Clone + 'static>(pattern: impl Into<Pattern>) -> Query<Ctx> {
    Query::new().op(pattern)
}

pub fn op_with<Ctx: Clone + 'static>(
    pattern: impl Into<Pattern>,
    handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
) -> Query<Ctx> {
    Query::new().op_with(pattern, handler)
}

pub fn num<Ctx: Clone + 'static>(pattern: impl Into<Pattern>) -> Query<Ctx> {
    Query::new().num(pattern)
}

pub fn num_with<Ctx: Clone + 'static>(
    pattern: impl Into<Pattern>,
    handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
) -> Query<Ctx> {
    Query::new().num_with(pattern, handler)
}

pub fn comment<Ctx: Clone + 'static>(pattern: impl Into<Pattern>) -> Query<Ctx> {
    Query::new().comment(pattern)
}

pub fn comment_with<Ctx: Clone + 'static>(
    pattern: impl Into<Pattern>,
    handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
) -> Query<Ctx> {
    Query::new().comment_with(pattern, handler)
}

pub fn many<Ctx: Clone + 'static>(inner: Query<Ctx>) -> Query<Ctx> {
    Query::new().many(inner)
}

pub fn opt<Ctx: Clone + 'static>(inner: Query<Ctx>) -> Query<Ctx> {
    Query::new().opt(inner)
}

pub fn alt<Ctx: Clone + 'static>(branches: impl IntoIterator<Item = Query<Ctx>>) -> Query<Ctx> {
    Query::new().alt(branches)
}

pub fn tree<Ctx: Clone + 'static>(options: TreeOptions<Ctx>) -> Query<Ctx> {
    Query::new().tree(options)
}

pub fn str<Ctx: Clone + 'static>(pattern: impl Into<Pattern>) -> Query<Ctx> {
    Query::new().str(pattern)
}

pub fn str_with<Ctx: Clone + 'static>(
    pattern: impl Into<Pattern>,
    handler: impl Fn(Ctx, &Token) -> Ctx + 'static,
) -> Query<Ctx> {
    Query::new().str_with(pattern, handler)
}

pub fn str_parts<Ctx: Clone + 'static>(options: StrOptions<Ctx>) -> Query<Ctx> {
    Query::new().str_parts(options)
}

pub fn begin<Ctx: Clone + 'static>() -> Query<Ctx> {
    Query::new().begin()
}

pub fn end<Ctx: Clone + 'static>() -> Query<Ctx> {
    Query::new().end()
}

pub fn handler<Ctx: Clone + 'static>(
    handler: impl Fn(Ctx, Option<&Node>) -> Ctx + 'static,
) -> Query<Ctx> {
    Query::new().handler(handler)
}
