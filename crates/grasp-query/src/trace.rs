//! Tracing for query execution.
//!
//! Matchers report what they do through a [`Tracer`]. The default entry
//! points pass [`NoopTracer`], whose methods are empty and inlined away;
//! [`PrintTracer`] collects human-readable lines for debugging a query.
//!
//! Tracers only observe. They never influence matching, and matchers keep
//! no tracing state of their own.

use grasp_core::{Colors, Node, Tree};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Successful matches, backtracking and tree searches. Kinds only.
    #[default]
    Default,
    /// Failed attempts too. Text on matches and failures.
    Verbose,
    /// Every node visited by a tree search and every attempt, with text and
    /// position.
    VeryVerbose,
}

/// Hooks called by matchers while a query runs.
///
/// - `trace_match_enter`: a node matcher is about to look at `node`
/// - `trace_match_success` / `trace_match_failure`: a node matcher
///   accepted or rejected the node it landed on (`None` when it ran off the
///   end of a level)
/// - `trace_backtrack`: a sequence asks step `step` for its next alternative
/// - `trace_search_enter` / `trace_search_exit`: a tree matcher walks the
///   descendants of `tree`
/// - `trace_search_visit`: the walk attempts the inner query at `node`
/// - `trace_search_match`: the inner query matched, `count` matches so far
pub trait Tracer {
    fn trace_match_enter(&mut self, matcher: &str, node: &Node);

    fn trace_match_success(&mut self, matcher: &str, node: &Node);

    fn trace_match_failure(&mut self, matcher: &str, node: Option<&Node>);

    fn trace_backtrack(&mut self, step: usize);

    fn trace_search_enter(&mut self, tree: &Tree);

    fn trace_search_visit(&mut self, depth: usize, node: &Node);

    fn trace_search_match(&mut self, count: usize);

    fn trace_search_exit(&mut self, count: usize);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_match_enter(&mut self, _matcher: &str, _node: &Node) {}

    #[inline(always)]
    fn trace_match_success(&mut self, _matcher: &str, _node: &Node) {}

    #[inline(always)]
    fn trace_match_failure(&mut self, _matcher: &str, _node: Option<&Node>) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _step: usize) {}

    #[inline(always)]
    fn trace_search_enter(&mut self, _tree: &Tree) {}

    #[inline(always)]
    fn trace_search_visit(&mut self, _depth: usize, _node: &Node) {}

    #[inline(always)]
    fn trace_search_match(&mut self, _count: usize) {}

    #[inline(always)]
    fn trace_search_exit(&mut self, _count: usize) {}
}

/// Tracer that collects formatted lines.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Nesting of tree searches, for indentation.
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn push(&mut self, symbol: &str, content: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{symbol} {content}"));
    }

    fn describe(&self, node: &Node, with_text: bool) -> String {
        let c = self.colors;
        let kind = c.kind(node.kind_name());
        if !with_text {
            return kind;
        }
        match node {
            Node::Token(token) if token.kind.is_marker() => kind,
            Node::Token(token) => {
                let mut out = format!("{kind} {}", c.text(&format!("{:?}", token.value)));
                if self.verbosity == Verbosity::VeryVerbose {
                    out.push(' ');
                    out.push_str(&c.meta(&format!("{}:{}", token.line, token.col)));
                }
                out
            }
            Node::Tree(tree) => match &tree.opening {
                Some(opening) => format!("{kind} {}", c.text(&format!("{:?}", opening.value))),
                None => kind,
            },
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_match_enter(&mut self, matcher: &str, node: &Node) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let content = format!("{matcher} {}", self.describe(node, true));
        self.push("→", content);
    }

    fn trace_match_success(&mut self, matcher: &str, node: &Node) {
        let verbose = self.verbosity != Verbosity::Default;
        let content = format!("{matcher} {}", self.describe(node, verbose));
        self.push("●", content);
    }

    fn trace_match_failure(&mut self, matcher: &str, node: Option<&Node>) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let found = match node {
            Some(node) => self.describe(node, true),
            None => self.colors.meta("end of level"),
        };
        self.push("○", format!("{matcher} {found}"));
    }

    fn trace_backtrack(&mut self, step: usize) {
        self.push("↺", format!("step {step}"));
    }

    fn trace_search_enter(&mut self, tree: &Tree) {
        let kind = self.colors.kind(tree.kind.as_str());
        self.push("▶", format!("search {kind}"));
        self.depth += 1;
    }

    fn trace_search_visit(&mut self, depth: usize, node: &Node) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let content = format!("{depth} {}", self.describe(node, true));
        self.push("·", content);
    }

    fn trace_search_match(&mut self, count: usize) {
        self.push("✓", format!("match #{count}"));
    }

    fn trace_search_exit(&mut self, count: usize) {
        self.depth = self.depth.saturating_sub(1);
        self.push("◀", format!("{count} matches"));
    }
}
