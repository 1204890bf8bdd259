//! Errors reported while building rule tables and trees.

/// Inconsistent language description, detected once at rule-table build
/// time and independent of any input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("empty delimiter in {what}")]
    EmptyDelimiter { what: &'static str },

    #[error("delimiter `{delimiter}` is declared more than once")]
    DuplicateDelimiter { delimiter: String },

    #[error("template start `{template}` equals the end of its string")]
    TemplateConflict { template: String },

    #[error("variable template `{template}` allows undeclared operator `{operator}`")]
    UndeclaredOperator { template: String, operator: String },

    #[error("invalid {what} pattern `{pattern}`: {message}")]
    InvalidPattern {
        what: &'static str,
        pattern: String,
        message: String,
    },
}

/// Tree building failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Indentation that neither extends nor reduces the enclosing indent.
    #[error("inconsistent indentation at {line}:{col}: {found:?} does not line up with {expected:?}")]
    InconsistentIndent {
        line: usize,
        col: usize,
        expected: String,
        found: String,
    },

    /// The builder's own stack ran out before the root was reached.
    #[error("unbalanced tree stack at end of input")]
    UnbalancedTree,
}
