//! Errors raised while compiling a query.
//!
//! Running a compiled query never fails: a query that does not match
//! yields `None`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("repetition minimum {min} exceeds maximum {max}")]
    InvalidRepetition { min: usize, max: usize },

    #[error("alternation needs at least one branch")]
    EmptyAlternation,
}
