//! Error taxonomy for the whole tool. Every failure path carries a distinct,
//! matchable kind so callers (and `main`) can tell flag problems apart from
//! converter misuse and from genuinely unexpected failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Malformed, missing, or conflicting command-line flags.
    #[error("{0}")]
    Argument(String),

    /// A unit token outside the two supported scales. Unreachable through
    /// the CLI flags, which fix the scale; kept as its own kind for callers
    /// that parse unit tokens themselves.
    #[error("invalid unit '{0}', expected 'C' or 'F'")]
    InvalidUnit(String),

    /// Anything that is not a validation problem, e.g. a failed write to
    /// stdout. Message and source delegate to the wrapped error.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
