//! Error types for the jester programs.

use thiserror::Error;

/// Result type for jester operations.
pub type JesterResult<T> = Result<T, JesterError>;

/// Errors that can end a jester program.
#[derive(Debug, Error)]
pub enum JesterError {
    /// The thought printer drew above its stop threshold.
    #[error("The jester has left the terminal.")]
    JesterLeft {
        /// Number of thoughts printed before leaving.
        lines: u64,
    },

    /// Reading stdin, writing stdout, or writing the chain file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The chain could not be serialized.
    #[error("chain serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A voidchain step was invoked in the wrong state.
    #[error("voidchain step out of order: expected {expected}, found {found}")]
    OutOfOrder {
        /// State the step requires.
        expected: &'static str,
        /// State the session was actually in.
        found: &'static str,
    },
}
