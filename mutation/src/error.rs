//! Rewrite error types.

use meshgram_core::GraphError;
use thiserror::Error;

/// Result type for rewrite operations.
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Errors that can occur while applying a right-hand side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// The occurrence does not fit the production's left-hand side.
    #[error("Malformed occurrence for production {production}: {reason}")]
    MalformedOccurrence { production: u8, reason: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl RewriteError {
    pub fn malformed(production: u8, reason: impl Into<String>) -> Self {
        Self::MalformedOccurrence {
            production,
            reason: reason.into(),
        }
    }

    pub fn wrong_size(production: u8, expected: usize, actual: usize) -> Self {
        Self::malformed(
            production,
            format!("expected {expected} bound vertices, got {actual}"),
        )
    }

    pub fn missing_slot(production: u8, slot: &str) -> Self {
        Self::malformed(production, format!("no vertex bound to slot '{slot}'"))
    }
}
