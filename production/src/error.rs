//! Production error types.

use meshgram_core::GraphError;
use meshgram_mutation::RewriteError;
use thiserror::Error;

/// Result type for production operations.
pub type ProductionResult<T> = Result<T, ProductionError>;

/// Errors that can occur while matching or applying productions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductionError {
    #[error("Unknown production: {0} (expected 1 to 7)")]
    UnknownProduction(u8),

    #[error("Merging did not settle after {passes} passes")]
    MergePassesExceeded { passes: usize },

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ProductionError {
    pub fn merge_passes_exceeded(passes: usize) -> Self {
        Self::MergePassesExceeded { passes }
    }

    /// The underlying graph error, wherever it was raised.
    pub fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Graph(e) | Self::Rewrite(RewriteError::Graph(e)) => Some(e),
            _ => None,
        }
    }

    pub fn is_malformed_occurrence(&self) -> bool {
        matches!(
            self,
            Self::Rewrite(RewriteError::MalformedOccurrence { .. })
        )
    }
}
