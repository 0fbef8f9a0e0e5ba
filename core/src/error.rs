//! Common error types for meshgram.

use crate::VertexId;
use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex with this identifier already exists.
    #[error("Duplicate vertex identifier: {0}")]
    DuplicateIdentifier(VertexId),

    /// Vertex not found.
    #[error("Vertex not found: {0}")]
    UnknownVertex(VertexId),

    /// A geometric predicate was evaluated on a vertex without a position.
    #[error("Vertex {0} has no position")]
    MissingPosition(VertexId),

    /// Edges connect two distinct vertices.
    #[error("Self-loop on vertex {0}")]
    SelfLoop(VertexId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
