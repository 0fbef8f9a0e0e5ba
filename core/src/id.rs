//! Identity type for mesh vertices.
//!
//! Vertex identifiers are 64-bit values that are:
//! - Unique within one graph instance
//! - Allocated in increasing order
//! - Never reused after the vertex they named is removed

use std::fmt;

/// Unique identifier for a mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    /// Create a new VertexId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The identifier directly after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
