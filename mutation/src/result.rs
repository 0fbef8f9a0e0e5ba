//! Rewrite result types.

use meshgram_core::VertexId;
use meshgram_graph::MeshGraph;

/// Two coincident vertices replaced by a fresh survivor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRecord {
    pub left: VertexId,
    pub right: VertexId,
    pub survivor: VertexId,
}

/// Outcome of applying one right-hand side.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// The rewritten copy of the input graph.
    pub graph: MeshGraph,
    /// Pivot flipped to its used variant, if any.
    pub consumed: Option<VertexId>,
    /// Vertices created, in allocation order.
    pub created: Vec<VertexId>,
    /// Merges performed, in order.
    pub merged: Vec<MergeRecord>,
}

impl RewriteOutcome {
    pub fn into_graph(self) -> MeshGraph {
        self.graph
    }

    /// Survivor ids of every merge, in order.
    pub fn survivors(&self) -> Vec<VertexId> {
        self.merged.iter().map(|m| m.survivor).collect()
    }
}
