//! Identifier allocation for rewrites.

use crate::MeshGraph;
use meshgram_core::VertexId;

/// Hands out fresh vertex ids for one rewrite.
///
/// Each rewrite creates exactly one allocator from the snapshot it reads.
/// Two allocators built from the same snapshot produce the same ids.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: VertexId,
}

impl IdAllocator {
    /// Start one past the highest id the graph has ever held, or at 0.
    pub fn for_graph(graph: &MeshGraph) -> Self {
        let next = graph.high_water().map_or(VertexId(0), |hw| hw.next());
        Self { next }
    }

    /// The id the next call to [`IdAllocator::alloc`] will return.
    pub fn peek(&self) -> VertexId {
        self.next
    }

    pub fn alloc(&mut self) -> VertexId {
        let id = self.next;
        self.next = id.next();
        id
    }
}
