//! Rewrite context - the clone-then-mutate workspace of one Apply call.
//!
//! Productions delegate to operation modules in `ops/`:
//! - `ops/seed.rs` - production 1 (seed quad split in two triangles)
//! - `ops/bisect.rs` - productions 2 and 3 (two new triangles)
//! - `ops/trisect.rs` - production 4 (three new triangles)
//! - `ops/quadrisect.rs` - production 5 (four new triangles)
//! - `ops/conform.rs` - productions 6 and 7 (merging duplicated sides)

use meshgram_core::{Position, Role, Vertex, VertexId};
use meshgram_graph::{IdAllocator, MeshGraph};
use meshgram_pattern::{Occurrence, Slot};
use tracing::debug;

use crate::error::{RewriteError, RewriteResult};
use crate::merge::merge_in_place;
use crate::result::{MergeRecord, RewriteOutcome};

/// Mutable copy of the input graph plus the single allocator scoped to it.
pub struct RewriteContext<'o> {
    production: u8,
    graph: MeshGraph,
    alloc: IdAllocator,
    occurrence: &'o Occurrence,
    consumed: Option<VertexId>,
    created: Vec<VertexId>,
    merged: Vec<MergeRecord>,
}

impl<'o> RewriteContext<'o> {
    /// Clone `source` and allocate ids past its high-water mark.
    pub fn new(production: u8, source: &MeshGraph, occurrence: &'o Occurrence) -> Self {
        Self {
            production,
            graph: source.clone(),
            alloc: IdAllocator::for_graph(source),
            occurrence,
            consumed: None,
            created: Vec::new(),
            merged: Vec::new(),
        }
    }

    pub fn production(&self) -> u8 {
        self.production
    }

    pub fn graph(&self) -> &MeshGraph {
        &self.graph
    }

    pub fn occurrence(&self) -> &Occurrence {
        self.occurrence
    }

    pub fn malformed(&self, reason: impl Into<String>) -> RewriteError {
        RewriteError::malformed(self.production, reason)
    }

    /// Fail unless the occurrence binds exactly `expected` vertices.
    pub fn expect_len(&self, expected: usize) -> RewriteResult<()> {
        let actual = self.occurrence.len();
        if actual != expected {
            return Err(RewriteError::wrong_size(self.production, expected, actual));
        }
        Ok(())
    }

    pub fn slot(&self, slot: Slot) -> RewriteResult<VertexId> {
        self.occurrence
            .get(slot)
            .ok_or_else(|| RewriteError::missing_slot(self.production, slot))
    }

    /// Resolve several slots at once, in the given order.
    pub fn slots<const N: usize>(&self, names: [Slot; N]) -> RewriteResult<[VertexId; N]> {
        let mut ids = [VertexId(0); N];
        for (id, name) in ids.iter_mut().zip(names) {
            *id = self.slot(name)?;
        }
        Ok(ids)
    }

    pub fn vertex(&self, id: VertexId) -> RewriteResult<&Vertex> {
        Ok(self.graph.require_vertex(id)?)
    }

    pub fn position(&self, id: VertexId) -> RewriteResult<Position> {
        Ok(self.vertex(id)?.require_position(id)?)
    }

    /// Flip the pivot to its used variant and return its level.
    pub fn consume(&mut self, pivot: VertexId, expected: Role) -> RewriteResult<u32> {
        let vertex = self.vertex(pivot)?;
        let (role, level) = (vertex.role, vertex.level);
        let used = match expected.used() {
            Some(used) if role == expected => used,
            _ => {
                return Err(self.malformed(format!(
                    "pivot {pivot} has role {role}, expected {expected}"
                )))
            }
        };
        self.graph.set_role(pivot, used)?;
        self.consumed = Some(pivot);
        Ok(level)
    }

    /// Insert a new vertex under the next free id.
    pub fn spawn(&mut self, vertex: Vertex) -> RewriteResult<VertexId> {
        let id = self.alloc.alloc();
        self.graph.add_vertex(id, vertex)?;
        self.created.push(id);
        Ok(id)
    }

    /// Insert a copy of `id` one level further down.
    pub fn copy_down(&mut self, id: VertexId) -> RewriteResult<VertexId> {
        let moved = self.vertex(id)?.moved_down();
        self.spawn(moved)
    }

    /// Connect local slots according to a fixed edge template.
    pub fn link(&mut self, local: &[VertexId], edges: &[(usize, usize)]) -> RewriteResult<()> {
        for &(u, v) in edges {
            self.graph.add_edge(local[u], local[v])?;
        }
        Ok(())
    }

    /// Merge two coincident vertices into a fresh survivor.
    pub fn merge(&mut self, left: VertexId, right: VertexId) -> RewriteResult<VertexId> {
        let survivor = self.alloc.peek();
        merge_in_place(&mut self.graph, left, right, survivor)?;
        self.alloc.alloc();
        self.merged.push(MergeRecord {
            left,
            right,
            survivor,
        });
        Ok(survivor)
    }

    pub fn finish(self) -> RewriteOutcome {
        debug!(
            production = self.production,
            created = self.created.len(),
            merged = self.merged.len(),
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "rewrite applied"
        );
        RewriteOutcome {
            graph: self.graph,
            consumed: self.consumed,
            created: self.created,
            merged: self.merged,
        }
    }
}
