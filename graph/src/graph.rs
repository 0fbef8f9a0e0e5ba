//! Core mesh graph storage.

use crate::index::{AdjacencyIndex, RoleIndex};
use meshgram_core::{GraphError, GraphResult, Role, Vertex, VertexId};
use std::collections::BTreeMap;

/// An attributed, undirected, simple graph describing a mesh.
///
/// Vertices are kept in ascending id order so every scan is deterministic.
#[derive(Debug, Clone, Default)]
pub struct MeshGraph {
    /// Vertex storage
    vertices: BTreeMap<VertexId, Vertex>,
    /// Edge storage
    adj_index: AdjacencyIndex,
    /// Role index
    role_index: RoleIndex,
    /// Highest id ever inserted, survives removals
    high_water: Option<VertexId>,
}

impl MeshGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph holding only the level-0 seed vertex.
    pub fn seeded(id: VertexId, seed: Vertex) -> Self {
        let mut graph = Self::new();
        graph.insert_unchecked(id, seed);
        graph
    }

    // ==================== Vertex Operations ====================

    /// Insert a vertex under a caller-chosen id.
    pub fn add_vertex(&mut self, id: VertexId, vertex: Vertex) -> GraphResult<()> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateIdentifier(id));
        }
        self.insert_unchecked(id, vertex);
        Ok(())
    }

    fn insert_unchecked(&mut self, id: VertexId, vertex: Vertex) {
        self.role_index.insert(vertex.role, id);
        self.adj_index.add_vertex(id);
        self.vertices.insert(id, vertex);
        if self.high_water.map_or(true, |hw| id > hw) {
            self.high_water = Some(id);
        }
    }

    /// Get a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Get a vertex by id, or `UnknownVertex`.
    pub fn require_vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.vertices.get(&id).ok_or(GraphError::UnknownVertex(id))
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Delete a vertex and all edges involving it.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex> {
        let vertex = self
            .vertices
            .remove(&id)
            .ok_or(GraphError::UnknownVertex(id))?;
        self.role_index.remove(vertex.role, id);
        self.adj_index.remove_vertex(id);
        Ok(vertex)
    }

    /// Change the role of a vertex in place.
    pub fn set_role(&mut self, id: VertexId, role: Role) -> GraphResult<()> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::UnknownVertex(id))?;
        self.role_index.remove(vertex.role, id);
        vertex.role = role;
        self.role_index.insert(role, id);
        Ok(())
    }

    // ==================== Edge Operations ====================

    /// Connect two vertices. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        if !self.contains(u) {
            return Err(GraphError::UnknownVertex(u));
        }
        if !self.contains(v) {
            return Err(GraphError::UnknownVertex(v));
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        self.adj_index.insert(u, v);
        Ok(())
    }

    /// Disconnect two vertices. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        self.adj_index.remove(u, v)
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adj_index.contains(u, v)
    }

    /// Neighbors of a vertex, ascending. Empty for unknown vertices.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adj_index.neighbors(id)
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.adj_index.degree(id)
    }

    // ==================== Iteration ====================

    /// All vertices, ascending by id.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices.iter().map(|(&id, v)| (id, v))
    }

    /// All vertex ids, ascending.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// All edges once, as `(low, high)` pairs, ascending.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adj_index.edges()
    }

    /// Vertices with the given role, ascending.
    pub fn vertices_with_role(&self, role: Role) -> impl Iterator<Item = VertexId> + '_ {
        self.role_index.get(role)
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.role_index.count(role)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj_index.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Largest id currently present.
    pub fn max_id(&self) -> Option<VertexId> {
        self.vertices.keys().next_back().copied()
    }

    /// Largest id ever inserted into this graph or the graph it was cloned from.
    pub fn high_water(&self) -> Option<VertexId> {
        self.high_water
    }
}

/// Structural equality: same vertices with the same attributes, same edges.
impl PartialEq for MeshGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.adj_index == other.adj_index
    }
}
