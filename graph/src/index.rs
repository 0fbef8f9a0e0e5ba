//! Indexes for efficient graph lookups.

use meshgram_core::{Role, VertexId};
use std::collections::{BTreeMap, BTreeSet};

/// Role index: Role -> Set<VertexId>
#[derive(Debug, Clone, Default)]
pub struct RoleIndex {
    index: BTreeMap<Role, BTreeSet<VertexId>>,
}

impl RoleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: Role, id: VertexId) {
        self.index.entry(role).or_default().insert(id);
    }

    pub fn remove(&mut self, role: Role, id: VertexId) {
        if let Some(set) = self.index.get_mut(&role) {
            set.remove(&id);
            if set.is_empty() {
                self.index.remove(&role);
            }
        }
    }

    /// Vertices with the given role, ascending.
    pub fn get(&self, role: Role) -> impl Iterator<Item = VertexId> + '_ {
        self.index
            .get(&role)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn count(&self, role: Role) -> usize {
        self.index.get(&role).map_or(0, BTreeSet::len)
    }
}

/// Adjacency index: VertexId -> Set<VertexId>, kept symmetric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    neighbors: BTreeMap<VertexId, BTreeSet<VertexId>>,
    edge_count: usize,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex with no neighbors.
    pub fn add_vertex(&mut self, id: VertexId) {
        self.neighbors.entry(id).or_default();
    }

    /// Drop a vertex and every edge touching it. Returns the former neighbors.
    pub fn remove_vertex(&mut self, id: VertexId) -> BTreeSet<VertexId> {
        let former = self.neighbors.remove(&id).unwrap_or_default();
        for other in &former {
            if let Some(set) = self.neighbors.get_mut(other) {
                set.remove(&id);
            }
        }
        self.edge_count -= former.len();
        former
    }

    /// Insert an undirected edge. Returns false if it was already present.
    pub fn insert(&mut self, u: VertexId, v: VertexId) -> bool {
        let inserted = self.neighbors.entry(u).or_default().insert(v);
        if inserted {
            self.neighbors.entry(v).or_default().insert(u);
            self.edge_count += 1;
        }
        inserted
    }

    /// Remove an undirected edge. Returns false if it was absent.
    pub fn remove(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self
            .neighbors
            .get_mut(&u)
            .is_some_and(|set| set.remove(&v));
        if removed {
            if let Some(set) = self.neighbors.get_mut(&v) {
                set.remove(&u);
            }
            self.edge_count -= 1;
        }
        removed
    }

    pub fn contains(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors.get(&u).is_some_and(|set| set.contains(&v))
    }

    /// Neighbors of a vertex, ascending.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors
            .get(&id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors.get(&id).map_or(0, BTreeSet::len)
    }

    /// Every edge once, as `(low, high)`, ascending.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.neighbors.iter().flat_map(|(&u, set)| {
            set.range((std::ops::Bound::Excluded(u), std::ops::Bound::Unbounded))
                .map(move |&v| (u, v))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
