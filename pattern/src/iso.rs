//! Whole-graph isomorphism under a vertex compatibility predicate.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use meshgram_core::{Vertex, VertexId};
use meshgram_graph::MeshGraph;

/// A vertex bijection from the left graph onto the right graph.
pub type VertexMap = BTreeMap<VertexId, VertexId>;

struct IsoSearch<'a, F> {
    left: &'a MeshGraph,
    right: &'a MeshGraph,
    same: F,
    order: Vec<(VertexId, Option<VertexId>)>,
}

impl<'a, F> IsoSearch<'a, F>
where
    F: Fn(&Vertex, &Vertex) -> bool,
{
    fn new(left: &'a MeshGraph, right: &'a MeshGraph, same: F) -> Self {
        let mut order = Vec::with_capacity(left.vertex_count());
        let mut seen = BTreeSet::new();
        for root in left.vertex_ids() {
            if !seen.insert(root) {
                continue;
            }
            let mut queue = VecDeque::from([(root, None)]);
            while let Some((u, parent)) = queue.pop_front() {
                order.push((u, parent));
                for v in left.neighbors(u) {
                    if seen.insert(v) {
                        queue.push_back((v, Some(u)));
                    }
                }
            }
        }
        Self {
            left,
            right,
            same,
            order,
        }
    }

    fn compatible(&self, u: VertexId, candidate: VertexId, mapping: &VertexMap) -> bool {
        let (Some(lv), Some(rv)) = (self.left.vertex(u), self.right.vertex(candidate)) else {
            return false;
        };
        if !(self.same)(lv, rv) || self.left.degree(u) != self.right.degree(candidate) {
            return false;
        }
        mapping.iter().all(|(&s, &image)| {
            image != candidate && self.left.has_edge(u, s) == self.right.has_edge(candidate, image)
        })
    }

    fn extend(&self, depth: usize, mapping: &mut VertexMap) -> bool {
        let Some(&(u, parent)) = self.order.get(depth) else {
            return true;
        };
        let candidates: Vec<VertexId> = match parent.and_then(|p| mapping.get(&p)) {
            Some(&anchor) => self.right.neighbors(anchor).collect(),
            None => self.right.vertex_ids().collect(),
        };
        for candidate in candidates {
            if !self.compatible(u, candidate, mapping) {
                continue;
            }
            mapping.insert(u, candidate);
            if self.extend(depth + 1, mapping) {
                return true;
            }
            mapping.remove(&u);
        }
        false
    }
}

/// Find a bijection between the vertices of two graphs that preserves
/// adjacency and maps every vertex onto one `same` accepts.
pub fn isomorphism_by<F>(left: &MeshGraph, right: &MeshGraph, same: F) -> Option<VertexMap>
where
    F: Fn(&Vertex, &Vertex) -> bool,
{
    if left.vertex_count() != right.vertex_count() || left.edge_count() != right.edge_count() {
        return None;
    }
    let search = IsoSearch::new(left, right, same);
    let mut mapping = VertexMap::new();
    search.extend(0, &mut mapping).then_some(mapping)
}

/// Whether two graphs are isomorphic under `same`.
pub fn isomorphic_by<F>(left: &MeshGraph, right: &MeshGraph, same: F) -> bool
where
    F: Fn(&Vertex, &Vertex) -> bool,
{
    isomorphism_by(left, right, same).is_some()
}
