//! Grouping of coincident vertices.
//!
//! Two vertices coincide when they sit on the same level and their positions
//! are equal within tolerance. Vertices without a position never coincide.

use meshgram_core::geometry::positions_equal;
use meshgram_core::VertexId;
use meshgram_graph::MeshGraph;

fn coincide(graph: &MeshGraph, u: VertexId, v: VertexId) -> bool {
    match (graph.vertex(u), graph.vertex(v)) {
        (Some(a), Some(b)) => match (a.position, b.position) {
            (Some(p), Some(q)) => a.level == b.level && positions_equal(p, q),
            _ => false,
        },
        _ => false,
    }
}

/// Partition `ids` into coincidence groups, ordered by first appearance.
pub fn coincident_groups(
    graph: &MeshGraph,
    ids: impl IntoIterator<Item = VertexId>,
) -> Vec<Vec<VertexId>> {
    let mut groups: Vec<Vec<VertexId>> = Vec::new();
    for id in ids {
        match groups.iter_mut().find(|g| coincide(graph, g[0], id)) {
            Some(group) => group.push(id),
            None => groups.push(vec![id]),
        }
    }
    groups
}

/// Number of coincident pairs among `ids`; a group of n counts n(n-1)/2.
pub fn duplicate_pair_count(graph: &MeshGraph, ids: impl IntoIterator<Item = VertexId>) -> usize {
    coincident_groups(graph, ids)
        .iter()
        .map(|g| g.len() * (g.len() - 1) / 2)
        .sum()
}

/// Whether `id` coincides with some other vertex of the graph.
pub fn has_duplicate(graph: &MeshGraph, id: VertexId) -> bool {
    graph
        .vertex_ids()
        .any(|other| other != id && coincide(graph, id, other))
}
