//! Merging of coincident vertices.

use meshgram_core::geometry::positions_equal;
use meshgram_core::{GraphError, GraphResult, VertexId};
use meshgram_graph::MeshGraph;
use std::collections::BTreeSet;
use tracing::debug;

/// Replace `a` and `b` by a new vertex `new_id` on a copy of `graph`.
///
/// The new vertex carries `a`'s attributes and is adjacent to every former
/// neighbor of either vertex except the two themselves. The caller must
/// pass coincident vertices.
pub fn merge(
    graph: &MeshGraph,
    a: VertexId,
    b: VertexId,
    new_id: VertexId,
) -> GraphResult<MeshGraph> {
    let mut merged = graph.clone();
    merge_in_place(&mut merged, a, b, new_id)?;
    Ok(merged)
}

/// In-place variant of [`merge`]. Leaves `graph` untouched on error.
pub fn merge_in_place(
    graph: &mut MeshGraph,
    a: VertexId,
    b: VertexId,
    new_id: VertexId,
) -> GraphResult<()> {
    let survivor = graph.require_vertex(a)?.clone();
    let other = graph.require_vertex(b)?;
    if a == b {
        return Err(GraphError::SelfLoop(a));
    }
    if graph.contains(new_id) {
        return Err(GraphError::DuplicateIdentifier(new_id));
    }
    debug_assert!(
        survivor.level == other.level
            && match (survivor.position, other.position) {
                (Some(p), Some(q)) => positions_equal(p, q),
                _ => true,
            },
        "merging non-coincident vertices {a} and {b}"
    );

    let neighbors: BTreeSet<VertexId> = graph
        .neighbors(a)
        .chain(graph.neighbors(b))
        .filter(|&n| n != a && n != b)
        .collect();

    graph.remove_vertex(a)?;
    graph.remove_vertex(b)?;
    graph.add_vertex(new_id, survivor)?;
    for n in &neighbors {
        graph.add_edge(new_id, *n)?;
    }

    debug!(left = %a, right = %b, survivor = %new_id, degree = neighbors.len(), "vertices merged");
    Ok(())
}
