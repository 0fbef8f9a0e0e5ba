//! Productions 6 and 7: merge the duplicated boundary left behind when two
//! neighboring elements were refined independently.

use meshgram_core::geometry::{midpoint, positions_equal};
use meshgram_core::{Role, VertexId};
use meshgram_graph::MeshGraph;
use meshgram_pattern::coincidence::coincident_groups;

use crate::error::RewriteResult;
use crate::executor::RewriteContext;

/// Coincidence groups of size two or more among the occurrence's exterior
/// vertices, ordered by first appearance.
fn duplicate_groups(ctx: &RewriteContext<'_>) -> Vec<Vec<VertexId>> {
    let graph = ctx.graph();
    let exteriors = ctx
        .occurrence()
        .vertices()
        .filter(|&id| graph.vertex(id).is_some_and(|v| v.role == Role::Exterior));
    coincident_groups(graph, exteriors)
        .into_iter()
        .filter(|g| g.len() > 1)
        .collect()
}

/// Production 6: fold every duplicate group into a single vertex.
pub fn merge_duplicated_side(ctx: &mut RewriteContext<'_>) -> RewriteResult<()> {
    ctx.expect_len(14)?;
    let groups = duplicate_groups(ctx);
    if groups.is_empty() {
        return Err(ctx.malformed("no coincident exterior vertices"));
    }
    for group in groups {
        let mut survivor = group[0];
        for &other in &group[1..] {
            survivor = ctx.merge(survivor, other)?;
        }
    }
    Ok(())
}

/// The vertices a production 7 rewrite merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HalfSide {
    /// Duplicated midpoint of the shared side.
    mid: (VertexId, VertexId),
    /// Duplicated far endpoint of the shared side.
    far: (VertexId, VertexId),
}

/// Find `e1`, a shared endpoint adjacent to both copies of a duplicated
/// midpoint `(l, r)`, and far endpoints `(fl, fr)` such that each copy of the
/// midpoint lies halfway between `e1` and its far endpoint.
fn find_half_side(
    graph: &MeshGraph,
    members: &[VertexId],
    groups: &[Vec<VertexId>],
) -> RewriteResult<Option<HalfSide>> {
    let exterior_member = |id: VertexId| {
        members.contains(&id) && graph.vertex(id).is_some_and(|v| v.role == Role::Exterior)
    };
    let position = |id: VertexId| -> RewriteResult<_> {
        Ok(graph.require_vertex(id)?.require_position(id)?)
    };
    let group_of = |id: VertexId| groups.iter().find(|g| g.contains(&id));

    for group in groups {
        for (i, &l) in group.iter().enumerate() {
            for &r in &group[i + 1..] {
                let (pl, pr) = (position(l)?, position(r)?);
                for e1 in graph.neighbors(l) {
                    if !exterior_member(e1) || !graph.has_edge(e1, r) {
                        continue;
                    }
                    let p1 = position(e1)?;
                    for fl in graph.neighbors(l) {
                        if fl == e1 || !exterior_member(fl) {
                            continue;
                        }
                        if !positions_equal(midpoint(p1, position(fl)?), pl) {
                            continue;
                        }
                        let Some(twins) = group_of(fl) else {
                            continue;
                        };
                        for &fr in twins {
                            if fr == fl || fr == e1 || !graph.has_edge(r, fr) {
                                continue;
                            }
                            if positions_equal(midpoint(p1, position(fr)?), pr) {
                                return Ok(Some(HalfSide {
                                    mid: (l, r),
                                    far: (fl, fr),
                                }));
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(None)
}

/// Production 7: merge the duplicated midpoint, then the duplicated far
/// endpoint, of a side whose near endpoint is already shared.
pub fn merge_duplicated_half_side(ctx: &mut RewriteContext<'_>) -> RewriteResult<()> {
    ctx.expect_len(15)?;
    let groups = duplicate_groups(ctx);
    let members: Vec<VertexId> = ctx.occurrence().vertices().collect();
    let found = find_half_side(ctx.graph(), &members, &groups)?;
    let Some(half) = found else {
        return Err(ctx.malformed("no duplicated half side among the bound vertices"));
    };
    ctx.merge(half.mid.0, half.mid.1)?;
    ctx.merge(half.far.0, half.far.1)?;
    Ok(())
}
