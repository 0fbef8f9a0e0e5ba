//! Production 1: split the seed into a unit quad made of two triangles.

use meshgram_core::geometry::triangle_centroid;
use meshgram_core::{Position, Role, Vertex};
use meshgram_pattern::PIVOT;

use crate::error::RewriteResult;
use crate::executor::RewriteContext;

const S: usize = 0;
const E00: usize = 1;
const E01: usize = 2;
const E10: usize = 3;
const E11: usize = 4;
const I0: usize = 5;
const I1: usize = 6;

const EDGES: [(usize, usize); 13] = [
    (S, I0),
    (S, I1),
    (E00, I0),
    (E01, I0),
    (E10, I0),
    (E01, I1),
    (E10, I1),
    (E11, I1),
    (E00, E01),
    (E00, E10),
    (E01, E11),
    (E10, E11),
    (E01, E10),
];

/// Corners of the unit square, independent of the seed's own position.
const CORNERS: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)];

pub fn seed(ctx: &mut RewriteContext<'_>) -> RewriteResult<()> {
    ctx.expect_len(1)?;
    let pivot = ctx.slot(PIVOT)?;
    let level = ctx.consume(pivot, Role::Start)? + 1;

    let corners = CORNERS.map(Position::from);
    let mut local = Vec::with_capacity(7);
    local.push(pivot);
    for corner in corners {
        local.push(ctx.spawn(Vertex::new(Role::Exterior, corner, level))?);
    }
    for (a, b, c) in [(0, 1, 2), (1, 2, 3)] {
        let centroid = triangle_centroid(corners[a], corners[b], corners[c]);
        local.push(ctx.spawn(Vertex::new(Role::Interior, centroid, level))?);
    }

    ctx.link(&local, &EDGES)
}
