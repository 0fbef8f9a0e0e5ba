//! Productions 2 and 3: split an element into two triangles.

use meshgram_core::geometry::{midpoint, triangle_centroid};
use meshgram_core::{Role, Vertex};
use meshgram_pattern::PIVOT;

use crate::error::RewriteResult;
use crate::executor::RewriteContext;

const P: usize = 0;
const A: usize = 1;
const B: usize = 2;
const C: usize = 3;
/// Midpoint of the split side.
const M: usize = 4;
const IL: usize = 5;
const IR: usize = 6;

/// Unbroken triangle split along its longest side `b`-`c`.
const UNBROKEN_EDGES: [(usize, usize); 13] = [
    (P, IL),
    (P, IR),
    (A, B),
    (A, C),
    (A, M),
    (B, M),
    (C, M),
    (IL, A),
    (IL, B),
    (IL, M),
    (IR, A),
    (IR, C),
    (IR, M),
];

/// Triangle with a hanging midpoint on `a`-`c`, split from `b`.
const ONE_HANGING_EDGES: [(usize, usize); 13] = [
    (P, IL),
    (P, IR),
    (A, B),
    (B, C),
    (A, M),
    (C, M),
    (B, M),
    (IL, A),
    (IL, B),
    (IL, M),
    (IR, B),
    (IR, C),
    (IR, M),
];

/// Production 2: introduce the midpoint of `b`-`c` and connect it to `a`.
pub fn bisect_unbroken(ctx: &mut RewriteContext<'_>) -> RewriteResult<()> {
    ctx.expect_len(4)?;
    let [pivot, a, b, c] = ctx.slots([PIVOT, "a", "b", "c"])?;
    let (pa, pb, pc) = (ctx.position(a)?, ctx.position(b)?, ctx.position(c)?);
    let level = ctx.consume(pivot, Role::Interior)? + 1;

    let pm = midpoint(pb, pc);
    let local = [
        pivot,
        ctx.copy_down(a)?,
        ctx.copy_down(b)?,
        ctx.copy_down(c)?,
        ctx.spawn(Vertex::new(Role::Exterior, pm, level))?,
        ctx.spawn(Vertex::new(Role::Interior, triangle_centroid(pa, pb, pm), level))?,
        ctx.spawn(Vertex::new(Role::Interior, triangle_centroid(pa, pc, pm), level))?,
    ];
    ctx.link(&local, &UNBROKEN_EDGES)
}

/// Production 3: connect `b` to the existing midpoint of `a`-`c`.
pub fn bisect_one_hanging(ctx: &mut RewriteContext<'_>) -> RewriteResult<()> {
    ctx.expect_len(5)?;
    let [pivot, a, b, c, ac] = ctx.slots([PIVOT, "a", "b", "c", "ac"])?;
    let (pa, pb, pc, pm) = (
        ctx.position(a)?,
        ctx.position(b)?,
        ctx.position(c)?,
        ctx.position(ac)?,
    );
    let level = ctx.consume(pivot, Role::Interior)? + 1;

    let local = [
        pivot,
        ctx.copy_down(a)?,
        ctx.copy_down(b)?,
        ctx.copy_down(c)?,
        ctx.copy_down(ac)?,
        ctx.spawn(Vertex::new(Role::Interior, triangle_centroid(pa, pb, pm), level))?,
        ctx.spawn(Vertex::new(Role::Interior, triangle_centroid(pb, pc, pm), level))?,
    ];
    ctx.link(&local, &ONE_HANGING_EDGES)
}
