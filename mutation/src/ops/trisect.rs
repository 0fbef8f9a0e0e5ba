//! Production 4: split a triangle with hanging midpoints on `a`-`b` and
//! `a`-`c` into three triangles.

use meshgram_core::geometry::triangle_centroid;
use meshgram_core::{Role, Vertex};
use meshgram_pattern::PIVOT;

use crate::error::RewriteResult;
use crate::executor::RewriteContext;

const P: usize = 0;
const A: usize = 1;
const B: usize = 2;
const C: usize = 3;
const AB: usize = 4;
const AC: usize = 5;
/// Corner triangle at `a`.
const IA: usize = 6;
/// Middle triangle `ab`-`ac`-`c`.
const IC: usize = 7;
/// Triangle `ab`-`c`-`b`, placed at the centroid of `ac`, `c` and `b`.
const ICB: usize = 8;

const EDGES: [(usize, usize); 18] = [
    (P, IA),
    (P, ICB),
    (A, AC),
    (A, AB),
    (AB, AC),
    (AC, C),
    (AB, B),
    (AB, C),
    (B, C),
    (IA, A),
    (IA, AB),
    (IA, AC),
    (IC, C),
    (IC, AC),
    (IC, AB),
    (ICB, C),
    (ICB, B),
    (ICB, AB),
];

pub fn trisect(ctx: &mut RewriteContext<'_>) -> RewriteResult<()> {
    ctx.expect_len(6)?;
    let [pivot, a, b, c, ab, ac] = ctx.slots([PIVOT, "a", "b", "c", "ab", "ac"])?;
    let [pa, pb, pc, pab, pac] = [
        ctx.position(a)?,
        ctx.position(b)?,
        ctx.position(c)?,
        ctx.position(ab)?,
        ctx.position(ac)?,
    ];
    let level = ctx.consume(pivot, Role::Interior)? + 1;

    let local = [
        pivot,
        ctx.copy_down(a)?,
        ctx.copy_down(b)?,
        ctx.copy_down(c)?,
        ctx.copy_down(ab)?,
        ctx.copy_down(ac)?,
        ctx.spawn(Vertex::new(Role::Interior, triangle_centroid(pa, pab, pac), level))?,
        ctx.spawn(Vertex::new(Role::Interior, triangle_centroid(pab, pac, pc), level))?,
        ctx.spawn(Vertex::new(Role::Interior, triangle_centroid(pac, pc, pb), level))?,
    ];
    ctx.link(&local, &EDGES)
}
