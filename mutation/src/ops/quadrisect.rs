//! Production 5: split a triangle whose three sides all carry hanging
//! midpoints into four triangles meeting at the midpoint of `a`-`c`.

use meshgram_core::geometry::triangle_centroid;
use meshgram_core::{Role, Vertex};
use meshgram_pattern::PIVOT;

use crate::error::RewriteResult;
use crate::executor::RewriteContext;

const P: usize = 0;
const A: usize = 1;
const B: usize = 2;
const C: usize = 3;
const AC: usize = 4;
const BC: usize = 5;
const AB: usize = 6;
const I0: usize = 7;
const I1: usize = 8;
const I2: usize = 9;
const I3: usize = 10;

const EDGES: [(usize, usize); 25] = [
    (P, I0),
    (P, I1),
    (P, I2),
    (P, I3),
    (A, AB),
    (A, AC),
    (A, I0),
    (B, AB),
    (B, AC),
    (B, BC),
    (B, I1),
    (B, I2),
    (C, AC),
    (C, BC),
    (C, I3),
    (AC, I0),
    (AC, I1),
    (AC, I2),
    (AC, I3),
    (AC, AB),
    (AC, BC),
    (BC, I2),
    (BC, I3),
    (AB, I0),
    (AB, I1),
];

pub fn quadrisect(ctx: &mut RewriteContext<'_>) -> RewriteResult<()> {
    ctx.expect_len(7)?;
    let [pivot, a, b, c, ac, bc, ab] = ctx.slots([PIVOT, "a", "b", "c", "ac", "bc", "ab"])?;
    let [pa, pb, pc, pac, pbc, pab] = [
        ctx.position(a)?,
        ctx.position(b)?,
        ctx.position(c)?,
        ctx.position(ac)?,
        ctx.position(bc)?,
        ctx.position(ab)?,
    ];
    let level = ctx.consume(pivot, Role::Interior)? + 1;

    let centroids = [
        triangle_centroid(pa, pab, pac),
        triangle_centroid(pab, pb, pac),
        triangle_centroid(pb, pac, pbc),
        triangle_centroid(pac, pc, pbc),
    ];

    let mut local = Vec::with_capacity(11);
    local.push(pivot);
    for id in [a, b, c, ac, bc, ab] {
        local.push(ctx.copy_down(id)?);
    }
    for centroid in centroids {
        local.push(ctx.spawn(Vertex::new(Role::Interior, centroid, level))?);
    }
    ctx.link(&local, &EDGES)
}
