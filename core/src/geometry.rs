//! Planar geometry with tolerance-based comparison.

use crate::Position;

/// Absolute tolerance for position equality.
pub const EPSILON: f64 = 1e-5;

/// Euclidean distance between two points.
pub fn distance(p: Position, q: Position) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Coordinate-wise mean of two points.
pub fn midpoint(p: Position, q: Position) -> Position {
    Position::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Coordinate-wise mean of any number of points, `None` when empty.
pub fn centroid(points: &[Position]) -> Option<Position> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Position::new(sx / n, sy / n))
}

/// Centroid of a triangle.
pub fn triangle_centroid(a: Position, b: Position, c: Position) -> Position {
    Position::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Whether two points lie strictly closer than [`EPSILON`]. Implies both
/// coordinate differences are below [`EPSILON`].
pub fn positions_equal(p: Position, q: Position) -> bool {
    distance(p, q) < EPSILON
}
