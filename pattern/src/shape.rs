//! Element shapes: declarative left-hand sides around an interior pivot.
//!
//! A shape is an ordered list of operations evaluated against a candidate
//! assignment of the pivot's three corner vertices to slots `a`, `b`, `c`.
//! Operations may bind further slots (hanging midpoints) as they go.

use crate::binding::Slot;

/// One of the three corner slots of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    A,
    B,
    C,
}

impl Corner {
    pub fn index(self) -> usize {
        match self {
            Corner::A => 0,
            Corner::B => 1,
            Corner::C => 2,
        }
    }

    pub fn slot(self) -> Slot {
        match self {
            Corner::A => "a",
            Corner::B => "b",
            Corner::C => "c",
        }
    }
}

/// A single constraint or binding step of an element shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeOp {
    /// The two corners must be adjacent.
    RequireEdge(Corner, Corner),
    /// The two corners must not be adjacent.
    ForbidEdge(Corner, Corner),
    /// Bind the first common exterior neighbor of the two corners lying at
    /// their midpoint on the pivot's level.
    BindMidpoint { slot: Slot, between: (Corner, Corner) },
    /// The side between the two corners is the longest of the triangle.
    RequireLongest(Corner, Corner),
}

/// A pivot-based left-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementShape {
    pub name: &'static str,
    pub ops: &'static [ShapeOp],
}

impl ElementShape {
    /// Number of occurrence slots: pivot, three corners, bound midpoints.
    pub fn arity(&self) -> usize {
        4 + self
            .ops
            .iter()
            .filter(|op| matches!(op, ShapeOp::BindMidpoint { .. }))
            .count()
    }
}

use self::Corner::{A, B, C};

/// Triangle with all three sides present, split along its longest side.
pub const UNBROKEN_TRIANGLE: ElementShape = ElementShape {
    name: "unbroken triangle",
    ops: &[
        ShapeOp::RequireEdge(A, B),
        ShapeOp::RequireEdge(A, C),
        ShapeOp::RequireEdge(B, C),
        ShapeOp::RequireLongest(B, C),
    ],
};

/// Triangle whose side `a`-`c` is already split by a hanging midpoint.
pub const ONE_HANGING_MIDPOINT: ElementShape = ElementShape {
    name: "one hanging midpoint",
    ops: &[
        ShapeOp::RequireEdge(A, B),
        ShapeOp::RequireEdge(B, C),
        ShapeOp::ForbidEdge(A, C),
        ShapeOp::BindMidpoint {
            slot: "ac",
            between: (A, C),
        },
    ],
};

/// Triangle whose sides `a`-`b` and `a`-`c` are already split.
pub const TWO_HANGING_MIDPOINTS: ElementShape = ElementShape {
    name: "two hanging midpoints",
    ops: &[
        ShapeOp::RequireEdge(B, C),
        ShapeOp::ForbidEdge(A, B),
        ShapeOp::ForbidEdge(A, C),
        ShapeOp::BindMidpoint {
            slot: "ab",
            between: (A, B),
        },
        ShapeOp::BindMidpoint {
            slot: "ac",
            between: (A, C),
        },
    ],
};

/// Triangle with every side already split.
pub const THREE_HANGING_MIDPOINTS: ElementShape = ElementShape {
    name: "three hanging midpoints",
    ops: &[
        ShapeOp::ForbidEdge(A, B),
        ShapeOp::ForbidEdge(B, C),
        ShapeOp::ForbidEdge(A, C),
        ShapeOp::BindMidpoint {
            slot: "ac",
            between: (A, C),
        },
        ShapeOp::BindMidpoint {
            slot: "bc",
            between: (B, C),
        },
        ShapeOp::BindMidpoint {
            slot: "ab",
            between: (A, B),
        },
    ],
};
