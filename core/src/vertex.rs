//! Vertex structures for meshgram.
//!
//! A vertex carries its role in the mesh hierarchy, an optional planar
//! position and the refinement level it lives on.

use std::fmt;

use crate::{GraphError, GraphResult, VertexId};

/// Role of a vertex within the mesh hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Seed of the whole mesh, not yet refined.
    Start,
    /// Seed that has already been refined.
    StartUsed,
    /// Mesh point on an element boundary.
    Exterior,
    /// Element (triangle) awaiting refinement.
    Interior,
    /// Element that has already been refined.
    InteriorUsed,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Start,
        Role::StartUsed,
        Role::Exterior,
        Role::Interior,
        Role::InteriorUsed,
    ];

    /// The terminal variant a pivot becomes once consumed.
    ///
    /// Exterior vertices and already-used roles have no such variant.
    pub fn used(self) -> Option<Role> {
        match self {
            Role::Start => Some(Role::StartUsed),
            Role::Interior => Some(Role::InteriorUsed),
            Role::StartUsed | Role::Exterior | Role::InteriorUsed => None,
        }
    }

    /// Whether this role is a consumed (terminal) variant.
    pub fn is_used(self) -> bool {
        matches!(self, Role::StartUsed | Role::InteriorUsed)
    }

    /// Single-letter label.
    pub fn symbol(self) -> char {
        match self {
            Role::Start => 'S',
            Role::StartUsed => 's',
            Role::Exterior => 'E',
            Role::Interior => 'I',
            Role::InteriorUsed => 'i',
        }
    }

    /// Parse a single-letter label.
    pub fn from_symbol(symbol: char) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.symbol() == symbol)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A vertex of the mesh graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Role in the hierarchy.
    pub role: Role,
    /// Planar position, absent for vertices whose geometry is irrelevant.
    pub position: Option<Position>,
    /// Refinement level, 0 for the seed.
    pub level: u32,
}

impl Vertex {
    /// Create a vertex with a known position.
    pub fn new(role: Role, position: Position, level: u32) -> Self {
        Self {
            role,
            position: Some(position),
            level,
        }
    }

    /// Create a vertex without a position.
    pub fn unplaced(role: Role, level: u32) -> Self {
        Self {
            role,
            position: None,
            level,
        }
    }

    /// The level-0 seed vertex every mesh starts from.
    pub fn seed(position: Position) -> Self {
        Self::new(Role::Start, position, 0)
    }

    /// Copy of this vertex one level further down the hierarchy.
    pub fn moved_down(&self) -> Self {
        Self {
            role: self.role,
            position: self.position,
            level: self.level + 1,
        }
    }

    /// The position, or `MissingPosition` naming `id`.
    pub fn require_position(&self, id: VertexId) -> GraphResult<Position> {
        self.position.ok_or(GraphError::MissingPosition(id))
    }
}
