//! Slot bindings produced by a successful match.

use meshgram_core::VertexId;
use std::fmt;

/// Name of a slot in a left-hand side, such as `"pivot"` or `"ab"`.
pub type Slot = &'static str;

/// The pivot slot shared by every pivot-based left-hand side.
pub const PIVOT: Slot = "pivot";

/// An ordered assignment of left-hand-side slots to graph vertices.
///
/// Only valid against the graph snapshot it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrence {
    bindings: Vec<(Slot, VertexId)>,
}

impl Occurrence {
    /// Create new empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an ordered list of bindings.
    pub fn from_bindings(bindings: Vec<(Slot, VertexId)>) -> Self {
        Self { bindings }
    }

    /// Append a binding.
    pub fn bind(&mut self, slot: Slot, id: VertexId) {
        self.bindings.push((slot, id));
    }

    /// The vertex bound to `slot`.
    pub fn get(&self, slot: &str) -> Option<VertexId> {
        self.bindings
            .iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, id)| *id)
    }

    /// The vertex at a position in slot order.
    pub fn at(&self, index: usize) -> Option<VertexId> {
        self.bindings.get(index).map(|(_, id)| *id)
    }

    /// The first binding, which is the pivot for pivot-based productions.
    pub fn pivot(&self) -> Option<VertexId> {
        self.at(0)
    }

    /// Bound vertices in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.bindings.iter().map(|(_, id)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, VertexId)> + '_ {
        self.bindings.iter().copied()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.bindings.iter().any(|(_, bound)| *bound == id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (slot, id)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{slot}: {id}")?;
        }
        write!(f, "}}")
    }
}
