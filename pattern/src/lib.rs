//! meshgram Pattern
//!
//! Match production left-hand sides against a mesh graph.
//!
//! Responsibilities:
//! - Pivot scan over unrefined seeds and interior elements
//! - Element shapes: edge presence, hanging midpoints, longest side
//! - Role-labeled template search with coincident-pair counting
//! - Whole-graph isomorphism under a vertex predicate

pub mod coincidence;
pub mod shape;
pub mod template;

mod binding;
mod iso;
mod matcher;

pub use binding::{Occurrence, Slot, PIVOT};
pub use iso::{isomorphic_by, isomorphism_by, VertexMap};
pub use matcher::Matcher;
pub use shape::{Corner, ElementShape, ShapeOp};
pub use template::{Template, TemplateStrategy, TEMPLATE_SLOTS};
