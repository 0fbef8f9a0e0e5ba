//! meshgram Core Types
//!
//! This crate provides the foundational types shared by every meshgram crate:
//! - Vertex identifiers (VertexId)
//! - Vertex roles and the used-variant mapping (Role)
//! - Planar positions and the vertex record (Position, Vertex)
//! - Geometric utilities with tolerance-based comparison
//! - Common error types

pub mod geometry;

mod error;
mod id;
mod vertex;

pub use error::*;
pub use geometry::EPSILON;
pub use id::*;
pub use vertex::*;
