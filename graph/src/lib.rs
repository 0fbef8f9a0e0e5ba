//! meshgram Graph Storage
//!
//! This crate provides the mesh graph with indexed access:
//! - Vertex and edge storage with deterministic ascending iteration
//! - Role index: find vertices by role
//! - Adjacency index: neighbors and undirected edge set
//! - Id allocator scoped to one rewrite

mod alloc;
mod graph;
mod index;

pub use alloc::*;
pub use graph::*;
