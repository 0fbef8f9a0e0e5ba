//! meshgram Mutation
//!
//! Apply production right-hand sides and merge coincident vertices.
//!
//! Responsibilities:
//! - Clone the input graph and allocate fresh ids for one rewrite
//! - Consume the pivot and build each production's fixed edge template
//! - Merge duplicated vertices produced by independent refinements
//!
//! # Module Structure
//!
//! - `executor` - RewriteContext shared by every right-hand side
//! - `ops/` - Individual right-hand sides (seed, bisect, trisect, quadrisect, conform)
//! - `merge` - Vertex merging
//! - `error` - Error types for rewrite failures
//! - `result` - Outcome of a rewrite

mod error;
mod executor;
mod merge;
mod result;

pub mod ops;

pub use error::{RewriteError, RewriteResult};
pub use executor::RewriteContext;
pub use merge::{merge, merge_in_place};
pub use result::{MergeRecord, RewriteOutcome};
