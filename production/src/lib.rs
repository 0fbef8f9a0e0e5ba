//! meshgram Production
//!
//! Dispatch the seven mesh productions and conform refined meshes.
//!
//! Responsibilities:
//! - Closed, order-significant set of productions
//! - Match and apply by production number
//! - Merge duplicated boundaries to a fixpoint
//! - Prevent runaway merge loops

mod config;
mod engine;
mod error;
mod production;

pub use config::EngineConfig;
pub use engine::{ConformStats, Engine};
pub use error::{ProductionError, ProductionResult};
pub use production::{apply_production, find_match, merge, Production};

/// Maximum number of merge passes in one conform call.
pub const MAX_MERGE_PASSES: usize = 64;
