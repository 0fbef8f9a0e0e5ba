//! Right-hand sides, one module per family of productions.

mod bisect;
mod conform;
mod quadrisect;
mod seed;
mod trisect;

pub use bisect::{bisect_one_hanging, bisect_unbroken};
pub use conform::{merge_duplicated_half_side, merge_duplicated_side};
pub use quadrisect::quadrisect;
pub use seed::seed;
pub use trisect::trisect;
