//! Type-safe wrappers for seasons and position buckets.

pub mod position;
pub mod season;

pub use position::Position;
pub use season::{Season, ALL_TIME};
