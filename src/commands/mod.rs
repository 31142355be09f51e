//! Command implementations for the club FTP CLI
//!
//! - `common`: shared context (database, weights, config)
//! - `import`: seed document loading
//! - `player_score`: one player's aggregate and breakdown
//! - `totw`: team of the week assembly and rendering
//! - `weights`: effective weight table export

pub mod common;
pub mod import;
pub mod player_score;
pub mod totw;
pub mod weights;
