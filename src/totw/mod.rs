//! Team of the Week (TOTW) assembly
//!
//! - `formation`: Formation descriptors and roster slots
//! - `types`: Stored picks and assembled results
//! - `assemble`: Scores the picks and builds the team

pub mod assemble;
pub mod formation;
pub mod types;

pub use assemble::{compute_totw, elect_star_man, TotwAssembler};
pub use formation::{resolve_slots, FormationCounts, Slot, DEFAULT_FORMATION};
pub use types::{StarMan, StoredTotw, TotwData, TotwPlayer, TotwResponse};
