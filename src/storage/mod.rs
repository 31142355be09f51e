//! Storage layer for the club FTP engine
//!
//! This module provides the stats-fetch seam the TOTW assembler reads
//! through, plus a SQLite implementation of it:
//! - `source`: The `StatsSource` trait and an in-memory implementation
//! - `models`: Seed-document data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Writes and the `StatsSource` reads

pub mod models;
pub mod queries;
pub mod schema;
pub mod source;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::ClubDatabase;
pub use source::{MemorySource, StatsSource};
