//! Club FTP Library
//!
//! Fantasy points (FTP) scoring and Team of the Week (TOTW) assembly for
//! an amateur football club's match statistics.
//!
//! ## Features
//!
//! - **Breakdown Calculator**: Per-category FTP for a single match record
//! - **Score Aggregator**: Rounded totals across many matches
//! - **Formation Resolver**: Formation strings to ordered roster slots
//! - **TOTW Assembler**: Scores a stored team, elects a star man
//! - **Editable Weights**: Versioned JSON weight table with a built-in default
//! - **Database Storage**: SQLite store for players, matches and stored teams
//!
//! ## Quick Start
//!
//! ```rust
//! use club_ftp::{compute_totw, MatchStatRecord, MemorySource, Season, WeightTable};
//!
//! # fn example() -> club_ftp::Result<()> {
//! let source = MemorySource::new().with_match(
//!     "Hal Munro",
//!     "2024/25",
//!     MatchStatRecord {
//!         minutes: 90,
//!         goals: 1,
//!         class: "FWD".to_string(),
//!         ..Default::default()
//!     },
//! );
//!
//! let response = compute_totw(&source, &WeightTable::default(), &Season::new("2024/25"))?;
//! // No stored team for the season
//! assert!(response.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CLUB_FTP_DB=~/club.db
//! export CLUB_FTP_WEIGHTS=~/weights.json
//! export CLUB_FTP_MAX_FETCHES=4
//! export CLUB_FTP_LOG=club_ftp=debug
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod scoring;
pub mod storage;
pub mod totw;

// Re-export commonly used types
pub use cli::types::{Position, Season, ALL_TIME};
pub use error::{FtpError, Result};
pub use scoring::{MatchStatRecord, WeightTable};
pub use storage::{ClubDatabase, MemorySource, StatsSource};
pub use totw::{compute_totw, TotwResponse};
