//! Fantasy points (FTP) scoring.
//!
//! - `types`: Match records, categories and breakdown entries
//! - `weights`: The editable weight table
//! - `compute`: Breakdown calculator and score aggregator

pub mod compute;
pub mod types;
pub mod weights;

pub use compute::{aggregate_player, aggregate_score, ftp_breakdown, season_breakdown};
pub use types::{AggregatedPlayerScore, FtpBreakdownEntry, MatchStatRecord, StatCategory};
pub use weights::WeightTable;
