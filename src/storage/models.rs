//! Data models for the storage layer

use serde::{Deserialize, Serialize};

use crate::scoring::types::MatchStatRecord;
use crate::totw::types::StoredTotw;

fn eligible_by_default() -> bool {
    true
}

/// Player registered with the club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Ineligible players are hidden from site-wide counts.
    #[serde(default = "eligible_by_default")]
    pub eligible: bool,
}

/// One player's stats row for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub player: String,
    pub season: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub stats: MatchStatRecord,
}

/// Seed document accepted by the `import` command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRow>,
    #[serde(default)]
    pub totw: Vec<StoredTotw>,
}

/// Row counts written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub players: usize,
    pub matches: usize,
    pub totw: usize,
}
