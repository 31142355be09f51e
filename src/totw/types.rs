use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cli::types::{Position, Season};

/// Formation and picks as filed by the seeding job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTotw {
    pub season: Season,
    pub formation: String,
    /// Slot name (e.g. `MID2`) to player name. Blank names mean an empty slot.
    #[serde(default)]
    pub slot_assignments: BTreeMap<String, String>,
    /// Total written at seeding time. Never used for the team score.
    #[serde(default)]
    pub cached_score: Option<i64>,
}

impl StoredTotw {
    /// Picked player for a slot, ignoring blank entries.
    pub fn player_for(&self, slot: &str) -> Option<&str> {
        self.slot_assignments
            .get(slot)
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
    }
}

/// One filled slot of the assembled team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotwPlayer {
    pub slot: String,
    pub name: String,
    pub position: Position,
    pub ftp_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarMan {
    pub name: String,
    pub score: i64,
}

/// Team-level figures of an assembled TOTW.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotwData {
    pub season: Season,
    pub formation: String,
    pub totw_score: i64,
    pub star_man: Option<StarMan>,
    /// Distinct eligible players with any stats in scope; not the roster size.
    pub player_count: u32,
}

/// What a caller receives: a full team, or `{ totwData: null, players: [] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotwResponse {
    pub totw_data: Option<TotwData>,
    pub players: Vec<TotwPlayer>,
}

impl TotwResponse {
    pub fn empty() -> Self {
        Self {
            totw_data: None,
            players: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.totw_data.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_response_shape() {
        let value = serde_json::to_value(TotwResponse::empty()).unwrap();
        assert_eq!(value, json!({ "totwData": null, "players": [] }));
    }

    #[test]
    fn test_player_for_skips_blank_slots() {
        let stored = StoredTotw {
            season: Season::new("2024/25"),
            formation: "4-4-2".to_string(),
            slot_assignments: BTreeMap::from([
                ("GK".to_string(), "Chris Dale".to_string()),
                ("MID1".to_string(), "   ".to_string()),
                ("MID2".to_string(), String::new()),
            ]),
            cached_score: Some(99),
        };

        assert_eq!(stored.player_for("GK"), Some("Chris Dale"));
        assert_eq!(stored.player_for("MID1"), None);
        assert_eq!(stored.player_for("MID2"), None);
        assert_eq!(stored.player_for("FWD1"), None);
    }

    #[test]
    fn test_stored_totw_from_seed_json() {
        let stored: StoredTotw = serde_json::from_value(json!({
            "season": "2024/25",
            "formation": "4-3-3",
            "slotAssignments": { "GK": "Chris Dale", "DEF1": "" }
        }))
        .unwrap();

        assert_eq!(stored.season.as_str(), "2024/25");
        assert_eq!(stored.cached_score, None);
        assert_eq!(stored.slot_assignments.len(), 2);
    }
}
