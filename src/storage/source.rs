//! The read interface the TOTW assembler fetches through.

use std::collections::BTreeMap;

use crate::cli::types::Season;
use crate::scoring::types::MatchStatRecord;
use crate::totw::types::StoredTotw;
use crate::Result;

/// Read-only stats fetches. Every call is idempotent and independent, so
/// implementations must tolerate being called from several threads at once.
pub trait StatsSource: Sync {
    /// Stored formation and picks for a season, if any were filed.
    fn fetch_stored_totw(&self, season: &Season) -> Result<Option<StoredTotw>>;

    /// A player's match records. `None` means every season.
    fn fetch_match_stats(&self, player: &str, season: Option<&str>) -> Result<Vec<MatchStatRecord>>;

    /// Distinct eligible players with at least one record in scope.
    fn fetch_distinct_eligible_contributor_count(&self, season: Option<&str>) -> Result<u32>;
}

#[derive(Debug, Clone)]
struct MatchEntry {
    player: String,
    season: String,
    record: MatchStatRecord,
}

/// In-memory source for tests and embedders that already hold their data.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    eligible: BTreeMap<String, bool>,
    matches: Vec<MatchEntry>,
    totws: BTreeMap<String, StoredTotw>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, name: &str, eligible: bool) -> Self {
        self.eligible.insert(name.to_string(), eligible);
        self
    }

    /// Add a match record; unknown players are registered as eligible.
    pub fn with_match(mut self, player: &str, season: &str, record: MatchStatRecord) -> Self {
        self.eligible.entry(player.to_string()).or_insert(true);
        self.matches.push(MatchEntry {
            player: player.to_string(),
            season: season.to_string(),
            record,
        });
        self
    }

    pub fn with_totw(mut self, stored: StoredTotw) -> Self {
        self.totws.insert(stored.season.as_str().to_string(), stored);
        self
    }

    fn in_scope<'a>(&'a self, season: Option<&'a str>) -> impl Iterator<Item = &'a MatchEntry> + 'a {
        self.matches
            .iter()
            .filter(move |m| season.map_or(true, |s| m.season == s))
    }
}

impl StatsSource for MemorySource {
    fn fetch_stored_totw(&self, season: &Season) -> Result<Option<StoredTotw>> {
        Ok(self.totws.get(season.as_str()).cloned())
    }

    fn fetch_match_stats(&self, player: &str, season: Option<&str>) -> Result<Vec<MatchStatRecord>> {
        Ok(self
            .in_scope(season)
            .filter(|m| m.player == player)
            .map(|m| m.record.clone())
            .collect())
    }

    fn fetch_distinct_eligible_contributor_count(&self, season: Option<&str>) -> Result<u32> {
        let mut seen: Vec<&str> = self
            .in_scope(season)
            .filter(|m| self.eligible.get(&m.player).copied().unwrap_or(false))
            .map(|m| m.player.as_str())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        Ok(seen.len() as u32)
    }
}
