//! Team of the Week assembly.
//!
//! Per-slot stat fetches fan out over a bounded rayon pool; everything after
//! the collect runs on the caller's thread.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::cli::types::Season;
use crate::core::config::DEFAULT_MAX_FETCHES;
use crate::error::{FtpError, Result};
use crate::scoring::compute::aggregate_player;
use crate::scoring::weights::WeightTable;
use crate::storage::StatsSource;
use crate::totw::formation::{resolve_slots, Slot};
use crate::totw::types::{StarMan, TotwData, TotwPlayer, TotwResponse};


pub struct TotwAssembler<'a, S: StatsSource> {
    source: &'a S,
    weights: &'a WeightTable,
    pool: ThreadPool,
}

impl<'a, S: StatsSource> TotwAssembler<'a, S> {
    /// `max_concurrent_fetches` caps how many slot fetches run at once.
    pub fn new(source: &'a S, weights: &'a WeightTable, max_concurrent_fetches: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(max_concurrent_fetches.max(1))
            .thread_name(|i| format!("totw-fetch-{i}"))
            .build()?;
        Ok(Self {
            source,
            weights,
            pool,
        })
    }

    pub fn compute(&self, season: &Season) -> Result<TotwResponse> {
        let Some(stored) = self.source.fetch_stored_totw(season)? else {
            info!(%season, "no stored team of the week");
            return Ok(TotwResponse::empty());
        };

        let slots = resolve_slots(&stored.formation);
        let picks: Vec<(&Slot, &str)> = slots
            .iter()
            .filter_map(|slot| stored.player_for(&slot.name).map(|player| (slot, player)))
            .collect();

        let players = self.score_picks(&picks, season.filter())?;

        let totw_score: i64 = players.iter().map(|p| p.ftp_score).sum();
        if let Some(cached) = stored.cached_score.filter(|c| *c != totw_score) {
            debug!(cached, totw_score, "stored total is stale, using recomputed total");
        }

        let star_man = elect_star_man(&players);
        let player_count = self
            .source
            .fetch_distinct_eligible_contributor_count(season.filter())?;

        info!(
            %season,
            formation = %stored.formation,
            roster = players.len(),
            totw_score,
            "assembled team of the week"
        );

        Ok(TotwResponse {
            totw_data: Some(TotwData {
                season: season.clone(),
                formation: stored.formation,
                totw_score,
                star_man,
                player_count,
            }),
            players,
        })
    }

    /// Fetch and score every pick. Output keeps slot order; the first failed
    /// fetch fails the whole team.
    fn score_picks(&self, picks: &[(&Slot, &str)], season: Option<&str>) -> Result<Vec<TotwPlayer>> {
        let source = self.source;
        let weights = self.weights;

        self.pool.install(|| {
            picks
                .par_iter()
                .map(|&(slot, player)| -> Result<TotwPlayer> {
                    let records = source.fetch_match_stats(player, season).map_err(|e| {
                        FtpError::SlotFetch {
                            slot: slot.name.clone(),
                            player: player.to_string(),
                            message: e.to_string(),
                        }
                    })?;
                    let score = aggregate_player(player, slot.position, &records, weights);
                    debug!(
                        slot = %slot.name,
                        player,
                        matches = records.len(),
                        ftp = score.ftp_score,
                        "scored slot"
                    );
                    Ok(TotwPlayer {
                        slot: slot.name.clone(),
                        name: score.name,
                        position: score.position,
                        ftp_score: score.ftp_score,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
    }
}

/// Highest score wins; ties go to the alphabetically first name, then to the
/// earlier slot.
pub fn elect_star_man(players: &[TotwPlayer]) -> Option<StarMan> {
    players
        .iter()
        .min_by(|a, b| {
            b.ftp_score
                .cmp(&a.ftp_score)
                .then_with(|| a.name.cmp(&b.name))
        })
        .map(|p| StarMan {
            name: p.name.clone(),
            score: p.ftp_score,
        })
}

/// One-shot assembly with the default fetch concurrency.
pub fn compute_totw<S: StatsSource>(
    source: &S,
    weights: &WeightTable,
    season: &Season,
) -> Result<TotwResponse> {
    TotwAssembler::new(source, weights, DEFAULT_MAX_FETCHES)?.compute(season)
}
