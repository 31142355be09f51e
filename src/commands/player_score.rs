//! Player score command implementation

use serde::Serialize;

use crate::{
    cli::types::{Position, Season},
    scoring::{
        compute::{aggregate_score, season_breakdown},
        types::FtpBreakdownEntry,
    },
    storage::StatsSource,
    Result,
};

use super::common::{format_points, CommandContext};

/// A player's aggregate over one scope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreReport {
    pub name: String,
    pub season: Season,
    pub matches: usize,
    /// Position played most often; `None` without matches.
    pub position: Option<Position>,
    pub ftp_score: i64,
    pub breakdown: Vec<FtpBreakdownEntry>,
}

/// Fetch a player's records for the scope and score them
pub fn player_score(ctx: &CommandContext, player: &str, season: &Season) -> Result<PlayerScoreReport> {
    let records = ctx.db.fetch_match_stats(player, season.filter())?;

    let mut counts: Vec<(Position, usize)> = Vec::new();
    for record in &records {
        let position = record.position();
        match counts.iter_mut().find(|(p, _)| *p == position) {
            Some((_, n)) => *n += 1,
            None => counts.push((position, 1)),
        }
    }
    // First position seen wins a tie
    let position = counts
        .iter()
        .rev()
        .max_by_key(|(_, n)| *n)
        .map(|(p, _)| *p);

    Ok(PlayerScoreReport {
        name: player.to_string(),
        season: season.clone(),
        matches: records.len(),
        position,
        ftp_score: aggregate_score(&records, &ctx.weights),
        breakdown: season_breakdown(&records, &ctx.weights),
    })
}

/// Handle the player-score command
pub async fn handle_player_score(
    ctx: CommandContext,
    player: String,
    season: Season,
    as_json: bool,
) -> Result<()> {
    let report = tokio::task::spawn_blocking(move || player_score(&ctx, &player, &season)).await??;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        print!("{}", render_player_score(&report)); // tarpaulin::skip
    }
    Ok(())
}

pub fn render_player_score(report: &PlayerScoreReport) -> String {
    let mut out = format!(
        "{} ({}) - {} matches, {} FTP\n",
        report.name, report.season, report.matches, report.ftp_score
    );
    for entry in report.breakdown.iter().filter(|e| e.points != 0.0) {
        out.push_str(&format!(
            "  {:<18} {:>6} {:>8}\n",
            entry.category.label(),
            format_points(entry.value),
            format_points(entry.points)
        ));
    }
    out
}
