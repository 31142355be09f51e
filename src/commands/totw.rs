//! Team of the week command implementation

use crate::{
    cli::types::Season,
    totw::{TotwAssembler, TotwResponse},
    Result,
};

use super::common::CommandContext;

/// Assemble the team off the async runtime; fetches block.
pub async fn run_totw(ctx: CommandContext, season: Season) -> Result<TotwResponse> {
    let response = tokio::task::spawn_blocking(move || {
        let assembler = TotwAssembler::new(
            &ctx.db,
            &ctx.weights,
            ctx.config.max_concurrent_fetches,
        )?;
        assembler.compute(&season)
    })
    .await??;
    Ok(response)
}

/// Handle the totw command
pub async fn handle_totw(ctx: CommandContext, season: Season, as_json: bool) -> Result<()> {
    let response = run_totw(ctx, season.clone()).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?); // tarpaulin::skip
    } else {
        print!("{}", render_totw(&season, &response)); // tarpaulin::skip
    }
    Ok(())
}

/// Text rendering of an assembled team
pub fn render_totw(season: &Season, response: &TotwResponse) -> String {
    let Some(data) = &response.totw_data else {
        return format!("No team of the week stored for {season}.\n");
    };

    let mut out = format!("Team of the Week: {} ({})\n", data.season, data.formation);
    for p in &response.players {
        out.push_str(&format!("  {:<5} {:<24} {:>4}\n", p.slot, p.name, p.ftp_score));
    }
    out.push_str(&format!("Team score: {}\n", data.totw_score));
    if let Some(star) = &data.star_man {
        out.push_str(&format!("Star man: {} ({})\n", star.name, star.score));
    }
    out.push_str(&format!("Players with stats this scope: {}\n", data.player_count));
    out
}
