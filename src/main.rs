//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use club_ftp::{
    cli::{ClubFtp, Commands},
    commands::{
        common::CommandContext, import::handle_import, player_score::handle_player_score,
        totw::handle_totw, weights::handle_weights,
    },
    core::{config::LOG_ENV_VAR, Config},
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = ClubFtp::parse();
    init_logging(app.global.verbose);

    let config = Config::from_env()?.with_overrides(
        app.global.db,
        app.global.weights,
        app.global.max_fetches,
    )?;
    let ctx = CommandContext::new(config)?;

    match app.command {
        Commands::Totw { season, json } => handle_totw(ctx, season, json).await?,
        Commands::PlayerScore {
            player,
            season,
            json,
        } => handle_player_score(ctx, player, season, json).await?,
        Commands::Import { file, clear_db } => {
            handle_import(ctx, &file, clear_db).await?;
        }
        Commands::Weights { write } => handle_weights(ctx, write.as_deref()).await?,
    }

    Ok(())
}
