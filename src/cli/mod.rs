//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Season;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// SQLite database path (or set `CLUB_FTP_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Weight table JSON (or set `CLUB_FTP_WEIGHTS`). Built-in table if unset.
    #[clap(long, global = true)]
    pub weights: Option<PathBuf>,

    /// Max concurrent per-slot stat fetches (or set `CLUB_FTP_MAX_FETCHES`).
    #[clap(long, global = true)]
    pub max_fetches: Option<usize>,

    /// Log progress to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Assemble the team of the week for a season, or "All Time".
    Totw {
        /// Season label (e.g. 2024/25) or "All Time".
        #[clap(long, short)]
        season: Season,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a player's FTP total and per-category breakdown.
    PlayerScore {
        /// Player name, exactly as stored.
        #[clap(long, short)]
        player: String,

        /// Season label; every season when omitted.
        #[clap(long, short, default_value = types::ALL_TIME)]
        season: Season,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Load a JSON seed document (players, matches, totw) into the database.
    Import {
        /// Seed document path.
        #[clap(long, short)]
        file: PathBuf,

        /// Clear all data from the database before importing.
        #[clap(long)]
        clear_db: bool,
    },

    /// Print the effective weight table, or write it out for editing.
    Weights {
        /// Write the table as pretty JSON to this path instead of printing.
        #[clap(long)]
        write: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "club-ftp", about = "Club fantasy points and team of the week")]
pub struct ClubFtp {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}
