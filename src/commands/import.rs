//! Import command: load a seed document into the database

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::storage::{ImportSummary, SeedDocument};

use super::common::CommandContext;

pub fn read_seed(path: &Path) -> Result<SeedDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed document {}", path.display()))?;
    let seed = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed document {}", path.display()))?;
    Ok(seed)
}

/// Handle the import command
pub async fn handle_import(ctx: CommandContext, file: &Path, clear_db: bool) -> Result<ImportSummary> {
    let seed = read_seed(file)?;

    if clear_db {
        println!("Clearing all database data..."); // tarpaulin::skip
        ctx.db.clear_all_data().context("clearing database")?;
    }

    let summary = ctx.db.import_seed(&seed).context("writing seed document")?;
    info!(
        players = summary.players,
        matches = summary.matches,
        totw = summary.totw,
        "import complete"
    );
    println!(
        "✓ Imported {} players, {} match rows, {} teams",
        summary.players, summary.matches, summary.totw
    );
    Ok(summary)
}
