//! Common utilities and helper functions shared across commands.

use tracing::info;

use crate::{core::Config, scoring::weights::WeightTable, storage::ClubDatabase, Result};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub config: Config,
    pub db: ClubDatabase,
    pub weights: WeightTable,
}

impl CommandContext {
    /// Open the configured database and load the weight table
    pub fn new(config: Config) -> Result<Self> {
        info!(path = %config.db_path.display(), "connecting to database");
        let db = ClubDatabase::open(&config.db_path)?;

        let weights = WeightTable::load_or_default(config.weights_path.as_deref())?;
        info!(version = %weights.version, "loaded scoring weights");

        Ok(Self {
            config,
            db,
            weights,
        })
    }

    /// In-memory database with the built-in weights
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            config: Config::default(),
            db: ClubDatabase::new_in_memory()?,
            weights: WeightTable::default(),
        })
    }
}

/// Format a fractional points value the way the breakdown tables show it
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points:.2}")
    }
}
