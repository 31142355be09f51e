//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::core::paths::default_db_path;
use crate::error::{FtpError, Result};

pub const DB_ENV_VAR: &str = "CLUB_FTP_DB";
pub const WEIGHTS_ENV_VAR: &str = "CLUB_FTP_WEIGHTS";
pub const MAX_FETCHES_ENV_VAR: &str = "CLUB_FTP_MAX_FETCHES";
pub const LOG_ENV_VAR: &str = "CLUB_FTP_LOG";

/// Per-slot fetches allowed in flight at once.
pub const DEFAULT_MAX_FETCHES: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
    /// `None` selects the built-in weight table.
    pub weights_path: Option<PathBuf>,
    pub max_concurrent_fetches: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            weights_path: None,
            max_concurrent_fetches: DEFAULT_MAX_FETCHES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(p) = get(DB_ENV_VAR) {
            cfg.db_path = PathBuf::from(p);
        }
        cfg.weights_path = get(WEIGHTS_ENV_VAR).map(PathBuf::from);
        if let Some(raw) = get(MAX_FETCHES_ENV_VAR) {
            cfg.max_concurrent_fetches = parse_concurrency(&raw)?;
        }

        Ok(cfg)
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        db_path: Option<PathBuf>,
        weights_path: Option<PathBuf>,
        max_fetches: Option<usize>,
    ) -> Result<Self> {
        if let Some(p) = db_path {
            self.db_path = p;
        }
        if let Some(p) = weights_path {
            self.weights_path = Some(p);
        }
        if let Some(n) = max_fetches {
            self.max_concurrent_fetches = check_concurrency(n)?;
        }
        Ok(self)
    }
}

fn parse_concurrency(raw: &str) -> Result<usize> {
    let n = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| FtpError::InvalidConfig {
            key: MAX_FETCHES_ENV_VAR.to_string(),
            message: e.to_string(),
        })?;
    check_concurrency(n)
}

fn check_concurrency(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(FtpError::InvalidConfig {
            key: MAX_FETCHES_ENV_VAR.to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    Ok(n)
}
