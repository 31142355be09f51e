//! Error types for the club FTP engine

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FtpError>;

#[derive(Error, Debug)]
pub enum FtpError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Season not provided")]
    MissingSeason,

    #[error("Invalid weight table: {message}")]
    InvalidWeights { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid configuration for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    #[error("Failed to fetch stats for {player} in slot {slot}: {message}")]
    SlotFetch {
        slot: String,
        player: String,
        message: String,
    },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<anyhow::Error> for FtpError {
    fn from(err: anyhow::Error) -> Self {
        FtpError::Storage {
            message: err.to_string(),
        }
    }
}
