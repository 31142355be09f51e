//! Core utilities for the club FTP CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `config`: Environment-driven configuration
//! - `paths`: Default file locations and small file helpers

pub mod config;
pub mod paths;

// Re-export commonly used items for convenience
pub use config::Config;
pub use paths::{default_db_path, try_read_to_string, write_string};
