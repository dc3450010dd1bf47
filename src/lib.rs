//! Namesweep: an exhaustive autocomplete harvester
//!
//! This crate enumerates the complete result set of a remote autocomplete
//! endpoint that only ever returns a capped number of matches per query,
//! by expanding query prefixes depth-first until every reachable name has
//! been observed.

pub mod alphabet;
pub mod config;
pub mod crawler;
pub mod output;
pub mod store;

use thiserror::Error;

/// Main error type for Namesweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Gave up on prefix '{prefix}' after {attempts} throttled attempts")]
    RetriesExhausted { prefix: String, attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Namesweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use config::{ApiVersion, Config};
pub use crawler::{Coordinator, QueryOutcome};
pub use store::ResultStore;
