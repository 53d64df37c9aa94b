//! Common error types for moodhue

use thiserror::Error;

/// Common result type for moodhue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared by the moodhue crates
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure (root folder creation, config reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML config file present but not parseable
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be located or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored palette (or other record) does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}
