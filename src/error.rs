//! Error types
//!
//! The simulation never fails; only the edges that read configuration do.

use thiserror::Error;

/// Result type alias for fallible setup operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Settings rejected by validation
    #[error("configuration error: {0}")]
    Config(String),

    /// Settings file could not be parsed
    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
