// crates/crgeo-core/src/error.rs
use thiserror::Error;

/// Errors raised by the loader, the seed reader and the store writer.
///
/// Duplicate keys are never an error: the merge skips them silently.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The store, seed or catalog file does not exist (or cannot be opened).
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content parsed, but is not usable (wrong tier, gzip without `compact`, ...).
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
