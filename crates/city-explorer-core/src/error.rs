// crates/city-explorer-core/src/error.rs
use thiserror::Error;

/// Errors produced by the city explorer.
///
/// Only [`ExplorerError::Validation`] ever reaches the user (as the error
/// banner). Storage and decoding failures are logged and absorbed by
/// [`CityExplorer`](crate::CityExplorer); they surface as values only for
/// callers that use the lower-level persistence functions directly.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("{0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
