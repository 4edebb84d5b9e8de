use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Merging itself is total and never fails; only loading a configuration
/// file can error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
