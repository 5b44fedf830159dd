use thiserror::Error;

/// Errors that can occur during regularization.
///
/// Degenerate geometry is not an error: coincident points fall back to
/// zero-length lines or sentinel metrics. These variants cover inputs
/// that break the caller contract.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegularizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("segment {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
