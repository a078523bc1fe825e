//! Error types shared across Relarea crates.

use std::path::PathBuf;

/// Top-level error type for Relarea operations.
///
/// The report path never produces one of these; filtering is
/// infallible by design. This type covers the configuration layer and
/// device-directory implementations.
#[derive(Debug, thiserror::Error)]
pub enum RelareaError {
    #[error("Device error: {message}")]
    Device { message: String },

    #[error("Report error: {message}")]
    Report { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using RelareaError.
pub type RelareaResult<T> = Result<T, RelareaError>;

impl RelareaError {
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device {
            message: msg.into(),
        }
    }

    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
