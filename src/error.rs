//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Per-item failures (decode, encode, resize) are distinguished from configuration
//! failures (color, geometry, config file) so the orchestrator can keep going on the
//! former and abort early on the latter.
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {path:?}: {reason}")]
    DecodeFailure { path: PathBuf, reason: String },

    #[error("Failed to encode {path:?}: {reason}")]
    EncodeFailure { path: PathBuf, reason: String },

    #[error("Invalid color {spec:?}: {reason}")]
    InvalidColorSpec { spec: String, reason: String },

    #[error("Invalid {what} geometry: {width}x{height}")]
    InvalidGeometry {
        what: &'static str,
        width: u32,
        height: u32,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Resize error: {0}")]
    Resize(String),
}

impl Error {
    pub fn decode<E: std::fmt::Display>(path: &Path, e: E) -> Self {
        Error::DecodeFailure {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }

    pub fn encode<E: std::fmt::Display>(path: &Path, e: E) -> Self {
        Error::EncodeFailure {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }

    pub fn color<E: std::fmt::Display>(spec: &str, reason: E) -> Self {
        Error::InvalidColorSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }

    /// Errors that apply uniformly to every item and must abort a run before it starts.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidColorSpec { .. } | Error::InvalidGeometry { .. } | Error::Config(_)
        )
    }
}
