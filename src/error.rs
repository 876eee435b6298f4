//! Error types for loading lists, configuration and persisted state.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the I/O edges of the crate.
///
/// Normalization itself never fails; these only come from reading
/// substitution lists, configuration, or writing reports and snapshots.
#[derive(Debug, Error)]
pub enum DeclensionError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("engine snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl DeclensionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeclensionError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, DeclensionError>;
