//! Error types
//!
//! The round engine itself never fails; these cover configuration loading and
//! the external collaborators, whose failures are logged and otherwise ignored.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollaboratorError {
    #[error("{0} backend unavailable")]
    Unavailable(&'static str),
    #[error("{backend} failed: {reason}")]
    Failed { backend: &'static str, reason: String },
}
