//! Session error type

use ladder_core::{EditError, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("unknown environment '{label}' (expected one of: {allowed})")]
    UnknownLabel { label: String, allowed: String },

    #[error("no row matches '{0}'")]
    UnknownRowRef(String),

    #[error("ambiguous row reference '{reference}': matches {matches} rows")]
    AmbiguousRowRef { reference: String, matches: usize },

    #[error("no .ladder directory found in {0} or any parent")]
    NotInitialized(PathBuf),

    #[error("a draft already exists at {0}")]
    DraftExists(PathBuf),

    #[error("no draft at {0}")]
    NoDraft(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse draft: {0}")]
    DraftParse(#[from] toml::de::Error),

    #[error("failed to serialize draft: {0}")]
    DraftSerialize(#[from] toml::ser::Error),

    #[error("failed to encode payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("submission failed: {0}")]
    Submit(String),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
