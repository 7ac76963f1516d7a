//! Error types for tag extraction and catalog output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single audio file did not produce tags.
///
/// These never leave [`crate::catalog::extract_metadata`]; they only decide
/// how the skip is logged.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported extension {0:?}")]
    Unsupported(String),

    #[error("no tag container")]
    NoTags,

    #[error("tag has no {0}")]
    MissingField(&'static str),

    #[error("failed to open file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode tags: {0}")]
    Decode(#[from] lofty::error::LoftyError),
}

/// Failures that abort a catalog build.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("audio root {} is not a readable directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write catalog to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
