//! Error types for content resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving blog content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to enumerate content root {root:?}: {source}")]
    Enumerate {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load source {id}: {source}")]
    Load {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} content source(s) failed to load")]
    SourcesFailed { failed: usize },
}

pub type Result<T> = std::result::Result<T, ContentError>;
