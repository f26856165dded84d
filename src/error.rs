/// Error types for loading the gallery manifest and configuration
///
/// The gallery widgets themselves never fail; everything fallible
/// happens before the grid is built.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read from disk
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The gallery manifest is not valid JSON or is missing fields
    #[error("invalid gallery manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Two records in the manifest share the same id
    #[error("duplicate image id {0} in gallery manifest")]
    DuplicateImageId(u32),

    /// A background loading task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The configuration file is not valid JSON
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
