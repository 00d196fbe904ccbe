//! Load board error types.

use std::path::PathBuf;

/// Errors loading a load board from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadBoardError {
    /// A file or directory couldn't be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file wasn't a JSON array of load records
    #[error("failed to parse {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The directory had no load files in it
    #[error("no load files found in {0:?}")]
    Empty(PathBuf),
}
