use std::path::PathBuf;

use coordforge_core::NormalizeError;

/// Command line errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read format file {path}: {source}")]
    FormatFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse format file {path}: {source}")]
    FormatFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
