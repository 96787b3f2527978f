#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a download, mapped to process exit codes.
///
/// None of these are retried. Rows written before an `Api` failure stay in
/// the output file.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Failed to load configuration, {0}")]
    Config(String),

    #[error("Failed to write CSV file {}, {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to get log events, {0:#}")]
    Api(anyhow::Error),
}

impl DownloadError {
    pub fn file_system(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Self::FileSystem {
            path: path.into(),
            source: source.into(),
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 3,
            Self::FileSystem { .. } => 4,
            Self::Api(_) => 5,
        }
    }
}
