use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("no lines with both stream=... and chunk=... were found")]
    Empty,

    #[error("failed to read log file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl TimelineError {
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }
}
