use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected answer {} is unreadable: {source}", path.display())]
    Expected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("candidate output {} is unreadable: {source}", path.display())]
    Candidate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Reads a whole file into memory, tagging failures with the path.
pub fn read_text(path: impl Into<PathBuf>) -> Result<String> {
    let path = path.into();
    std::fs::read_to_string(&path).map_err(|source| ProbeError::Read { path, source })
}
