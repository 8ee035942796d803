//! Error kinds shared by the padder, the patcher and path resolution.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpherePadError {
    /// No readable input file could be settled on.
    #[error("input file `{}` was not found", .0.display())]
    MissingFile(PathBuf),

    /// The output exists and overwriting it was declined, or no output name was given.
    #[error("output file `{}` already exists and was not overwritten", .0.display())]
    FileConflict(PathBuf),

    /// A data or header line could not be parsed. `line` is 1-based.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The grid has no node at longitude 0 or does not span latitude -90 to 90.
    #[error("north and south poles are not nodes of this grid: {0}")]
    PoleNotOnGrid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpherePadError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SpherePadError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SpherePadError::MalformedRecord { .. } => 3,
            SpherePadError::PoleNotOnGrid(_) => 4,
            SpherePadError::FileConflict(_) => 5,
            SpherePadError::MissingFile(_) => 6,
            SpherePadError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpherePadError>;
