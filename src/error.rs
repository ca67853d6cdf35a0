use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    /// The lemma file could not be opened or decoded
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be created or written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serializing statistics failed: {0}")]
    Stats(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordlistError>;

impl WordlistError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WordlistError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WordlistError::Write {
            path: path.into(),
            source,
        }
    }
}
