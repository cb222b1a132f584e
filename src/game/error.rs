use std::path::PathBuf;
use thiserror::Error;

/// The word source could not produce a single candidate word.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word list '{}' not found", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read word list '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list '{}' contains no words", path.display())]
    Empty { path: PathBuf },
}

impl WordSourceError {
    pub fn title(&self) -> &'static str {
        "Word list unavailable"
    }

    pub fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::Missing { path }
        } else {
            Self::Unreadable { path, source: err }
        }
    }
}
