use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid value '{value}' in {name}[{flag}].")]
    InvalidValue {
        value: String,
        name: &'static str,
        flag: &'static str,
    },

    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No file to convert.")]
    NothingToConvert,

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: HighlightError,
    },

    #[error("failed to serialize {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure inside a [`Highlighter`](crate::render::Highlighter).
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error(transparent)]
    Syntect(#[from] syntect::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
