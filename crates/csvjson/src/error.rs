use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or missing file path.
    InvalidPath,
    /// The path does not end in `.csv`.
    InvalidExtension,
    /// The file cannot be opened, read or decoded.
    Io,
    /// The rows could not be rendered as JSON.
    Serialization,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("file path is required")]
    MissingPath,

    #[error("invalid file type `{}`: only CSV files are supported", .path.display())]
    InvalidExtension { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line} is not valid {encoding}")]
    Decode { line: usize, encoding: &'static str },

    #[error("unsupported encoding `{0}`")]
    UnsupportedEncoding(String),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingPath => ErrorKind::InvalidPath,
            Error::InvalidExtension { .. } => ErrorKind::InvalidExtension,
            Error::Io(_) | Error::Decode { .. } | Error::UnsupportedEncoding(_) => ErrorKind::Io,
            Error::SerdeJson(_) => ErrorKind::Serialization,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
