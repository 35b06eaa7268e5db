use std::{io, path::PathBuf};

use crate::document::Format;

/// Every way a [`FileUtilities`](crate::FileUtilities) operation can fail.
#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("No such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("The {format} file {} is empty or invalid", path.display())]
    EmptyDocument { path: PathBuf, format: Format },

    #[error("Expected a mapping at the top of {}, found {found}", path.display())]
    NotAMapping { path: PathBuf, found: &'static str },

    #[error("Malformed {format} in {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("Cannot infer a document format from {}", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("Failed to serialize data for {}: {message}", path.display())]
    Serialize { path: PathBuf, message: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Corrupt or incompatible binary file {}: {source}", path.display())]
    Deserialization {
        path: PathBuf,
        source: bincode::Error,
    },

    #[error("Malformed base64 payload for {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: base64::DecodeError,
    },

    #[error("Document has no key `{key}`")]
    MissingKey { key: String },

    #[error("Value under `{key}` has the wrong shape: {message}")]
    InvalidField { key: String, message: String },

    #[error("Document does not match the requested type: {message}")]
    InvalidDocument { message: String },
}

pub type FileResult<T> = Result<T, FileError>;

impl FileError {
    /// Classifies an I/O error raised while opening or reading `path`.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => FileError::NotFound { path },
            _ => FileError::Read { path, source },
        }
    }

    pub(crate) fn from_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FileError::Write {
            path: path.into(),
            source,
        }
    }
}
