use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::reader::LineError;

/// Everything that can stop a conversion.
///
/// None of these are recoverable: the conversion stops at the first one and
/// an output file that was already started is left as it is.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{}: file not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}: permission denied", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("malformed edge count: {0}")]
    MalformedCount(#[source] LineError),

    #[error("malformed edge line: {0}")]
    MalformedLine(#[source] LineError),

    #[error("declared {declared} edges, found {found}")]
    CountMismatch { declared: usize, found: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConvertError {
    /// Classifies a failure to open `path`.
    pub(crate) fn open(path: &Path, error: io::Error) -> ConvertError {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => ConvertError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => ConvertError::PermissionDenied { path },
            _ => ConvertError::Open {
                path,
                source: error,
            },
        }
    }

    /// The location of a malformed line, if that's what went wrong.
    pub fn line_error(&self) -> Option<&LineError> {
        match self {
            ConvertError::MalformedCount(e) | ConvertError::MalformedLine(e) => Some(e),
            _ => None,
        }
    }
}
