//! Error types for the configuration layer.
//!
//! The simulation itself is total and never fails; errors only come from
//! loading [`crate::Settings`].

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum.
#[derive(Debug)]
pub enum Error {
    /// A settings file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A settings file was read but is not valid JSON for [`crate::Settings`].
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "failed to read settings '{}': {}", path.display(), source)
            }
            Error::Parse { path, source } => {
                write!(f, "invalid settings '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Parse { source, .. } => Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
