//! Error type for everything outside the physics core
//!
//! Settings, snapshots and frame files can fail; ticking a world cannot.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure while loading or writing run artefacts.
#[derive(Debug)]
pub enum Error {
    /// Filesystem access failed.
    Io { path: PathBuf, source: io::Error },
    /// A settings or snapshot file was not valid JSON for its schema.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Settings parsed but describe an impossible run.
    InvalidSettings { reason: String },
    /// Snapshot parsed but holds a world the simulation cannot run.
    InvalidSnapshot { reason: String },
    /// Snapshot written by an incompatible format version.
    UnsupportedVersion { expected: u32, found: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidSettings {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_snapshot(reason: impl Into<String>) -> Self {
        Error::InvalidSnapshot {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Error::Json { path, source } => {
                write!(f, "{}: malformed JSON: {source}", path.display())
            }
            Error::InvalidSettings { reason } => write!(f, "invalid settings: {reason}"),
            Error::InvalidSnapshot { reason } => write!(f, "invalid snapshot: {reason}"),
            Error::UnsupportedVersion { expected, found } => {
                write!(f, "unsupported snapshot version: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Json { source, .. } => Some(source),
            Error::InvalidSettings { .. }
            | Error::InvalidSnapshot { .. }
            | Error::UnsupportedVersion { .. } => None,
        }
    }
}
