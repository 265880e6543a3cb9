//! Error types shared by every backend.

use std::io;
use std::path::{Path, PathBuf};

/// The closed set of failure kinds a backend can report.
///
/// Every backend reports the same kinds for the same situations, so callers can
/// match on [`FsError::kind`] without knowing which backend they talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FsErrorKind {
    /// Access to the path was denied.
    InvalidAccess,
    /// A name or file content could not be decoded as UTF-8.
    InvalidEncoding,
    /// An unspecified low-level read or write failure.
    Io,
    /// The path denotes a directory where something else was required.
    IsADirectory,
    /// The path, or one of its ancestors, does not exist.
    NotFound,
    /// The path, or one of its ancestors, exists but is not a directory.
    NotADirectory,
    /// The host reported an error with no more specific kind.
    UnknownOs,
}

impl FsErrorKind {
    /// Map a host error kind onto the closed taxonomy.
    ///
    /// Anything not recognized lands in [`FsErrorKind::UnknownOs`] instead of
    /// being folded into a more specific kind.
    pub fn from_io_kind(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::PermissionDenied => FsErrorKind::InvalidAccess,
            io::ErrorKind::IsADirectory => FsErrorKind::IsADirectory,
            io::ErrorKind::NotFound => FsErrorKind::NotFound,
            io::ErrorKind::NotADirectory => FsErrorKind::NotADirectory,
            _ => FsErrorKind::UnknownOs,
        }
    }
}

/// Filesystem error with the path that caused it.
///
/// # Examples
///
/// ```rust
/// use pathfs::{FsError, FsErrorKind};
///
/// let err = FsError::not_found("/missing");
/// assert_eq!(err.kind(), FsErrorKind::NotFound);
/// assert_eq!(err.to_string(), "not found: /missing");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Access to the path was denied.
    #[error("{operation}: permission denied: {path}")]
    InvalidAccess {
        /// The path where access was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    /// A name or file content is not valid UTF-8.
    #[error("invalid encoding: {path}")]
    InvalidEncoding {
        /// The path whose name or content failed to decode.
        path: PathBuf,
    },

    /// Low-level read or write failure.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The path is a directory.
    #[error("is a directory: {path}")]
    IsADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The path, or an ancestor, is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Host error without a more specific kind.
    #[error("{operation} failed for {path}: {source}")]
    UnknownOs {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The original host error, kept so the code is not lost.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// The payload-free kind of this error.
    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::InvalidAccess { .. } => FsErrorKind::InvalidAccess,
            FsError::InvalidEncoding { .. } => FsErrorKind::InvalidEncoding,
            FsError::Io { .. } => FsErrorKind::Io,
            FsError::IsADirectory { .. } => FsErrorKind::IsADirectory,
            FsError::NotFound { .. } => FsErrorKind::NotFound,
            FsError::NotADirectory { .. } => FsErrorKind::NotADirectory,
            FsError::UnknownOs { .. } => FsErrorKind::UnknownOs,
        }
    }

    /// The path the error refers to.
    ///
    /// This is the path passed to the failing call, even when the cause sits
    /// higher up: reading `/a/b` when `/a` is a file reports
    /// [`FsErrorKind::NotADirectory`] with path `/a/b`, not `/a`.
    pub fn path(&self) -> &Path {
        match self {
            FsError::InvalidAccess { path, .. }
            | FsError::InvalidEncoding { path }
            | FsError::Io { path, .. }
            | FsError::IsADirectory { path }
            | FsError::NotFound { path }
            | FsError::NotADirectory { path }
            | FsError::UnknownOs { path, .. } => path,
        }
    }

    /// Translate a host error for `operation` on `path`.
    pub fn from_io(source: io::Error, operation: &'static str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match FsErrorKind::from_io_kind(source.kind()) {
            FsErrorKind::InvalidAccess => FsError::InvalidAccess { path, operation },
            FsErrorKind::IsADirectory => FsError::IsADirectory { path },
            FsErrorKind::NotFound => FsError::NotFound { path },
            FsErrorKind::NotADirectory => FsError::NotADirectory { path },
            _ => FsError::UnknownOs {
                operation,
                path,
                source,
            },
        }
    }

    /// A low-level read or write failure.
    pub fn io(source: io::Error, operation: &'static str, path: impl Into<PathBuf>) -> Self {
        FsError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// `path` does not exist.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        FsError::NotFound { path: path.into() }
    }

    /// `path` exists but is not a directory.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        FsError::NotADirectory { path: path.into() }
    }

    /// `path` is a directory.
    pub fn is_a_directory(path: impl Into<PathBuf>) -> Self {
        FsError::IsADirectory { path: path.into() }
    }

    /// `path` has a name or content that is not valid UTF-8.
    pub fn invalid_encoding(path: impl Into<PathBuf>) -> Self {
        FsError::InvalidEncoding { path: path.into() }
    }
}
