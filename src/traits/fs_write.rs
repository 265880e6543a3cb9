//! Write operations for filesystem backends.

use std::path::Path;

use crate::FsError;

/// Write operations for a filesystem backend.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsWrite`.
pub trait FsWrite: Send + Sync {
    /// Write data to a file (creates if not exists, truncates if exists).
    ///
    /// Parent directories must exist. Use [`FsDir::create_dir_all`](super::FsDir::create_dir_all)
    /// to ensure parent directories exist. On failure the backend reports an
    /// error and never a partially written success.
    ///
    /// # Errors
    ///
    /// - [`FsError::IsADirectory`] if the path is the root or an existing directory
    /// - [`FsError::NotFound`] if the parent directory does not exist
    /// - [`FsError::NotADirectory`] if the parent exists but is not a directory
    /// - [`FsError::Io`] if the data could not be written in full
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError>;
}
