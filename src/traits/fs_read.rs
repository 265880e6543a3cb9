//! Read operations for filesystem backends.

use std::path::Path;

use crate::{FileType, FsError};

/// Read operations for a filesystem backend.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` so a backend
/// can be shared; backends that mutate state use interior mutability.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsRead`.
pub trait FsRead: Send + Sync {
    /// Get the type of the entry at `path` (follows symlinks on the host).
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::NotADirectory`] if an ancestor is not a directory
    fn file_type(&self, path: &Path) -> Result<FileType, FsError>;

    /// Read entire file contents as bytes.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::IsADirectory`] if the path is a directory
    /// - [`FsError::Io`] if reading fails part way
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError>;

    /// Check if a path exists.
    ///
    /// Never fails: any error is reported as `false`. Use
    /// [`file_type`](Self::file_type) to tell "absent" from "broken".
    fn exists(&self, path: &Path) -> bool {
        self.file_type(path).is_ok()
    }

    /// Check if `path` is a directory. Any error is reported as `false`.
    fn is_dir(&self, path: &Path) -> bool {
        self.file_type(path).is_ok_and(|t| t.is_dir())
    }

    /// Check if `path` is a regular file. Any error is reported as `false`.
    fn is_file(&self, path: &Path) -> bool {
        self.file_type(path).is_ok_and(|t| t.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<FileType, ()>);

    impl FsRead for Fixed {
        fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
            self.0.map_err(|()| FsError::not_a_directory(path))
        }

        fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
            Err(FsError::not_found(path))
        }
    }

    #[test]
    fn fs_read_is_object_safe() {
        fn _check(_: &dyn FsRead) {}
    }

    #[test]
    fn predicates_follow_file_type() {
        let dir = Fixed(Ok(FileType::Directory));
        assert!(dir.exists(Path::new("/d")));
        assert!(dir.is_dir(Path::new("/d")));
        assert!(!dir.is_file(Path::new("/d")));

        let file = Fixed(Ok(FileType::File));
        assert!(file.is_file(Path::new("/f")));
        assert!(!file.is_dir(Path::new("/f")));
    }

    #[test]
    fn predicates_swallow_errors() {
        let broken = Fixed(Err(()));
        assert!(!broken.exists(Path::new("/f/x")));
        assert!(!broken.is_dir(Path::new("/f/x")));
        assert!(!broken.is_file(Path::new("/f/x")));
    }
}
