//! Directory operations for filesystem backends.

use std::path::Path;

use crate::FsError;

/// Directory operations for a filesystem backend.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsDir`.
pub trait FsDir: Send + Sync {
    /// List the names of the immediate children of a directory.
    ///
    /// Order is unspecified. The listing is complete and has no duplicates;
    /// `.` and `..` are never included.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::NotADirectory`] if the path is not a directory
    /// - [`FsError::InvalidEncoding`] if an entry name is not valid UTF-8
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, FsError>;

    /// Create a directory, optionally creating missing ancestors first.
    ///
    /// Idempotent: succeeds if a directory already exists at `path`. With
    /// `recursive`, success means `path` itself now exists as a directory.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotADirectory`] if a non-directory exists at `path` or an ancestor
    /// - [`FsError::NotFound`] if the parent is missing and `recursive` is `false`
    fn create_directory(&self, path: &Path, recursive: bool) -> Result<(), FsError>;

    /// Create a directory (parent must exist).
    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        self.create_directory(path, false)
    }

    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        self.create_directory(path, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<bool>>);

    impl FsDir for Recorder {
        fn read_dir(&self, _: &Path) -> Result<Vec<String>, FsError> {
            Ok(vec![])
        }

        fn create_directory(&self, _: &Path, recursive: bool) -> Result<(), FsError> {
            self.0.lock().unwrap().push(recursive);
            Ok(())
        }
    }

    #[test]
    fn convenience_forms_pick_recursion() {
        let rec = Recorder::default();
        rec.create_dir(Path::new("/a")).unwrap();
        rec.create_dir_all(Path::new("/a/b")).unwrap();
        assert_eq!(*rec.0.lock().unwrap(), vec![false, true]);
    }

    #[test]
    fn fs_dir_is_object_safe() {
        fn _check(_: &dyn FsDir) {}
    }
}
