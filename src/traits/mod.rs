//! # Filesystem Traits
//!
//! The capability every backend implements.
//!
//! ```text
//! FsRead + FsWrite + FsDir = Fs
//! ```
//!
//! | Trait | Methods |
//! |-------|---------|
//! | [`FsRead`] | `file_type`, `read`, `exists`, `is_dir`, `is_file` |
//! | [`FsWrite`] | `write` |
//! | [`FsDir`] | `read_dir`, `create_directory`, `create_dir`, `create_dir_all` |
//!
//! ## Blanket Implementations
//!
//! [`Fs`] is implemented for every type that implements the three component
//! traits. The component traits are also implemented for `&T`, `Box<T>` and
//! `Arc<T>`, so a shared backend can be handed to a wrapper and still be used
//! directly:
//!
//! ```rust
//! use pathfs::{FsDir, FsRead, FsWrite, MemoryFs, RerootedFs};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let mem = Arc::new(MemoryFs::new());
//! mem.create_dir(Path::new("/mnt")).unwrap();
//!
//! let view = RerootedFs::new(Arc::clone(&mem), "/mnt");
//! view.write(Path::new("/hello.txt"), b"hi").unwrap();
//! assert_eq!(mem.read(Path::new("/mnt/hello.txt")).unwrap(), b"hi");
//! ```
//!
//! ## Object Safety
//!
//! All traits are object-safe:
//!
//! ```rust
//! use pathfs::Fs;
//!
//! fn process(fs: &dyn Fs) -> bool {
//!     fs.exists(std::path::Path::new("/file.txt"))
//! }
//! ```

mod fs_dir;
mod fs_read;
mod fs_write;

use std::path::Path;
use std::sync::Arc;

use crate::{FileType, FsError};

pub use fs_dir::FsDir;
pub use fs_read::FsRead;
pub use fs_write::FsWrite;

/// The filesystem capability: reading ([`FsRead`]), writing ([`FsWrite`]) and
/// directory operations ([`FsDir`]).
///
/// Automatically implemented for any type that implements all three
/// component traits.
///
/// # Example
///
/// ```rust
/// use pathfs::{Fs, FsError};
/// use std::path::Path;
///
/// fn backup_file<B: Fs + ?Sized>(fs: &B, src: &Path, dst: &Path) -> Result<(), FsError> {
///     let data = fs.read(src)?;
///     if let Some(parent) = dst.parent() {
///         fs.create_dir_all(parent)?;
///     }
///     fs.write(dst, &data)
/// }
/// ```
pub trait Fs: FsRead + FsWrite + FsDir {}

impl<T: FsRead + FsWrite + FsDir + ?Sized> Fs for T {}

impl<T: FsRead + ?Sized> FsRead for &T {
    fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
        (**self).file_type(path)
    }
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        (**self).read(path)
    }
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}

impl<T: FsWrite + ?Sized> FsWrite for &T {
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        (**self).write(path, data)
    }
}

impl<T: FsDir + ?Sized> FsDir for &T {
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, FsError> {
        (**self).read_dir(path)
    }
    fn create_directory(&self, path: &Path, recursive: bool) -> Result<(), FsError> {
        (**self).create_directory(path, recursive)
    }
}

impl<T: FsRead + ?Sized> FsRead for Box<T> {
    fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
        (**self).file_type(path)
    }
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        (**self).read(path)
    }
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}

impl<T: FsWrite + ?Sized> FsWrite for Box<T> {
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        (**self).write(path, data)
    }
}

impl<T: FsDir + ?Sized> FsDir for Box<T> {
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, FsError> {
        (**self).read_dir(path)
    }
    fn create_directory(&self, path: &Path, recursive: bool) -> Result<(), FsError> {
        (**self).create_directory(path, recursive)
    }
}

impl<T: FsRead + ?Sized> FsRead for Arc<T> {
    fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
        (**self).file_type(path)
    }
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        (**self).read(path)
    }
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}

impl<T: FsWrite + ?Sized> FsWrite for Arc<T> {
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        (**self).write(path, data)
    }
}

impl<T: FsDir + ?Sized> FsDir for Arc<T> {
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, FsError> {
        (**self).read_dir(path)
    }
    fn create_directory(&self, path: &Path, recursive: bool) -> Result<(), FsError> {
        (**self).create_directory(path, recursive)
    }
}
