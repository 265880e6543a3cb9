//! # Layer Trait
//!
//! Tower-style composition for filesystem backends.
//!
//! ```text
//! Backend ──▶ Layer::layer() ──▶ Wrapped Backend
//! ```
//!
//! A layer holds the wrapper's configuration and builds the wrapper around a
//! backend. [`RerootLayer`](crate::RerootLayer) is the layer for
//! [`RerootedFs`](crate::RerootedFs):
//!
//! ```rust
//! use pathfs::{FsDir, FsRead, FsWrite, LayerExt, MemoryFs, RerootLayer};
//! use std::path::Path;
//!
//! let mem = MemoryFs::new();
//! mem.create_dir_all(Path::new("/work/out")).unwrap();
//!
//! let out = mem.layer(RerootLayer::new("/work/out"));
//! out.write(Path::new("/result.txt"), b"ok").unwrap();
//! assert!(out.exists(Path::new("/result.txt")));
//! ```

use crate::Fs;

/// A layer that wraps a backend to add functionality.
///
/// # Type Parameters
///
/// - `B`: The backend type being wrapped (must implement [`Fs`])
///
/// `layer(self, backend)` consumes both the layer and the backend; the
/// resulting `Backend` type is expected to implement [`Fs`] too.
pub trait Layer<B> {
    /// The resulting backend type after applying this layer.
    type Backend;

    /// Wrap the given backend with this layer's functionality.
    fn layer(self, backend: B) -> Self::Backend;
}

/// Extension trait for fluent layer composition.
///
/// Provides the `.layer()` method on any `Fs` backend for chaining.
pub trait LayerExt: Fs + Sized {
    /// Apply a layer to this backend.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Backend {
        layer.layer(self)
    }
}

// Blanket implementation - any Fs backend gets LayerExt for free
impl<B: Fs> LayerExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileType, FsDir, FsError, FsRead, FsWrite};
    use std::path::{Path, PathBuf};

    struct Echo;

    impl FsRead for Echo {
        fn file_type(&self, _: &Path) -> Result<FileType, FsError> {
            Ok(FileType::File)
        }
        fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
            Ok(path.to_string_lossy().into_owned().into_bytes())
        }
    }

    impl FsWrite for Echo {
        fn write(&self, _: &Path, _: &[u8]) -> Result<(), FsError> {
            Ok(())
        }
    }

    impl FsDir for Echo {
        fn read_dir(&self, _: &Path) -> Result<Vec<String>, FsError> {
            Ok(vec![])
        }
        fn create_directory(&self, _: &Path, _: bool) -> Result<(), FsError> {
            Ok(())
        }
    }

    // Prefixes every path it forwards.
    struct Prefixed<B> {
        inner: B,
        prefix: PathBuf,
    }

    impl<B: FsRead> FsRead for Prefixed<B> {
        fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
            self.inner.file_type(&self.prefix.join(path))
        }
        fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
            self.inner.read(&self.prefix.join(path))
        }
    }

    struct PrefixLayer(PathBuf);

    impl<B: Fs> Layer<B> for PrefixLayer {
        type Backend = Prefixed<B>;

        fn layer(self, backend: B) -> Self::Backend {
            Prefixed {
                inner: backend,
                prefix: self.0,
            }
        }
    }

    #[test]
    fn layer_ext_is_auto_implemented() {
        fn _check<B: Fs + LayerExt>() {}
        _check::<Echo>();
    }

    #[test]
    fn layer_wraps_backend() {
        let wrapped = Echo.layer(PrefixLayer(PathBuf::from("/p")));
        assert_eq!(wrapped.read(Path::new("q")).unwrap(), b"/p/q");
    }
}
