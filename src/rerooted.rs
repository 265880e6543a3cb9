//! # Rerooted View
//!
//! [`RerootedFs`] presents a subtree of another backend as if it were the
//! whole filesystem. Every incoming path is re-anchored below a fixed mount
//! root and forwarded; results and errors come back unchanged.
//!
//! This is a rename, not a sandbox. The view performs no containment checks,
//! so a wrapped backend that can traverse past the mount root (for example
//! through host symlinks) will expose whatever it reaches.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::path::reroot;
use crate::{FileType, Fs, FsDir, FsError, FsRead, FsWrite, Layer};

/// A view of `inner` rooted at `root`.
///
/// `/x/y` on the view is `root/x/y` on the wrapped backend.
///
/// # Example
///
/// ```rust
/// use pathfs::{FsDir, FsRead, FsWrite, MemoryFs, RerootedFs};
/// use std::path::Path;
///
/// let mem = MemoryFs::new();
/// mem.create_dir_all(Path::new("/srv/site")).unwrap();
///
/// let site = RerootedFs::new(mem, "/srv/site");
/// site.write(Path::new("/index.html"), b"<p>hi</p>").unwrap();
/// assert!(site.inner().is_file(Path::new("/srv/site/index.html")));
/// ```
pub struct RerootedFs {
    inner: Box<dyn Fs>,
    root: PathBuf,
}

impl RerootedFs {
    /// Wrap `inner`, mounting its `root` as the view's `/`.
    pub fn new(inner: impl Fs + 'static, root: impl Into<PathBuf>) -> Self {
        Self::from_boxed(Box::new(inner), root)
    }

    /// Wrap an already boxed backend.
    pub fn from_boxed(inner: Box<dyn Fs>, root: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            root: root.into(),
        }
    }

    /// The mount root on the wrapped backend.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The wrapped backend.
    pub fn inner(&self) -> &dyn Fs {
        self.inner.as_ref()
    }

    /// The wrapped backend's path for `path` on this view.
    pub fn translate(&self, path: &Path) -> PathBuf {
        let translated = reroot(&self.root, path);
        trace!(from = %path.display(), to = %translated.display(), "rerooted path");
        translated
    }
}

impl std::fmt::Debug for RerootedFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RerootedFs")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl FsRead for RerootedFs {
    fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
        self.inner.file_type(&self.translate(path))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        self.inner.read(&self.translate(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(&self.translate(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(&self.translate(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(&self.translate(path))
    }
}

impl FsWrite for RerootedFs {
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        self.inner.write(&self.translate(path), data)
    }
}

impl FsDir for RerootedFs {
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, FsError> {
        self.inner.read_dir(&self.translate(path))
    }

    fn create_directory(&self, path: &Path, recursive: bool) -> Result<(), FsError> {
        self.inner.create_directory(&self.translate(path), recursive)
    }
}

/// [`Layer`] that wraps a backend in a [`RerootedFs`].
///
/// ```rust
/// use pathfs::{FsDir, LayerExt, MemoryFs, RerootLayer};
/// use std::path::Path;
///
/// let mem = MemoryFs::new();
/// mem.create_dir(Path::new("/mnt")).unwrap();
/// let view = mem.layer(RerootLayer::new("/mnt"));
/// assert_eq!(view.root(), Path::new("/mnt"));
/// ```
#[derive(Debug, Clone)]
pub struct RerootLayer {
    root: PathBuf,
}

impl RerootLayer {
    /// A layer mounting the wrapped backend's `root` as `/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl<B: Fs + 'static> Layer<B> for RerootLayer {
    type Backend = RerootedFs;

    fn layer(self, backend: B) -> Self::Backend {
        RerootedFs::new(backend, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FsErrorKind, LayerExt, MemoryFs};
    use std::sync::Arc;

    fn mounted() -> (Arc<MemoryFs>, RerootedFs) {
        let mem = Arc::new(MemoryFs::new());
        mem.create_dir(Path::new("/mnt")).unwrap();
        let view = RerootedFs::new(Arc::clone(&mem), "/mnt");
        (mem, view)
    }

    #[test]
    fn translate_anchors_below_root() {
        let (_, view) = mounted();
        assert_eq!(view.translate(Path::new("/")), PathBuf::from("/mnt"));
        assert_eq!(view.translate(Path::new("/x/y")), PathBuf::from("/mnt/x/y"));
    }

    #[test]
    fn writes_land_below_mount() {
        let (mem, view) = mounted();
        view.create_dir_all(Path::new("/x")).unwrap();
        view.write(Path::new("/x/y"), b"data").unwrap();
        assert_eq!(mem.read(Path::new("/mnt/x/y")).unwrap(), b"data");
        assert_eq!(view.read(Path::new("/x/y")).unwrap(), b"data");
        assert_eq!(view.read_dir(Path::new("/")).unwrap(), vec!["x"]);
    }

    #[test]
    fn view_root_is_mount_directory() {
        let (_, view) = mounted();
        assert!(view.is_dir(Path::new("/")));
        let err = view.write(Path::new("/"), b"x").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::IsADirectory);
    }

    #[test]
    fn errors_pass_through() {
        let (_, view) = mounted();
        let err = view.read(Path::new("/missing")).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotFound);
        assert_eq!(err.path(), Path::new("/mnt/missing"));
    }

    #[test]
    fn missing_mount_root_reports_not_found() {
        let view = RerootedFs::new(MemoryFs::new(), "/nowhere");
        assert!(!view.exists(Path::new("/")));
        let err = view.read_dir(Path::new("/")).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotFound);
    }

    #[test]
    fn views_nest() {
        let mem = MemoryFs::new();
        mem.create_dir_all(Path::new("/a/b")).unwrap();
        let view = mem
            .layer(RerootLayer::new("/a"))
            .layer(RerootLayer::new("/b"));
        view.write(Path::new("/f"), b"x").unwrap();
        assert!(view.inner().is_file(Path::new("/b/f")));
    }

    #[test]
    fn debug_shows_root() {
        let (_, view) = mounted();
        assert!(format!("{view:?}").contains("/mnt"));
    }
}
