//! # Local Backend
//!
//! [`LocalFs`] delegates every operation to the host filesystem and maps host
//! errors onto [`FsErrorKind`](crate::FsErrorKind) with
//! [`FsError::from_io`]. Its directory-creation policy matches
//! [`MemoryFs`](crate::MemoryFs), so callers see the same results from both.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::{FileType, FsDir, FsError, FsRead, FsWrite};

/// Filesystem backed by the host operating system.
///
/// Paths are passed to the OS unchanged. File handles are owned by the call
/// that opens them and closed when it returns, on every path.
///
/// # Example
///
/// ```rust
/// use pathfs::{FsDir, FsRead, FsWrite, LocalFs};
///
/// let dir = std::env::temp_dir().join("pathfs-local-doc");
/// let fs = LocalFs::new();
/// fs.create_dir_all(&dir).unwrap();
/// fs.write(&dir.join("hello.txt"), b"hello").unwrap();
/// assert_eq!(fs.read(&dir.join("hello.txt")).unwrap(), b"hello");
/// # std::fs::remove_dir_all(&dir).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFs {
    chunk_size: usize,
}

impl LocalFs {
    /// Bytes requested from the OS per read call unless configured otherwise.
    pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

    /// Create a backend with the default read chunk size.
    pub const fn new() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }

    /// Use `chunk_size` bytes per read call. Zero is treated as one.
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = if chunk_size == 0 { 1 } else { chunk_size };
        self
    }

    /// The configured read chunk size.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn is_root(path: &Path) -> bool {
        path.parent().is_none() && path.has_root()
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

static LOCAL: LocalFs = LocalFs::new();

/// The process-wide local backend.
///
/// A plain `static` built at compile time; there is nothing to initialize.
pub fn local() -> &'static LocalFs {
    &LOCAL
}

/// The default capability for callers with no reason to inject another backend.
pub fn default_fs() -> &'static dyn crate::Fs {
    &LOCAL
}

impl FsRead for LocalFs {
    fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
        fs::metadata(path)
            .map(|meta| meta.file_type().into())
            .map_err(|e| FsError::from_io(e, "stat", path))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let mut file = File::open(path).map_err(|e| FsError::from_io(e, "open", path))?;
        // Opening a directory succeeds on some hosts.
        let meta = file.metadata().map_err(|e| FsError::from_io(e, "stat", path))?;
        if meta.is_dir() {
            return Err(FsError::is_a_directory(path));
        }

        read_chunked(&mut file, self.chunk_size, path)
    }
}

impl FsWrite for LocalFs {
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        if Self::is_root(path) {
            return Err(FsError::is_a_directory(path));
        }
        let mut file = File::create(path).map_err(|e| FsError::from_io(e, "open", path))?;
        write_whole(&mut file, data, path)?;
        debug!(path = %path.display(), len = data.len(), "wrote file");
        Ok(())
    }
}

/// Drain `reader` in `chunk_size` pieces, retrying reads the host interrupted.
fn read_chunked<R: Read>(reader: &mut R, chunk_size: usize, path: &Path) -> Result<Vec<u8>, FsError> {
    let mut data = Vec::new();
    let mut chunk = vec![0u8; chunk_size];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(data),
            Ok(n) => data.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                trace!(path = %path.display(), "read interrupted, retrying");
            }
            Err(e) => return Err(FsError::io(e, "read", path)),
        }
    }
}

/// Hand all of `data` to `writer` in one call. Accepting fewer bytes is an error.
fn write_whole<W: Write>(writer: &mut W, data: &[u8], path: &Path) -> Result<(), FsError> {
    loop {
        match writer.write(data) {
            Ok(n) if n == data.len() => return Ok(()),
            Ok(n) => {
                let short = io::Error::new(
                    io::ErrorKind::WriteZero,
                    format!("wrote {n} of {} bytes", data.len()),
                );
                return Err(FsError::io(short, "write", path));
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                trace!(path = %path.display(), "write interrupted, retrying");
            }
            Err(e) => return Err(FsError::io(e, "write", path)),
        }
    }
}

impl FsDir for LocalFs {
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, FsError> {
        let entries = fs::read_dir(path).map_err(|e| FsError::from_io(e, "read_dir", path))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(e, "read_dir", path))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| FsError::invalid_encoding(entry.path()))?;
            if name != "." && name != ".." {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn create_directory(&self, path: &Path, recursive: bool) -> Result<(), FsError> {
        let err = match fs::create_dir(path) {
            Ok(()) => {
                debug!(path = %path.display(), recursive, "created directory");
                return Ok(());
            }
            Err(e) => e,
        };
        match err.kind() {
            io::ErrorKind::AlreadyExists => {
                let meta = fs::metadata(path).map_err(|e| FsError::from_io(e, "stat", path))?;
                if meta.is_dir() {
                    Ok(())
                } else {
                    Err(FsError::not_a_directory(path))
                }
            }
            io::ErrorKind::NotFound if recursive => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    trace!(path = %path.display(), "creating missing ancestor");
                    self.create_directory(parent, true)?;
                    self.create_directory(path, false)
                }
                _ => Err(FsError::from_io(err, "create_dir", path)),
            },
            _ => Err(FsError::from_io(err, "create_dir", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FsErrorKind;

    #[test]
    fn global_is_default_configured() {
        assert_eq!(*local(), LocalFs::new());
        assert_eq!(local().chunk_size(), LocalFs::DEFAULT_CHUNK_SIZE);
        assert!(default_fs().is_dir(Path::new("/")));
    }

    #[test]
    fn zero_chunk_size_is_clamped() {
        assert_eq!(LocalFs::new().with_chunk_size(0).chunk_size(), 1);
    }

    #[test]
    fn small_chunks_read_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        let data: Vec<u8> = (0..=255).cycle().take(1000).collect();
        std::fs::write(&file, &data).unwrap();
        let fs = LocalFs::new().with_chunk_size(7);
        assert_eq!(fs.read(&file).unwrap(), data);
    }

    #[test]
    fn read_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = local().read(dir.path()).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::IsADirectory);
    }

    #[test]
    fn write_root_fails() {
        let err = local().write(Path::new("/"), b"x").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::IsADirectory);
    }

    #[test]
    fn recursive_create_builds_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("a/b/c");
        local().create_dir_all(&deep).unwrap();
        assert!(deep.is_dir());
        assert_eq!(local().read_dir(&dir.path().join("a")).unwrap(), vec!["b"]);
    }

    #[test]
    fn create_over_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();
        let err = local().create_dir(&file).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotADirectory);
    }

    /// Reader that fails with `first` once, then serves `data`.
    struct Hiccup {
        first: Option<io::ErrorKind>,
        data: io::Cursor<Vec<u8>>,
    }

    impl Read for Hiccup {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.first.take() {
                Some(kind) => Err(io::Error::from(kind)),
                None => self.data.read(buf),
            }
        }
    }

    /// Writer that accepts at most `limit` bytes per call.
    struct Capped {
        limit: usize,
        interrupt_once: bool,
        written: Vec<u8>,
    }

    impl Write for Capped {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if std::mem::take(&mut self.interrupt_once) {
                return Err(io::ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(self.limit);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn interrupted_read_is_retried() {
        let mut reader = Hiccup {
            first: Some(io::ErrorKind::Interrupted),
            data: io::Cursor::new(b"after the signal".to_vec()),
        };
        let data = read_chunked(&mut reader, 4, Path::new("/f")).unwrap();
        assert_eq!(data, b"after the signal");
    }

    #[test]
    fn failed_read_is_io() {
        let mut reader = Hiccup {
            first: Some(io::ErrorKind::UnexpectedEof),
            data: io::Cursor::new(b"unreachable".to_vec()),
        };
        let err = read_chunked(&mut reader, 4, Path::new("/f")).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::Io);
        assert_eq!(err.path(), Path::new("/f"));
    }

    #[test]
    fn short_write_is_io() {
        let mut writer = Capped {
            limit: 3,
            interrupt_once: false,
            written: Vec::new(),
        };
        let err = write_whole(&mut writer, b"truncated", Path::new("/out")).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::Io);
        assert_eq!(err.to_string(), "write failed for /out: wrote 3 of 9 bytes");
    }

    #[test]
    fn interrupted_write_is_retried() {
        let mut writer = Capped {
            limit: usize::MAX,
            interrupt_once: true,
            written: Vec::new(),
        };
        write_whole(&mut writer, b"payload", Path::new("/out")).unwrap();
        assert_eq!(writer.written, b"payload");
    }

    #[test]
    fn empty_write_succeeds() {
        let mut writer = Capped {
            limit: 0,
            interrupt_once: false,
            written: Vec::new(),
        };
        write_whole(&mut writer, b"", Path::new("/out")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn create_over_dangling_symlink_reports_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();
        let err = local().create_dir(&link).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn read_dir_rejects_undecodable_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"bad\xff");
        // Some filesystems refuse such names outright.
        if std::fs::write(dir.path().join(name), b"").is_err() {
            return;
        }
        let err = local().read_dir(dir.path()).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::InvalidEncoding);
    }
}
