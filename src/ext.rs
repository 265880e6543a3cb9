//! # Extension Traits
//!
//! Convenience methods built on the core traits. Every [`Fs`] backend gets
//! them through blanket implementations.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`read_to_string`](FsExt::read_to_string) | Read a whole file as UTF-8 |
//! | [`write_str`](FsExt::write_str) | Write a string as a whole file |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature enabled, `FsExtJson` adds `read_json` and
//! `write_json`:
//!
//! ```toml
//! [dependencies]
//! pathfs = { version = "0.1", features = ["serde"] }
//! ```

use crate::{Fs, FsError};
use std::path::Path;

/// Extension methods for any filesystem backend.
///
/// # Example
///
/// ```rust
/// use pathfs::{Fs, FsExt, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::new();
/// fs.write_str(Path::new("/notes.txt"), "remember the milk").unwrap();
/// assert_eq!(fs.read_to_string(Path::new("/notes.txt")).unwrap(), "remember the milk");
/// ```
pub trait FsExt: Fs {
    /// Read a whole file and decode it as UTF-8.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidEncoding`] if the content is not valid UTF-8
    /// - anything [`read`](crate::FsRead::read) reports
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|_| FsError::invalid_encoding(path))
    }

    /// Write `text` as the whole content of `path`.
    fn write_str(&self, path: &Path, text: &str) -> Result<(), FsError> {
        self.write(path, text.as_bytes())
    }
}

// Blanket implementation - any Fs backend gets FsExt for free
impl<B: Fs + ?Sized> FsExt for B {}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::{Serialize, de::DeserializeOwned};

    /// Failure of a JSON read or write.
    #[derive(Debug, thiserror::Error)]
    pub enum JsonError {
        /// The filesystem operation failed.
        #[error(transparent)]
        Fs(#[from] FsError),
        /// The value could not be (de)serialized.
        #[error("json error in {path}: {source}")]
        Json {
            /// The file being read or written.
            path: std::path::PathBuf,
            /// The serde_json failure.
            #[source]
            source: serde_json::Error,
        },
    }

    /// JSON serialization extension methods.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait FsExtJson: Fs {
        /// Read a file and deserialize it as JSON.
        fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, JsonError> {
            let data = self.read_to_string(path)?;
            serde_json::from_str(&data).map_err(|source| JsonError::Json {
                path: path.to_path_buf(),
                source,
            })
        }

        /// Serialize a value and write it as pretty-printed JSON.
        fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), JsonError> {
            let json = serde_json::to_string_pretty(value).map_err(|source| JsonError::Json {
                path: path.to_path_buf(),
                source,
            })?;
            self.write(path, json.as_bytes())?;
            Ok(())
        }
    }

    // Blanket implementation
    impl<B: Fs + ?Sized> FsExtJson for B {}
}

#[cfg(feature = "serde")]
pub use json::{FsExtJson, JsonError};
