//! # pathfs
//!
//! A swappable filesystem capability. Callers hold an [`Fs`] and perform
//! existence checks, directory listing, directory creation, and whole-file
//! reads and writes without knowing which backend sits behind it.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use pathfs::{Fs, FsError, MemoryFs};
//! use std::path::Path;
//!
//! // Generic function that works with any backend
//! fn emit<B: Fs + ?Sized>(fs: &B) -> Result<(), FsError> {
//!     fs.create_dir_all(Path::new("/build/out"))?;
//!     fs.write(Path::new("/build/out/app.txt"), b"linked")?;
//!     for name in fs.read_dir(Path::new("/build"))? {
//!         println!("{name}");
//!     }
//!     Ok(())
//! }
//!
//! emit(&MemoryFs::new()).unwrap();
//! ```
//!
//! ---
//!
//! ## Backends
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`LocalFs`] | The host filesystem; [`local()`] is the process-wide instance |
//! | [`MemoryFs`] | A directory tree held in memory, no OS involvement |
//! | [`RerootedFs`] | Any other backend seen through a fixed mount root |
//!
//! All three report the same [`FsErrorKind`] for the same situation, so
//! tests can swap a [`MemoryFs`] in where production code uses [`LocalFs`].
//!
//! ---
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, FsError>`. [`FsError::kind`] gives
//! the closed [`FsErrorKind`] for backend-agnostic matching:
//!
//! ```rust
//! use pathfs::{FsErrorKind, FsRead, MemoryFs};
//! use std::path::Path;
//!
//! let fs = MemoryFs::new();
//! let err = fs.read(Path::new("/missing.txt")).unwrap_err();
//! assert_eq!(err.kind(), FsErrorKind::NotFound);
//! assert_eq!(err.to_string(), "not found: /missing.txt");
//! ```
//!
//! `exists`, `is_dir` and `is_file` never fail; any error reads as `false`.
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`. [`MemoryFs`] guards its
//! tree with a single lock held for each whole operation.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`FileType`] and [`FsErrorKind`]; JSON helpers on `FsExtJson` |

mod error;
mod ext;
mod layer;
mod local;
mod memory;
mod path;
mod rerooted;
mod traits;
mod types;

pub use error::{FsError, FsErrorKind};
pub use types::FileType;

pub use traits::{Fs, FsDir, FsRead, FsWrite};

pub use local::{LocalFs, default_fs, local};
pub use memory::MemoryFs;
pub use rerooted::{RerootLayer, RerootedFs};

pub use ext::FsExt;
pub use layer::{Layer, LayerExt};

#[cfg(feature = "serde")]
pub use ext::{FsExtJson, JsonError};
