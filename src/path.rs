//! Lexical path helpers shared by the backends.
//!
//! Paths are treated as absolute: a relative path is taken relative to the
//! root, `.` is dropped and `..` pops one segment, stopping at the root.

use std::path::{Component, Path, PathBuf};

use crate::FsError;

/// Lexically normalize `path` into an absolute path.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut ret = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}

/// The named segments of `path` below the root, in order.
///
/// Fails with `InvalidEncoding` if a segment is not valid UTF-8.
pub(crate) fn segments(path: &Path) -> Result<Vec<String>, FsError> {
    let mut segs: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                segs.pop();
            }
            Component::Normal(c) => match c.to_str() {
                Some(name) => segs.push(name.to_owned()),
                None => return Err(FsError::invalid_encoding(path)),
            },
        }
    }
    Ok(segs)
}

/// Re-anchor `path` below `mount`: `/x/y` under `/mnt` becomes `/mnt/x/y`.
pub(crate) fn reroot(mount: &Path, path: &Path) -> PathBuf {
    let normalized = normalize(path);
    let relative = normalized.strip_prefix("/").unwrap_or(&normalized);
    if relative.as_os_str().is_empty() {
        mount.to_path_buf()
    } else {
        mount.join(relative)
    }
}
