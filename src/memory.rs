//! # In-Memory Backend
//!
//! [`MemoryFs`] keeps a strictly owned tree of nodes: the root is always a
//! directory and every other node is owned by exactly one parent directory's
//! entry map. Nothing touches the host filesystem.
//!
//! Resolution walks top-down: a path's parent is resolved first, then the
//! basename is looked up in the parent's entries. The root is the base case.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::path::segments;
use crate::{FileType, FsDir, FsError, FsRead, FsWrite};

/// A node of the virtual tree.
#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Directory(BTreeMap<String, Node>),
}

impl Node {
    fn file_type(&self) -> FileType {
        match self {
            Node::File(_) => FileType::File,
            Node::Directory(_) => FileType::Directory,
        }
    }
}

/// In-memory filesystem.
///
/// The tree sits behind a single `RwLock` and every operation holds it for its
/// whole duration, so operations are atomic with respect to each other.
/// A failed operation leaves the tree unchanged.
///
/// # Example
///
/// ```rust
/// use pathfs::{FsDir, FsErrorKind, FsWrite, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::new();
/// fs.create_dir_all(Path::new("/a/b/c")).unwrap();
/// fs.write(Path::new("/a/b/c/out.txt"), b"done").unwrap();
///
/// assert_eq!(fs.read_dir(Path::new("/a")).unwrap(), vec!["b"]);
/// let err = fs.write(Path::new("/a/b"), b"oops").unwrap_err();
/// assert_eq!(err.kind(), FsErrorKind::IsADirectory);
/// ```
#[derive(Debug)]
pub struct MemoryFs {
    root: RwLock<Node>,
}

impl MemoryFs {
    /// Create an empty filesystem holding only the root directory.
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::Directory(BTreeMap::new())),
        }
    }

    // Every mutation is all-or-nothing, so a poisoned tree is still consistent.
    fn tree(&self) -> RwLockReadGuard<'_, Node> {
        self.root.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn tree_mut(&self) -> RwLockWriteGuard<'_, Node> {
        self.root.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryFs {
    /// Deep-copies the current tree into an independent filesystem.
    fn clone(&self) -> Self {
        Self {
            root: RwLock::new(self.tree().clone()),
        }
    }
}

/// Resolve `segs` below `root`; `Ok(None)` if the final node is absent.
///
/// `target` is the caller's path, used for error reporting.
fn node<'a>(root: &'a Node, segs: &[String], target: &Path) -> Result<Option<&'a Node>, FsError> {
    let Some((name, parent)) = segs.split_last() else {
        return Ok(Some(root));
    };
    match node(root, parent, target)? {
        None => Ok(None),
        Some(Node::Directory(entries)) => Ok(entries.get(name)),
        Some(Node::File(_)) => Err(FsError::not_a_directory(target)),
    }
}

fn node_mut<'a>(
    root: &'a mut Node,
    segs: &[String],
    target: &Path,
) -> Result<Option<&'a mut Node>, FsError> {
    let Some((name, parent)) = segs.split_last() else {
        return Ok(Some(root));
    };
    match node_mut(root, parent, target)? {
        None => Ok(None),
        Some(Node::Directory(entries)) => Ok(entries.get_mut(name)),
        Some(Node::File(_)) => Err(FsError::not_a_directory(target)),
    }
}

fn create_dir_at(
    root: &mut Node,
    segs: &[String],
    recursive: bool,
    target: &Path,
) -> Result<(), FsError> {
    // The root always exists as a directory.
    let Some((name, parent)) = segs.split_last() else {
        return Ok(());
    };
    match node_mut(root, parent, target)? {
        Some(Node::Directory(entries)) => {
            return match entries.get(name) {
                Some(Node::Directory(_)) => Ok(()),
                Some(Node::File(_)) => Err(FsError::not_a_directory(target)),
                None => {
                    entries.insert(name.clone(), Node::Directory(BTreeMap::new()));
                    Ok(())
                }
            };
        }
        Some(Node::File(_)) => return Err(FsError::not_a_directory(target)),
        None => {}
    }
    if !recursive {
        return Err(FsError::not_found(target));
    }
    trace!(path = %target.display(), depth = parent.len(), "creating missing ancestor");
    create_dir_at(root, parent, true, target)?;
    create_dir_at(root, segs, false, target)
}

impl FsRead for MemoryFs {
    fn file_type(&self, path: &Path) -> Result<FileType, FsError> {
        let segs = segments(path)?;
        let tree = self.tree();
        node(&tree, &segs, path)?
            .map(Node::file_type)
            .ok_or_else(|| FsError::not_found(path))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let segs = segments(path)?;
        let tree = self.tree();
        match node(&tree, &segs, path)? {
            Some(Node::File(data)) => Ok(data.clone()),
            Some(Node::Directory(_)) => Err(FsError::is_a_directory(path)),
            None => Err(FsError::not_found(path)),
        }
    }
}

impl FsWrite for MemoryFs {
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        let segs = segments(path)?;
        let Some((name, parent)) = segs.split_last() else {
            return Err(FsError::is_a_directory(path));
        };
        let mut tree = self.tree_mut();
        let entries = match node_mut(&mut tree, parent, path)? {
            Some(Node::Directory(entries)) => entries,
            Some(Node::File(_)) => return Err(FsError::not_a_directory(path)),
            None => return Err(FsError::not_found(path)),
        };
        match entries.get_mut(name) {
            Some(Node::Directory(_)) => return Err(FsError::is_a_directory(path)),
            Some(Node::File(content)) => *content = data.to_vec(),
            None => {
                entries.insert(name.clone(), Node::File(data.to_vec()));
            }
        }
        debug!(path = %path.display(), len = data.len(), "wrote file");
        Ok(())
    }
}

impl FsDir for MemoryFs {
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, FsError> {
        let segs = segments(path)?;
        let tree = self.tree();
        match node(&tree, &segs, path)? {
            Some(Node::Directory(entries)) => Ok(entries.keys().cloned().collect()),
            Some(Node::File(_)) => Err(FsError::not_a_directory(path)),
            None => Err(FsError::not_found(path)),
        }
    }

    fn create_directory(&self, path: &Path, recursive: bool) -> Result<(), FsError> {
        let segs = segments(path)?;
        let mut tree = self.tree_mut();
        create_dir_at(&mut tree, &segs, recursive, path)?;
        debug!(path = %path.display(), recursive, "created directory");
        Ok(())
    }
}
