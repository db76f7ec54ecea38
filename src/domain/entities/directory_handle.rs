//! Directory handle entity
//!
//! A handle is a snapshot taken when a parent directory is listed. It carries
//! no identity beyond its path and is never reused once its deletion has been
//! attempted; a later listing of the same directory yields new handles.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of filesystem node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Anything that is not a directory (regular files, symlinks, sockets)
    File,
    /// A real directory (never a symlink to one)
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Directory => write!(f, "directory"),
        }
    }
}

/// Reference to a node encountered during traversal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryHandle {
    path: PathBuf,
    kind: NodeKind,
}

impl DirectoryHandle {
    pub fn new(path: impl Into<PathBuf>, kind: NodeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Handle to a file node
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, NodeKind::File)
    }

    /// Handle to a directory node
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, NodeKind::Directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}
