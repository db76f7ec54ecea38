//! FileSystem port - the operations the eraser needs from a disk
//!
//! The eraser never calls `std::fs` directly, so tests can substitute a
//! filesystem that refuses chosen paths.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{DirectoryHandle, NodeKind};
use crate::domain::value_objects::FailureKind;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// An IO failure tied to the path it happened on
#[derive(Error, Debug)]
#[error("{}: {source}", .path.display())]
pub struct FsError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FsError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    pub fn failure(&self) -> FailureKind {
        FailureKind::classify(self.kind())
    }
}

/// Immediate children of one directory, split by kind.
///
/// A listing is a snapshot; it is never refreshed after deletions begin.
/// Entries that could not be read are kept in `unreadable` so the rest of
/// the directory is still traversed.
#[derive(Debug, Default)]
pub struct Listing {
    pub directories: Vec<DirectoryHandle>,
    pub files: Vec<DirectoryHandle>,
    pub unreadable: Vec<FsError>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// All children, subdirectories first
    pub fn into_children(self) -> Vec<DirectoryHandle> {
        let mut children = self.directories;
        children.extend(self.files);
        children
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that inject failures for chosen paths
pub trait FileSystem: Send + Sync {
    /// Check if the path exists (following symlinks)
    fn exists(&self, path: &Path) -> bool;

    /// Inspect what kind of node lives at `path`
    fn probe(&self, path: &Path) -> FsResult<NodeKind>;

    /// List immediate children without following symlinks
    fn list(&self, dir: &Path) -> FsResult<Listing>;

    /// Remove a single non-directory node
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove an empty directory
    fn remove_dir(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn probe(&self, path: &Path) -> FsResult<NodeKind> {
        (**self).probe(path)
    }

    fn list(&self, dir: &Path) -> FsResult<Listing> {
        (**self).list(dir)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        (**self).remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display_includes_path() {
        let err = FsError::new(
            "/scratch/a.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "/scratch/a.txt: denied");
        assert_eq!(err.failure(), FailureKind::PermissionDenied);
    }

    #[test]
    fn listing_children_put_directories_first() {
        let listing = Listing {
            directories: vec![DirectoryHandle::directory("/s/d")],
            files: vec![DirectoryHandle::file("/s/f")],
            ..Listing::default()
        };
        assert_eq!(listing.len(), 2);
        let children = listing.into_children();
        assert!(children[0].is_dir());
        assert!(!children[1].is_dir());
    }
}
