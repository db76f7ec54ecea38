//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::path::Path;

use crate::domain::entities::{DirectoryHandle, NodeKind};
use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, Listing};

/// Local file system implementation
///
/// Listings never follow symlinks: a link to a directory is reported as a
/// file node and unlinked, so traversal cannot leave the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn probe(&self, path: &Path) -> FsResult<NodeKind> {
        let metadata = fs::metadata(path).map_err(|e| FsError::new(path, e))?;
        if metadata.is_dir() {
            // Opening the directory surfaces access problems before traversal.
            fs::read_dir(path).map_err(|e| FsError::new(path, e))?;
            Ok(NodeKind::Directory)
        } else {
            Ok(NodeKind::File)
        }
    }

    fn list(&self, dir: &Path) -> FsResult<Listing> {
        let mut listing = Listing::default();

        for entry in fs::read_dir(dir).map_err(|e| FsError::new(dir, e))? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    listing.unreadable.push(FsError::new(dir, e));
                    continue;
                }
            };
            // Unknown type: the file delete attempt reports what is wrong.
            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => {
                    listing.directories.push(DirectoryHandle::directory(entry.path()))
                }
                _ => listing.files.push(DirectoryHandle::file(entry.path())),
            }
        }

        listing.directories.sort_by(|a, b| a.path().cmp(b.path()));
        listing.files.sort_by(|a, b| a.path().cmp(b.path()));
        Ok(listing)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::new(path, e))
    }

    fn remove_dir(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir(path).map_err(|e| FsError::new(path, e))
    }
}
