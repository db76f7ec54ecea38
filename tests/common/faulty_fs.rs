//! Fault-injecting filesystem
//!
//! Wraps `LocalFs` and fails removals or listings of selected paths. Running as root
//! bypasses permission bits, so real chmod-based tests cannot produce a
//! denied delete reliably.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use scratchwipe::domain::ports::{FileSystem, FsError, FsResult, Listing};
use scratchwipe::{LocalFs, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Removal fails with `PermissionDenied`
    Deny,
    /// Removal fails with `ResourceBusy`
    Busy,
    /// Removal panics
    Panic,
    /// Listing the directory fails with `PermissionDenied`
    DenyListing,
    /// Listing the directory panics
    PanicListing,
    /// Listing succeeds but one entry of the directory could not be read
    UnreadableEntry,
}

#[derive(Debug, Default)]
pub struct FaultyFs {
    inner: LocalFs,
    faults: HashMap<PathBuf, Fault>,
}

impl FaultyFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fault(mut self, path: impl AsRef<Path>, fault: Fault) -> Self {
        self.faults.insert(path.as_ref().to_path_buf(), fault);
        self
    }

    pub fn deny(self, path: impl AsRef<Path>) -> Self {
        self.with_fault(path, Fault::Deny)
    }

    pub fn busy(self, path: impl AsRef<Path>) -> Self {
        self.with_fault(path, Fault::Busy)
    }

    pub fn panic_on(self, path: impl AsRef<Path>) -> Self {
        self.with_fault(path, Fault::Panic)
    }

    pub fn deny_listing(self, path: impl AsRef<Path>) -> Self {
        self.with_fault(path, Fault::DenyListing)
    }

    pub fn panic_on_listing(self, path: impl AsRef<Path>) -> Self {
        self.with_fault(path, Fault::PanicListing)
    }

    pub fn unreadable_entry(self, path: impl AsRef<Path>) -> Self {
        self.with_fault(path, Fault::UnreadableEntry)
    }

    fn check_removal(&self, path: &Path) -> FsResult<()> {
        match self.faults.get(path) {
            Some(Fault::Deny) => Err(FsError::new(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "injected permission denied"),
            )),
            Some(Fault::Busy) => Err(FsError::new(
                path,
                io::Error::new(io::ErrorKind::ResourceBusy, "injected resource busy"),
            )),
            Some(Fault::Panic) => panic!("injected panic at {}", path.display()),
            Some(Fault::DenyListing | Fault::PanicListing | Fault::UnreadableEntry) | None => {
                Ok(())
            }
        }
    }
}

impl FileSystem for FaultyFs {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn probe(&self, path: &Path) -> FsResult<NodeKind> {
        self.inner.probe(path)
    }

    fn list(&self, dir: &Path) -> FsResult<Listing> {
        match self.faults.get(dir) {
            Some(Fault::DenyListing) => Err(FsError::new(
                dir,
                io::Error::new(io::ErrorKind::PermissionDenied, "injected listing denied"),
            )),
            Some(Fault::PanicListing) => panic!("injected listing panic at {}", dir.display()),
            Some(Fault::UnreadableEntry) => {
                let mut listing = self.inner.list(dir)?;
                listing.unreadable.push(FsError::new(
                    dir,
                    io::Error::new(io::ErrorKind::InvalidData, "injected unreadable entry"),
                ));
                Ok(listing)
            }
            _ => self.inner.list(dir),
        }
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        self.check_removal(path)?;
        self.inner.remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> FsResult<()> {
        self.check_removal(path)?;
        self.inner.remove_dir(path)
    }
}
