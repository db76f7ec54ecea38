//! Directory eraser
//!
//! Validates a root path, then deletes its tree bottom-up under a best-effort
//! policy: every list and delete attempt is isolated, its failure is recorded
//! and reported, and the traversal moves on. A directory's own deletion is
//! only attempted after every child unit has finished, whether or not the
//! children were removed.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::entities::{DirectoryHandle, NodeKind};
use crate::domain::ports::{CleanReporter, ErrorDetail, FileSystem, FsError, FsResult, Listing};
use crate::domain::value_objects::{ExecutionMode, NodeError, ProbeError, ProbeReason};
use crate::error::ValidationError;

use super::notifier::Notifier;
use super::options::CleanOptions;
use super::report::{CleanReport, Tally};

/// Best-effort recursive eraser over an injected filesystem
pub struct DirectoryEraser<FS: FileSystem> {
    fs: FS,
    notifier: Notifier,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl<FS: FileSystem> DirectoryEraser<FS> {
    pub fn new(fs: FS, reporter: Arc<dyn CleanReporter>) -> Self {
        Self {
            fs,
            notifier: Notifier::new(reporter),
            pool: None,
        }
    }

    /// Run concurrent traversals on a dedicated pool instead of rayon's global one
    pub fn with_pool(mut self, pool: Arc<rayon::ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Validate `path` as a clean root.
    ///
    /// Empty and missing paths are hard failures. A root that exists but
    /// cannot be inspected is reported and yields `Ok(None)`.
    pub fn validate(&self, path: &Path) -> Result<Option<DirectoryHandle>, ValidationError> {
        Ok(self.validate_root(path)?.ok())
    }

    /// Validate `path`, then erase it.
    pub fn clean_path(
        &self,
        path: &Path,
        options: &CleanOptions,
    ) -> Result<CleanReport, ValidationError> {
        match self.validate_root(path)? {
            Ok(root) => Ok(self.clean(&root, options)),
            Err(probe) => Ok(CleanReport::aborted(path, probe)),
        }
    }

    /// Erase an already validated root. Never fails; see the report.
    pub fn clean(&self, root: &DirectoryHandle, options: &CleanOptions) -> CleanReport {
        let delete_root = !options.keep_root;
        log::debug!(
            "cleaning {} ({} mode, keep_root={})",
            root.path().display(),
            options.mode,
            options.keep_root
        );

        let tally = match options.mode {
            ExecutionMode::Sequential => self.erase_sequential(root, delete_root),
            ExecutionMode::Concurrent => match &self.pool {
                Some(pool) => pool.install(|| self.erase_concurrent(root, delete_root)),
                None => self.erase_concurrent(root, delete_root),
            },
        };

        let report = CleanReport::from_tally(root.path(), tally);
        log::debug!(
            "finished {}: {} deleted, {} failed",
            root.path().display(),
            report.deleted.len(),
            report.failures.len()
        );
        report
    }

    fn validate_root(
        &self,
        path: &Path,
    ) -> Result<Result<DirectoryHandle, ProbeError>, ValidationError> {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(self.reject(ValidationError::EmptyPath));
        }

        if !self.fs.exists(path) {
            return Err(self.reject(ValidationError::NotFound {
                path: path.to_path_buf(),
            }));
        }

        let probe = match self.fs.probe(path) {
            Ok(NodeKind::Directory) => return Ok(Ok(DirectoryHandle::directory(path))),
            Ok(NodeKind::File) => ProbeError::new(
                path,
                ProbeReason::NotADirectory,
                "exists but is not a directory",
            ),
            Err(err) => ProbeError::from_fs(&err),
        };

        self.notifier
            .error(&ErrorDetail::Probe(probe.clone()), &probe.to_string());
        Ok(Err(probe))
    }

    /// Depth-first: subdirectories, then files, then `dir` itself.
    fn erase_sequential(&self, dir: &DirectoryHandle, delete_self: bool) -> Tally {
        let (listing, mut tally) = self.list_children(dir);

        for sub in &listing.directories {
            tally.absorb(self.erase_sequential(sub, true));
        }
        for file in &listing.files {
            tally.absorb(self.delete_node(file));
        }

        if delete_self {
            tally.absorb(self.delete_node(dir));
        }
        tally
    }

    /// Fan-out: every child of `dir` runs as its own unit; all of them join
    /// before `dir` itself is attempted.
    fn erase_concurrent(&self, dir: &DirectoryHandle, delete_self: bool) -> Tally {
        let (listing, failures) = self.list_children(dir);

        let mut tally = listing
            .into_children()
            .into_par_iter()
            .map(|child| self.erase_child_concurrent(&child))
            .reduce(Tally::default, Tally::merge);
        tally.absorb(failures);

        if delete_self {
            tally.absorb(self.delete_node(dir));
        }
        tally
    }

    fn erase_child_concurrent(&self, child: &DirectoryHandle) -> Tally {
        if child.is_dir() {
            self.erase_concurrent(child, true)
        } else {
            self.delete_node(child)
        }
    }

    /// List `dir`; a failed listing is an empty one plus the failure.
    fn list_children(&self, dir: &DirectoryHandle) -> (Listing, Tally) {
        match self.isolate(dir, || self.fs.list(dir.path())) {
            Ok(mut listing) => {
                let unreadable = std::mem::take(&mut listing.unreadable);
                let failures = unreadable
                    .iter()
                    .map(|err| self.fail(dir, err))
                    .fold(Tally::default(), Tally::merge);
                (listing, failures)
            }
            Err(failed) => (Listing::default(), failed),
        }
    }

    fn delete_node(&self, node: &DirectoryHandle) -> Tally {
        let attempt = self.isolate(node, || match node.kind() {
            NodeKind::File => self.fs.remove_file(node.path()),
            NodeKind::Directory => self.fs.remove_dir(node.path()),
        });

        match attempt {
            Ok(()) => {
                self.notifier.info(&format!(
                    "Deleted {}: {}",
                    node.kind(),
                    node.path().display()
                ));
                Tally::deleted(node.clone())
            }
            Err(failed) => failed,
        }
    }

    /// Run one filesystem call for `node`. An error or a panic becomes a
    /// reported failure of that node.
    fn isolate<T>(
        &self,
        node: &DirectoryHandle,
        attempt: impl FnOnce() -> FsResult<T>,
    ) -> Result<T, Tally> {
        match panic::catch_unwind(AssertUnwindSafe(attempt)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(self.fail(node, &err)),
            Err(payload) => {
                let error = NodeError::panicked(node, panic_message(payload.as_ref()));
                self.notifier
                    .error(&ErrorDetail::Node(error.clone()), &error.to_string());
                Err(Tally::failed(error))
            }
        }
    }

    fn fail(&self, node: &DirectoryHandle, err: &FsError) -> Tally {
        let error = NodeError::from_fs(node, err);
        self.notifier
            .error(&ErrorDetail::Node(error.clone()), &error.to_string());
        Tally::failed(error)
    }

    fn reject(&self, error: ValidationError) -> ValidationError {
        self.notifier
            .error(&ErrorDetail::Validation(error.clone()), &error.to_string());
        error
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
