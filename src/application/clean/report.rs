//! Clean report types

use std::path::{Path, PathBuf};

use crate::domain::entities::{DirectoryHandle, NodeKind};
use crate::domain::value_objects::{NodeError, ProbeError};

/// Outcome accumulated by one branch of the traversal.
///
/// Branches are merged at every join point; only the top of the traversal
/// turns the tally into a [`CleanReport`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Tally {
    pub(crate) deleted: Vec<DirectoryHandle>,
    pub(crate) failures: Vec<NodeError>,
}

impl Tally {
    pub(crate) fn deleted(node: DirectoryHandle) -> Self {
        Self {
            deleted: vec![node],
            failures: Vec::new(),
        }
    }

    pub(crate) fn failed(error: NodeError) -> Self {
        Self {
            deleted: Vec::new(),
            failures: vec![error],
        }
    }

    pub(crate) fn merge(mut self, other: Tally) -> Self {
        self.absorb(other);
        self
    }

    pub(crate) fn absorb(&mut self, other: Tally) {
        self.deleted.extend(other.deleted);
        self.failures.extend(other.failures);
    }
}

/// Result of one clean invocation
///
/// Best-effort: the report lists what was deleted and what failed. It is
/// the caller's decision whether partial failure is fatal
/// (see [`CleanReport::into_result`]).
#[derive(Debug, Clone)]
pub struct CleanReport {
    root: PathBuf,
    /// Nodes that were deleted, in completion order
    pub deleted: Vec<DirectoryHandle>,
    /// Nodes that could not be deleted
    pub failures: Vec<NodeError>,
    /// Set when the root could not be inspected and nothing was attempted
    pub aborted: Option<ProbeError>,
}

impl CleanReport {
    pub(crate) fn from_tally(root: &Path, tally: Tally) -> Self {
        Self {
            root: root.to_path_buf(),
            deleted: tally.deleted,
            failures: tally.failures,
            aborted: None,
        }
    }

    pub(crate) fn aborted(root: &Path, error: ProbeError) -> Self {
        Self {
            root: root.to_path_buf(),
            deleted: Vec::new(),
            failures: Vec::new(),
            aborted: Some(error),
        }
    }

    /// Root directory this report is about
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn deleted_files(&self) -> usize {
        self.count_deleted(NodeKind::File)
    }

    pub fn deleted_directories(&self) -> usize {
        self.count_deleted(NodeKind::Directory)
    }

    /// Whether the root itself was removed
    pub fn root_removed(&self) -> bool {
        self.deleted
            .iter()
            .any(|node| node.is_dir() && node.path() == self.root)
    }

    /// Whether every attempt succeeded and the run was not aborted
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.aborted.is_none()
    }

    /// Turn partial failure into an error
    pub fn into_result(self) -> Result<CleanReport, PartialFailure> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PartialFailure {
                root: self.root,
                failures: self.failures,
                aborted: self.aborted,
            })
        }
    }

    fn count_deleted(&self, kind: NodeKind) -> usize {
        self.deleted.iter().filter(|node| node.kind() == kind).count()
    }
}

/// A clean that did not remove everything it attempted
#[derive(Debug, Clone)]
pub struct PartialFailure {
    pub root: PathBuf,
    pub failures: Vec<NodeError>,
    pub aborted: Option<ProbeError>,
}

impl std::fmt::Display for PartialFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} could not be fully cleaned: {} node(s) failed",
            self.root.display(),
            self.failures.len()
        )?;
        if self.aborted.is_some() {
            write!(f, ", root was not accessible")?;
        }
        Ok(())
    }
}

impl std::error::Error for PartialFailure {}
