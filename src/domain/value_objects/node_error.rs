//! Per-node failures
//!
//! `NodeError` is a soft failure of one delete (or listing) attempt.
//! `ProbeError` is the non-fatal failure to inspect the root before traversal;
//! it aborts the clean early without raising.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{DirectoryHandle, NodeKind};
use crate::domain::ports::FsError;

use super::FailureKind;

/// A delete attempt that failed for one node.
///
/// Display renders the reported failure message, e.g.
/// `No permission to delete file: /tmp/x/a.txt - Permission denied (os error 13)`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{} deleting {}: {} - {}", .failure.describe(), .kind, .path.display(), .detail)]
pub struct NodeError {
    pub path: PathBuf,
    pub kind: NodeKind,
    pub failure: FailureKind,
    pub detail: String,
}

impl NodeError {
    pub fn new(
        node: &DirectoryHandle,
        failure: FailureKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            path: node.path().to_path_buf(),
            kind: node.kind(),
            failure,
            detail: detail.into(),
        }
    }

    /// Classify a filesystem error raised while handling `node`
    pub fn from_fs(node: &DirectoryHandle, err: &FsError) -> Self {
        Self::new(node, err.failure(), err.source.to_string())
    }

    /// A worker unit for `node` panicked instead of returning
    pub fn panicked(node: &DirectoryHandle, message: impl Into<String>) -> Self {
        Self::new(node, FailureKind::Unknown, message)
    }
}

/// Why the root could not be inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeReason {
    NotADirectory,
    PermissionDenied,
    InvalidPath,
    Other,
}

impl ProbeReason {
    pub fn classify(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::PermissionDenied => ProbeReason::PermissionDenied,
            io::ErrorKind::NotADirectory => ProbeReason::NotADirectory,
            io::ErrorKind::InvalidInput => ProbeReason::InvalidPath,
            _ => ProbeReason::Other,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ProbeReason::NotADirectory => "Path is not a directory",
            ProbeReason::PermissionDenied => "No permission to access the path",
            ProbeReason::InvalidPath => "Path is malformed or too long",
            ProbeReason::Other => "An unexpected exception occurred",
        }
    }
}

/// The root exists but could not be opened as a directory.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{}: {} - {}", .reason.describe(), .path.display(), .detail)]
pub struct ProbeError {
    pub path: PathBuf,
    pub reason: ProbeReason,
    pub detail: String,
}

impl ProbeError {
    pub fn new(path: &Path, reason: ProbeReason, detail: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            reason,
            detail: detail.into(),
        }
    }

    pub fn from_fs(err: &FsError) -> Self {
        Self::new(
            &err.path,
            ProbeReason::classify(err.source.kind()),
            err.source.to_string(),
        )
    }
}
