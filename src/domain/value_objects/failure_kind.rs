//! Classification of a failed delete attempt

use std::io;

use serde::Serialize;

/// Why a single node could not be deleted.
///
/// Every kind is soft: it is recorded and reported, and traversal continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Caller lacks the rights to delete the node
    PermissionDenied,
    /// Node is locked, in use, not empty, or hit another IO failure
    ResourceBusy,
    /// Anything else, including a panic inside a worker unit
    Unknown,
}

impl FailureKind {
    /// Map an IO error kind onto the three reported classes.
    pub fn classify(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                FailureKind::PermissionDenied
            }
            io::ErrorKind::Unsupported
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidData
            | io::ErrorKind::OutOfMemory
            | io::ErrorKind::Other => FailureKind::Unknown,
            _ => FailureKind::ResourceBusy,
        }
    }

    /// Leading phrase of the failure message
    pub fn describe(&self) -> &'static str {
        match self {
            FailureKind::PermissionDenied => "No permission to delete",
            FailureKind::ResourceBusy => "Resource busy or IO error",
            FailureKind::Unknown => "Unexpected error",
        }
    }
}
