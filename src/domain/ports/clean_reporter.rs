//! Clean Reporter Port
//!
//! Observer for clean operations. The eraser tells the reporter about every
//! delete attempt and every validation failure; the reporter never influences
//! control flow.

use std::path::Path;

use crate::domain::value_objects::{NodeError, ProbeError};
use crate::error::{PathResolutionError, ValidationError};

/// Typed detail attached to an error notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// The scratch directory could not be resolved
    Resolution(PathResolutionError),
    /// The path was rejected before traversal (raised to the caller as well)
    Validation(ValidationError),
    /// The root could not be inspected; the clean stopped early
    Probe(ProbeError),
    /// One node could not be deleted; traversal continued
    Node(NodeError),
}

impl ErrorDetail {
    /// Short machine-readable label, used by structured sinks
    pub fn label(&self) -> &'static str {
        match self {
            ErrorDetail::Resolution(_) => "resolution",
            ErrorDetail::Validation(_) => "validation",
            ErrorDetail::Probe(_) => "probe",
            ErrorDetail::Node(_) => "node",
        }
    }

    /// Path the error is about, when there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            ErrorDetail::Resolution(PathResolutionError::DoesNotExist { path }) => Some(path),
            ErrorDetail::Resolution(PathResolutionError::NotProvided) => None,
            ErrorDetail::Validation(ValidationError::NotFound { path }) => Some(path),
            ErrorDetail::Validation(ValidationError::EmptyPath) => None,
            ErrorDetail::Probe(err) => Some(&err.path),
            ErrorDetail::Node(err) => Some(&err.path),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorDetail::Resolution(err) => err.fmt(f),
            ErrorDetail::Validation(err) => err.fmt(f),
            ErrorDetail::Probe(err) => err.fmt(f),
            ErrorDetail::Node(err) => err.fmt(f),
        }
    }
}

/// Trait for receiving clean notifications
///
/// Implementations can be:
/// - LogReporter: forwards to the `log` facade
/// - JsonReporter: NDJSON event stream for CI
/// - MemoryReporter: records notifications for assertions
/// - NoopReporter: Silent operation
///
/// Calls may arrive concurrently from worker threads. Implementations must
/// not block indefinitely.
pub trait CleanReporter: Send + Sync {
    /// A node was deleted
    fn report_info(&self, message: &str);

    /// Something could not be done
    fn report_error(&self, error: &ErrorDetail, message: &str);
}

/// No-op reporter for silent operation
pub struct NoopReporter;

impl CleanReporter for NoopReporter {
    fn report_info(&self, _message: &str) {}

    fn report_error(&self, _error: &ErrorDetail, _message: &str) {}
}
