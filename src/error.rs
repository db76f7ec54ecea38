//! Error types for scratchwipe
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.
//!
//! Only failures that stop an operation from starting live here. Per-node
//! deletion failures are never raised: they are collected as
//! [`NodeError`](crate::domain::value_objects::NodeError) values inside the
//! clean report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scratchwipe operations
pub type ScratchResult<T> = Result<T, ScratchError>;

/// Main error type for scratchwipe operations
#[derive(Error, Debug)]
pub enum ScratchError {
    /// The scratch directory could not be resolved
    #[error(transparent)]
    Resolution(#[from] PathResolutionError),

    /// The resolved path was rejected before traversal
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool for concurrent mode could not be built
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Background clean thread panicked before producing a report
    #[error("background clean worker panicked")]
    WorkerPanicked,
}

/// Failure to turn the path provider's answer into an existing directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathResolutionError {
    /// The provider yielded no path at all
    #[error("Could not get temp folder path")]
    NotProvided,

    /// The provider yielded a path that is not on disk
    #[error("The temp folder path does not exist: {}", .path.display())]
    DoesNotExist { path: PathBuf },
}

/// Hard validation failure raised before the filesystem is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path is empty or whitespace-only
    #[error("Directory path is empty")]
    EmptyPath,

    /// Path does not exist
    #[error("Directory path does not exist: {}", .path.display())]
    NotFound { path: PathBuf },
}
