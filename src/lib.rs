//! scratchwipe - best-effort recursive eraser for scratch directories
//!
//! Resolves a scratch directory (the system temp directory by default),
//! then deletes everything under it bottom-up. A node that cannot be
//! deleted is reported and skipped; its siblings are still attempted.
//! Traversal runs either sequentially or fanned out over a rayon pool.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CleanHandle, CleanOptions, CleanReport, DirectoryEraser, PartialFailure, PathResolver,
    ScratchCleaner,
};
pub use config::Config;
pub use domain::entities::{DirectoryHandle, NodeKind};
pub use domain::ports::{CleanReporter, ErrorDetail, FileSystem, NoopReporter, PathProvider};
pub use domain::value_objects::{ExecutionMode, FailureKind, NodeError, ProbeError};
pub use error::{PathResolutionError, ScratchError, ScratchResult, ValidationError};
pub use infrastructure::{
    FixedPathProvider, JsonReporter, LocalFs, LogReporter, MemoryReporter, TempDirProvider,
};
