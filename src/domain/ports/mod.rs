//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clean_reporter;
pub mod file_system;
pub mod path_provider;

pub use clean_reporter::{CleanReporter, ErrorDetail, NoopReporter};
pub use file_system::{FileSystem, FsError, FsResult, Listing};
pub use path_provider::PathProvider;
