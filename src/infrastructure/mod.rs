//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and config directory lookup
//! - `providers/` - Path providers (OS temp dir, fixed path)
//! - `reporting/` - Clean reporters (log, NDJSON, in-memory)

pub mod fs;
pub mod providers;
pub mod reporting;

// Re-export for convenience
pub use fs::LocalFs;
pub use providers::{FixedPathProvider, TempDirProvider};
pub use reporting::{JsonReporter, LogReporter, MemoryReporter, ReportedEvent};
