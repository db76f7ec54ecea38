//! Domain Layer
//!
//! Pure types and interfaces for best-effort directory erasure.
//!
//! ## Structure
//!
//! - `entities/` - Filesystem nodes met during traversal (`DirectoryHandle`)
//! - `value_objects/` - Immutable value types (FailureKind, NodeError, ExecutionMode)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, PathProvider, CleanReporter)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
