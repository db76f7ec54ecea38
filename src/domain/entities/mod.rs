//! Domain Entities
//!
//! - `DirectoryHandle` - A file or directory found while listing a parent

mod directory_handle;

pub use directory_handle::{DirectoryHandle, NodeKind};
