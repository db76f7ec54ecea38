//! Application Layer
//!
//! Use cases that orchestrate a clean.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PathResolver` - Turns a path provider's answer into an existing directory
//! - `DirectoryEraser` - Validates a path and deletes the tree bottom-up
//! - `ScratchCleaner` - Resolve + erase, blocking or in the background

pub mod clean;
pub mod resolve;

pub use clean::{
    CleanHandle, CleanOptions, CleanReport, DirectoryEraser, PartialFailure, ScratchCleaner,
};
pub use resolve::PathResolver;
