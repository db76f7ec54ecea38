//! Clean Use Case
//!
//! Orchestrates the erasure of a scratch directory.
//!
//! This module handles:
//! - Validating the resolved path (empty, missing, unreadable root)
//! - Deleting the tree bottom-up, sequentially or with fan-out
//! - Collecting per-node failures without aborting the traversal
//! - Running the whole operation in the background

mod eraser;
mod notifier;
mod options;
mod report;
mod use_case;

pub use eraser::DirectoryEraser;
pub use options::CleanOptions;
pub use report::{CleanReport, PartialFailure};
pub use use_case::{CleanHandle, ScratchCleaner};
