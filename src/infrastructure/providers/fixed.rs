//! Fixed path provider
//!
//! Used when the scratch directory is configured explicitly, and in tests.

use std::path::{Path, PathBuf};

use crate::domain::ports::PathProvider;

/// Always proposes the same path (or nothing)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedPathProvider {
    path: Option<PathBuf>,
}

impl FixedPathProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// A provider that never has a path
    pub fn none() -> Self {
        Self { path: None }
    }
}

impl PathProvider for FixedPathProvider {
    fn scratch_path(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
