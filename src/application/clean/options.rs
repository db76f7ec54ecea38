//! Clean options

use crate::domain::value_objects::ExecutionMode;

/// Options for a clean run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Sequential or fan-out traversal
    pub mode: ExecutionMode,
    /// Worker threads for concurrent mode (0 = rayon's global pool)
    pub threads: usize,
    /// Empty the root but do not delete the root itself
    pub keep_root: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set worker thread count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Keep the root directory
    pub fn with_keep_root(mut self, keep_root: bool) -> Self {
        self.keep_root = keep_root;
        self
    }

    /// Whether the run needs a dedicated worker pool
    pub fn needs_dedicated_pool(&self) -> bool {
        self.mode == ExecutionMode::Concurrent && self.threads > 0
    }
}
