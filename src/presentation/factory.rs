//! Use Case Factory
//!
//! Creates the clean use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use std::sync::Arc;

use crate::application::ScratchCleaner;
use crate::config::{Config, OutputFormat};
use crate::domain::ports::{CleanReporter, PathProvider};
use crate::error::ScratchResult;
use crate::infrastructure::{FixedPathProvider, JsonReporter, LocalFs, LogReporter, TempDirProvider};

/// Type alias for the concrete ScratchCleaner used by the binary
pub type ConcreteScratchCleaner = ScratchCleaner<Box<dyn PathProvider>, LocalFs>;

/// Configured `[clean] path` when set, else the system temp directory
pub fn create_path_provider(config: &Config) -> Box<dyn PathProvider> {
    match &config.clean.path {
        Some(path) => Box::new(FixedPathProvider::new(path)),
        None => Box::new(TempDirProvider::new()),
    }
}

/// Reporter for the configured output format
pub fn create_reporter(format: OutputFormat) -> Arc<dyn CleanReporter> {
    match format {
        OutputFormat::Text => Arc::new(LogReporter::new()),
        OutputFormat::Json => Arc::new(JsonReporter::stdout()),
    }
}

/// Create a scratch cleaner with all dependencies wired up
pub fn create_scratch_cleaner(
    config: &Config,
    reporter: Arc<dyn CleanReporter>,
) -> ScratchResult<ConcreteScratchCleaner> {
    ScratchCleaner::new(
        create_path_provider(config),
        LocalFs::new(),
        reporter,
        config.clean_options(),
    )
}
