//! Scratch path resolution
//!
//! Read-only: asks the provider for a candidate and checks it is on disk.

use std::path::PathBuf;

use crate::domain::ports::PathProvider;
use crate::error::PathResolutionError;

/// Resolves the scratch directory through an injected provider
pub struct PathResolver<P: PathProvider> {
    provider: P,
}

impl<P: PathProvider> PathResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Return the provider's path if it exists on disk.
    pub fn resolve_scratch_path(&self) -> Result<PathBuf, PathResolutionError> {
        let path = self
            .provider
            .scratch_path()
            .ok_or(PathResolutionError::NotProvided)?;

        if !path.exists() {
            return Err(PathResolutionError::DoesNotExist { path });
        }

        log::debug!("resolved scratch path: {}", path.display());
        Ok(path)
    }
}
