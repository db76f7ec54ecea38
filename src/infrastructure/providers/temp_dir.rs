//! OS temp directory provider
//!
//! Finds the temp directory the way the OS hands out temp files: create a
//! probe file, take its parent, and let the probe be removed on drop.

use std::path::PathBuf;

use crate::domain::ports::PathProvider;

/// Provides the directory the OS creates temp files in
#[derive(Debug, Clone, Copy, Default)]
pub struct TempDirProvider;

impl TempDirProvider {
    pub fn new() -> Self {
        Self
    }
}

impl PathProvider for TempDirProvider {
    fn scratch_path(&self) -> Option<PathBuf> {
        let probe = match tempfile::NamedTempFile::new() {
            Ok(probe) => probe,
            Err(err) => {
                log::warn!("could not create temp probe file: {}", err);
                return None;
            }
        };
        let dir = probe.path().parent().map(|p| p.to_path_buf());
        if let Err(err) = probe.close() {
            log::debug!("could not remove temp probe file: {}", err);
        }
        dir
    }
}
