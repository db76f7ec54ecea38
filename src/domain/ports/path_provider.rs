//! PathProvider port - where the scratch directory lives
//!
//! The provider only proposes a path. Checking that it exists is the
//! resolver's job.

use std::path::PathBuf;

/// Capability that proposes a scratch directory, or nothing.
pub trait PathProvider: Send + Sync {
    fn scratch_path(&self) -> Option<PathBuf>;
}

impl<P: PathProvider + ?Sized> PathProvider for Box<P> {
    fn scratch_path(&self) -> Option<PathBuf> {
        (**self).scratch_path()
    }
}
