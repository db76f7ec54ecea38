//! Scratch Cleaner Use Case
//!
//! Resolves the scratch directory through the path provider and erases it.
//! Offered as a blocking call and as a background job with a completion
//! handle.

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::application::resolve::PathResolver;
use crate::domain::ports::{CleanReporter, ErrorDetail, FileSystem, PathProvider};
use crate::error::{ScratchError, ScratchResult};

use super::eraser::DirectoryEraser;
use super::notifier::Notifier;
use super::options::CleanOptions;
use super::report::CleanReport;

/// Clean use case - erases the directory named by the path provider
pub struct ScratchCleaner<P, FS>
where
    P: PathProvider,
    FS: FileSystem,
{
    resolver: PathResolver<P>,
    eraser: DirectoryEraser<FS>,
    notifier: Notifier,
    options: CleanOptions,
}

impl<P, FS> ScratchCleaner<P, FS>
where
    P: PathProvider,
    FS: FileSystem,
{
    /// Create a new scratch cleaner
    ///
    /// Builds a dedicated worker pool when the options ask for a fixed
    /// number of threads.
    pub fn new(
        provider: P,
        fs: FS,
        reporter: Arc<dyn CleanReporter>,
        options: CleanOptions,
    ) -> ScratchResult<Self> {
        let mut eraser = DirectoryEraser::new(fs, reporter.clone());
        if options.needs_dedicated_pool() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(options.threads)
                .thread_name(|i| format!("scratchwipe-worker-{}", i))
                .build()?;
            eraser = eraser.with_pool(Arc::new(pool));
        }

        Ok(Self {
            resolver: PathResolver::new(provider),
            eraser,
            notifier: Notifier::new(reporter),
            options,
        })
    }

    /// Resolve the scratch directory and erase it, blocking until the whole
    /// tree has been attempted.
    ///
    /// Resolution and validation failures are raised; node failures are in
    /// the returned report.
    pub fn clean(&self) -> ScratchResult<CleanReport> {
        let path = self.resolver.resolve_scratch_path().map_err(|err| {
            self.notifier
                .error(&ErrorDetail::Resolution(err.clone()), &err.to_string());
            err
        })?;

        log::info!("cleaning scratch directory {}", path.display());
        let report = self.eraser.clean_path(&path, &self.options)?;
        Ok(report)
    }
}

impl<P, FS> ScratchCleaner<P, FS>
where
    P: PathProvider + 'static,
    FS: FileSystem + 'static,
{
    /// Run [`clean`](Self::clean) on a background thread.
    pub fn spawn(self) -> ScratchResult<CleanHandle> {
        let inner = std::thread::Builder::new()
            .name("scratchwipe-clean".to_string())
            .spawn(move || self.clean())?;
        Ok(CleanHandle { inner })
    }
}

/// Completion handle for a background clean
pub struct CleanHandle {
    inner: JoinHandle<ScratchResult<CleanReport>>,
}

impl CleanHandle {
    /// Whether the background clean has finished
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Block until the background clean completes
    pub fn wait(self) -> ScratchResult<CleanReport> {
        self.inner
            .join()
            .map_err(|_| ScratchError::WorkerPanicked)?
    }
}
