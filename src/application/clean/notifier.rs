//! Guarded delivery to the injected reporter
//!
//! A reporter that panics is logged and otherwise ignored; it never unwinds
//! into the traversal or the use case.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::domain::ports::{CleanReporter, ErrorDetail};

pub(crate) struct Notifier {
    reporter: Arc<dyn CleanReporter>,
}

impl Notifier {
    pub(crate) fn new(reporter: Arc<dyn CleanReporter>) -> Self {
        Self { reporter }
    }

    pub(crate) fn info(&self, message: &str) {
        let delivered =
            panic::catch_unwind(AssertUnwindSafe(|| self.reporter.report_info(message)));
        if delivered.is_err() {
            log::warn!("reporter panicked on: {}", message);
        }
    }

    pub(crate) fn error(&self, detail: &ErrorDetail, message: &str) {
        let delivered = panic::catch_unwind(AssertUnwindSafe(|| {
            self.reporter.report_error(detail, message)
        }));
        if delivered.is_err() {
            log::warn!("reporter panicked on: {}", message);
        }
    }
}
