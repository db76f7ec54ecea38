//! Reporter that forwards notifications to the `log` facade

use crate::domain::ports::{CleanReporter, ErrorDetail};

const TARGET: &str = "scratchwipe::clean";

/// Deleted nodes at `info`, node and probe failures at `error`.
///
/// Resolution and validation failures go to `debug` only: they come back to
/// the caller as typed errors, which print them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl CleanReporter for LogReporter {
    fn report_info(&self, message: &str) {
        log::info!(target: TARGET, "{}", message);
    }

    fn report_error(&self, error: &ErrorDetail, message: &str) {
        match error {
            ErrorDetail::Resolution(_) | ErrorDetail::Validation(_) => {
                log::debug!(target: TARGET, "[{}] {}", error.label(), message)
            }
            ErrorDetail::Probe(_) | ErrorDetail::Node(_) => {
                log::error!(target: TARGET, "[{}] {}", error.label(), message)
            }
        }
    }
}
