//! In-memory reporter
//!
//! Keeps every notification so callers and tests can inspect the stream
//! after a clean without capturing process output.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{CleanReporter, ErrorDetail};

/// One recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Info(String),
    Error { detail: ErrorDetail, message: String },
}

impl ReportedEvent {
    pub fn message(&self) -> &str {
        match self {
            ReportedEvent::Info(message) => message,
            ReportedEvent::Error { message, .. } => message,
        }
    }
}

/// Records notifications in arrival order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportedEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events
    pub fn events(&self) -> Vec<ReportedEvent> {
        self.lock().clone()
    }

    /// Info messages, in order
    pub fn infos(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                ReportedEvent::Info(message) => Some(message.clone()),
                ReportedEvent::Error { .. } => None,
            })
            .collect()
    }

    /// Error messages, in order
    pub fn errors(&self) -> Vec<String> {
        self.error_details()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }

    /// Error details with their messages
    pub fn error_details(&self) -> Vec<(ErrorDetail, String)> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                ReportedEvent::Error { detail, message } => {
                    Some((detail.clone(), message.clone()))
                }
                ReportedEvent::Info(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ReportedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CleanReporter for MemoryReporter {
    fn report_info(&self, message: &str) {
        self.lock().push(ReportedEvent::Info(message.to_string()));
    }

    fn report_error(&self, error: &ErrorDetail, message: &str) {
        self.lock().push(ReportedEvent::Error {
            detail: error.clone(),
            message: message.to_string(),
        });
    }
}
