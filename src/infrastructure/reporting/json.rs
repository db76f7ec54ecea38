//! NDJSON reporter for CI
//!
//! One JSON object per line:
//! `{"type":"deleted","message":"Deleted file: /tmp/x"}`
//! `{"type":"error","category":"node","failure":"permission_denied","path":"/tmp/y","message":"..."}`

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::domain::ports::{CleanReporter, ErrorDetail};
use crate::domain::value_objects::FailureKind;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Deleted {
        message: &'a str,
    },
    Error {
        category: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        failure: Option<FailureKind>,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        message: &'a str,
    },
}

/// Writes one JSON line per notification
pub struct JsonReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonReporter {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    fn emit(&self, event: &JsonEvent<'_>) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(err) => {
                log::debug!("could not serialize clean event: {}", err);
                return;
            }
        };
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            log::debug!("could not write clean event: {}", err);
        }
    }
}

impl CleanReporter for JsonReporter {
    fn report_info(&self, message: &str) {
        self.emit(&JsonEvent::Deleted { message });
    }

    fn report_error(&self, error: &ErrorDetail, message: &str) {
        let failure = match error {
            ErrorDetail::Node(node) => Some(node.failure),
            _ => None,
        };
        self.emit(&JsonEvent::Error {
            category: error.label(),
            failure,
            path: error.path().map(|p| p.display().to_string()),
            message,
        });
    }
}
