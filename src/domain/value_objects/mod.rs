//! Domain Value Objects
//!
//! Immutable value types that describe how a clean runs and how it failed.

mod config_warning;
mod execution_mode;
mod failure_kind;
mod node_error;

pub use config_warning::ConfigWarning;
pub use execution_mode::ExecutionMode;
pub use failure_kind::FailureKind;
pub use node_error::{NodeError, ProbeError, ProbeReason};
