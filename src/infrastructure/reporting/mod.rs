//! Clean Reporter Implementations
//!
//! Concrete implementations of the CleanReporter port.

mod json;
mod logging;
mod memory;

pub use json::JsonReporter;
pub use logging::LogReporter;
pub use memory::{MemoryReporter, ReportedEvent};
