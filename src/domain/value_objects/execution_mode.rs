//! Execution mode value object

use serde::{Deserialize, Serialize};

/// How the eraser schedules work across the tree.
///
/// Both modes share the same deletion policy; they only differ in
/// parallelism.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single thread, depth-first, children in name order
    Sequential,
    /// One unit of work per child at every level, joined before self-delete
    #[default]
    Concurrent,
}

impl ExecutionMode {
    pub const VALID_VALUES: &'static [&'static str] = &["sequential", "concurrent"];

    /// Parse a lenient, case-insensitive name
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sequential" | "sync" | "serial" => Some(ExecutionMode::Sequential),
            "concurrent" | "parallel" | "async" => Some(ExecutionMode::Concurrent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Concurrent => "concurrent",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
