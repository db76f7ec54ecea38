//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Loading continues with the offending part ignored. Warnings are collected
/// while loading and logged once the logger is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the config schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        /// 1-indexed, if the key could be located
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// The implicit user config could not be loaded; defaults were used
    IgnoredFile { file: PathBuf, reason: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::IgnoredFile { file, reason } => {
                write!(f, "ignoring user config {}: {}", file.display(), reason)
            }
        }
    }
}
