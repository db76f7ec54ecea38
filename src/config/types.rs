//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::CleanOptions;
use crate::domain::value_objects::ExecutionMode;
use crate::error::ScratchResult;

use super::loader;
use super::ConfigWarning;

/// `[clean]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CleanConfig {
    #[serde(default)]
    pub mode: ExecutionMode,

    /// Worker threads for concurrent mode; 0 uses rayon's global pool
    #[serde(default)]
    pub threads: usize,

    #[serde(default)]
    pub keep_root: bool,

    /// Directory to clean instead of the system temp directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const VALID_VALUES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Log filter for this verbosity.
    ///
    /// `Normal` still shows every deleted node, since those are `info`
    /// notifications.
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Info,
            Verbosity::Verbose => log::LevelFilter::Debug,
            Verbosity::Debug => log::LevelFilter::Trace,
        }
    }

    /// Apply `-v` counts and `-q` on top of this level
    pub fn adjusted(self, verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match (self, verbose) {
            (level, 0) => level,
            (Verbosity::Quiet | Verbosity::Normal, 1) => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clean: CleanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ScratchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ScratchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file when given, else the user config, else
    /// defaults; then apply environment overrides.
    ///
    /// An explicit file must load. A broken user config is logged and
    /// skipped.
    pub fn resolve(explicit: Option<&Path>) -> ScratchResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (SCRATCHWIPE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Clean options described by the `[clean]` section
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions::new()
            .with_mode(self.clean.mode)
            .with_threads(self.clean.threads)
            .with_keep_root(self.clean.keep_root)
    }
}
