//! Configuration module for scratchwipe
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SCRATCHWIPE_*)
//! 3. Explicit config file (`--config`)
//! 4. User config (`<config_dir>/scratchwipe/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{user_config_path, ENV_KEEP_ROOT, ENV_MODE, ENV_PATH, ENV_THREADS, ENV_VERBOSITY};
pub use types::{CleanConfig, Config, OutputConfig, OutputFormat, Verbosity};
