//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExecutionMode;
use crate::error::{ScratchError, ScratchResult};
use crate::infrastructure::fs::scratchwipe_config_dir;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};
use super::ConfigWarning;

pub const ENV_MODE: &str = "SCRATCHWIPE_MODE";
pub const ENV_THREADS: &str = "SCRATCHWIPE_THREADS";
pub const ENV_PATH: &str = "SCRATCHWIPE_PATH";
pub const ENV_KEEP_ROOT: &str = "SCRATCHWIPE_KEEP_ROOT";
pub const ENV_VERBOSITY: &str = "SCRATCHWIPE_VERBOSITY";

const KNOWN_KEYS: &[&str] = &[
    "clean",
    "mode",
    "threads",
    "keep_root",
    "path",
    "output",
    "verbosity",
    "format",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ScratchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ScratchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config_dir>/scratchwipe/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    scratchwipe_config_dir().map(|dir| dir.join("scratchwipe").join("config.toml"))
}

pub fn resolve(explicit: Option<&Path>) -> ScratchResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => load_user_config(),
    };
    Ok((with_env_overrides(config), warnings))
}

fn load_user_config() -> (Config, Vec<ConfigWarning>) {
    load_implicit(user_config_path())
}

/// Load a config file nobody asked for explicitly. A missing file means
/// defaults; a broken one means defaults plus an `IgnoredFile` warning.
pub(crate) fn load_implicit(path: Option<PathBuf>) -> (Config, Vec<ConfigWarning>) {
    let Some(path) = path.filter(|p| p.is_file()) else {
        return (Config::default(), Vec::new());
    };

    match load_with_warnings(&path) {
        Ok(loaded) => loaded,
        Err(err) => {
            let reason = match err {
                ScratchError::InvalidConfig { message, .. } => message,
                other => other.to_string(),
            };
            let warning = ConfigWarning::IgnoredFile { file: path, reason };
            (Config::default(), vec![warning])
        }
    }
}

/// Apply environment variable overrides (SCRATCHWIPE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `lookup`, writing warnings to `writer`
pub(crate) fn with_overrides_from<L, W>(mut config: Config, lookup: L, writer: &mut W) -> Config
where
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(mode) = lookup(ENV_MODE) {
        config.clean.mode = EnvVarValidator::new(ENV_MODE, ExecutionMode::VALID_VALUES)
            .parse_with_writer(&mode, ExecutionMode::parse, config.clean.mode, writer);
    }

    if let Some(threads) = lookup(ENV_THREADS) {
        config.clean.threads = EnvVarValidator::new(ENV_THREADS, &["0", "<number of threads>"])
            .parse_with_writer(
                &threads,
                |s| s.trim().parse().ok(),
                config.clean.threads,
                writer,
            );
    }

    if let Some(path) = lookup(ENV_PATH).filter(|p| !p.trim().is_empty()) {
        config.clean.path = Some(PathBuf::from(path));
    }

    if let Some(keep_root) = lookup(ENV_KEEP_ROOT) {
        config.clean.keep_root = EnvVarValidator::new(ENV_KEEP_ROOT, &["true", "false"])
            .parse_with_writer(&keep_root, parse_bool, config.clean.keep_root, writer);
    }

    if let Some(verbosity) = lookup(ENV_VERBOSITY) {
        config.output.verbosity = EnvVarValidator::new(ENV_VERBOSITY, Verbosity::VALID_VALUES)
            .parse_with_writer(&verbosity, Verbosity::parse, config.output.verbosity, writer);
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
