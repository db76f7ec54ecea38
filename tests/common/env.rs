//! Test environment for running the scratchwipe binary in isolation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const SCRATCHWIPE_VARS: &[&str] = &[
    "SCRATCHWIPE_MODE",
    "SCRATCHWIPE_THREADS",
    "SCRATCHWIPE_PATH",
    "SCRATCHWIPE_KEEP_ROOT",
    "SCRATCHWIPE_VERBOSITY",
    "RUST_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated workspace plus config home
pub struct TestEnv {
    pub workspace: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            workspace: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Write `<config_home>/scratchwipe/config.toml`
    pub fn write_user_config(&self, toml: &str) {
        let dir = self.config_home.path().join("scratchwipe");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), toml).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_scratchwipe"));
        cmd.current_dir(self.workspace.path())
            .args(args)
            .env("SCRATCHWIPE_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1");
        for var in SCRATCHWIPE_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute scratchwipe");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
