use std::path::PathBuf;

use clap::Parser;
use scratchwipe::config::Config;
use scratchwipe::config::OutputFormat;
use scratchwipe::ExecutionMode;

/// scratchwipe - best-effort recursive eraser for scratch directories
#[derive(Parser, Debug)]
#[command(name = "scratchwipe")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Without --path, the system temp directory is cleaned.")]
pub struct Cli {
    /// Directory to clean
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Traversal mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ExecutionMode>,

    /// Worker threads for concurrent mode (0 = one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Empty the directory but keep it
    #[arg(long)]
    pub keep_root: bool,

    /// Config file to load instead of the user config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit non-zero when any node could not be deleted
    #[arg(long)]
    pub fail_on_partial: bool,
}

impl Cli {
    /// Layer flags over a loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.path {
            config.clean.path = Some(path.clone());
        }
        if let Some(mode) = self.mode {
            config.clean.mode = mode;
        }
        if let Some(threads) = self.threads {
            config.clean.threads = threads;
        }
        if self.keep_root {
            config.clean.keep_root = true;
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        config.output.verbosity = config.output.verbosity.adjusted(self.verbose, self.quiet);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratchwipe::config::Verbosity;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["scratchwipe"]).unwrap();
        assert_eq!(cli.path, None);
        assert_eq!(cli.mode, None);
        assert!(!cli.keep_root);
        assert!(!cli.fail_on_partial);
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "scratchwipe",
            "--path",
            "/tmp/build",
            "--mode",
            "sequential",
            "-j",
            "4",
            "--keep-root",
            "--json",
            "-vv",
            "--fail-on-partial",
        ])
        .unwrap();

        assert_eq!(cli.path, Some(PathBuf::from("/tmp/build")));
        assert_eq!(cli.mode, Some(ExecutionMode::Sequential));
        assert_eq!(cli.threads, Some(4));
        assert!(cli.keep_root);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.fail_on_partial);
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["scratchwipe", "--mode", "sideways"]).is_err());
    }

    #[test]
    fn test_cli_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["scratchwipe", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_cli_flags_override_config() {
        let mut config = Config::default();
        config.clean.mode = ExecutionMode::Concurrent;
        config.clean.threads = 8;
        config.output.verbosity = Verbosity::Verbose;

        let cli = Cli::try_parse_from(["scratchwipe", "--mode", "sequential", "-q"]).unwrap();
        let config = cli.apply(config);

        assert_eq!(config.clean.mode, ExecutionMode::Sequential);
        assert_eq!(config.clean.threads, 8);
        assert_eq!(config.output.verbosity, Verbosity::Quiet);
    }
}
