//! scratchwipe CLI
//!
//! Usage: scratchwipe [--path DIR] [--mode sequential|concurrent] [OPTIONS]

mod cli;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use scratchwipe::config::{Config, OutputFormat, Verbosity};
use scratchwipe::presentation::{
    create_renderer, create_reporter, create_scratch_cleaner, detect_capabilities,
};

use cli::Cli;

/// Exit code when `--fail-on-partial` is set and some nodes survived
const EXIT_PARTIAL: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (config, warnings) =
        Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    let config = cli.apply(config);

    init_logger(config.output.verbosity);
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    run(&cli, &config)
}

fn init_logger(verbosity: Verbosity) {
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .parse_default_env()
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let reporter = create_reporter(config.output.format);
    let cleaner = create_scratch_cleaner(config, reporter)?;
    let report = cleaner.clean()?;

    let verbosity = config.output.verbosity;
    if config.output.format == OutputFormat::Json || verbosity > Verbosity::Quiet {
        let renderer = create_renderer(config.output.format, &detect_capabilities(), verbosity);
        println!("{}", renderer.render(&report));
    }

    match report.into_result() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(partial) if cli.fail_on_partial => {
            eprintln!("Error: {}", partial);
            Ok(ExitCode::from(EXIT_PARTIAL))
        }
        Err(partial) => {
            log::debug!("{}", partial);
            Ok(ExitCode::SUCCESS)
        }
    }
}
