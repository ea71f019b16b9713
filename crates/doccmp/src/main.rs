//! doccmp - compare two documents and write a similarity report

mod app;
mod cli;
mod config;

use clap::Parser;
use cli::{Cli, Settings};
use config::Config;
use std::process::ExitCode;
use tracing::Level;

/// Exit code for bad configuration, matching clap's usage errors
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let settings = match Settings::resolve(&cli, &config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    tracing::debug!(?settings, "resolved settings");

    match app::run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error reading documents: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout only carries the report
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
