//! Command line arguments and their merge with the config file

use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Parser;
use doccmp_core::{CompareOptions, Mode, PreprocessOptions, ReportFormat};
use std::path::PathBuf;

const DEFAULT_REPORT: &str = "comparison_report.txt";

#[derive(Parser, Debug)]
#[command(name = "doccmp")]
#[command(version, about = "Compare two text documents and write a similarity report", long_about = None)]
pub struct Cli {
    /// First document
    pub file1: PathBuf,

    /// Second document
    pub file2: PathBuf,

    /// Preprocessing mode: strict or lenient [default: lenient]
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Ignore case differences
    #[arg(long)]
    pub ignore_case: bool,

    /// Strip punctuation and collapse spaces
    #[arg(long)]
    pub clean: bool,

    /// Keyword to count in both documents
    #[arg(long)]
    pub keyword: Option<String>,

    /// Report file [default: comparison_report.txt]
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Report format: text or json [default: text]
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Config file (defaults to <config dir>/doccmp/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub compare: CompareOptions,
    pub report: PathBuf,
    pub format: ReportFormat,
}

impl Settings {
    /// Merge CLI flags over config values over built-in defaults.
    ///
    /// Boolean flags can only switch a behavior on.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let mode = match (cli.mode, config.mode.as_deref()) {
            (Some(mode), _) => mode,
            (None, Some(raw)) => raw.parse::<Mode>()?,
            (None, None) => Mode::default(),
        };

        let format = match (cli.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw.parse::<ReportFormat>().map_err(|e| anyhow!(e))?,
            (None, None) => ReportFormat::default(),
        };

        let preprocess = PreprocessOptions::new(mode)
            .with_ignore_case(cli.ignore_case || config.ignore_case.unwrap_or(false))
            .with_clean(cli.clean || config.clean.unwrap_or(false))
            .with_unicode_punctuation(config.unicode_punctuation.unwrap_or(true));

        let mut compare = CompareOptions::new(preprocess);
        if let Some(keyword) = cli.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            compare = compare.with_keyword(keyword);
        }

        let report = cli
            .report
            .clone()
            .or_else(|| config.report.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT));

        Ok(Self {
            file1: cli.file1.clone(),
            file2: cli.file2.clone(),
            compare,
            report,
            format,
        })
    }
}
