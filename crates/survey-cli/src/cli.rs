//! CLI argument definitions for the survey EDA tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use survey_cli::logging::{LogConfig, LogFormat};
use survey_model::options::{
    DEFAULT_HISTOGRAM_BINS, DEFAULT_MAX_WORDS, DEFAULT_POSITIVE_LABEL, DEFAULT_PREVIEW_ROWS,
};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "survey-eda",
    version,
    about = "Survey EDA report generator",
    long_about = "Generate an exploratory data analysis report for a survey dataset.\n\n\
                  Reads a CSV or spreadsheet export, prints descriptive statistics,\n\
                  chart tables and word frequencies, and writes the data back as\n\
                  sentiment_eda_output.xlsx."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration from the global flags.
    ///
    /// `--log-level` wins over `-v/-q`; `RUST_LOG` applies only when neither
    /// is given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter,
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            ..LogConfig::default()
        }
        .with_format(self.log_format.into())
        .with_ansi(with_ansi)
        .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a survey file and print the report.
    Report(ReportArgs),

    /// List the survey columns the report expects.
    Schema,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Survey data file (.csv, .xlsx, .xlsm, .xlsb, .xls or .ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory for the exported workbook (default: <FILE dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of age histogram buckets.
    #[arg(long = "bins", value_name = "N", default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub bins: usize,

    /// Answer counted as positive in ownership proportions (case-sensitive).
    #[arg(long = "positive-label", value_name = "LABEL", default_value = DEFAULT_POSITIVE_LABEL)]
    pub positive_label: String,

    /// Maximum words kept per word cloud.
    #[arg(long = "max-words", value_name = "N", default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,

    /// Rows shown in the sample data preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Also write the report as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Skip writing the export workbook.
    #[arg(long = "no-export")]
    pub no_export: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
