//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`setup_logging`] - `tracing` subscriber for the binary
//!
//! The flags map onto the library's own types:
//!
//! ```rust
//! use chatstats::cli::{Args, OutputFormat};
//! use chatstats::format::ReportFormat;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstats", "chat.txt", "--from", "2024-01-01", "-f", "json"]);
//! let filter = args.filter_config().unwrap();
//! assert!(filter.has_date_filter());
//! assert_eq!(ReportFormat::from(args.format), ReportFormat::Json);
//! assert_eq!(args.report_config().top_words, 10);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::config::ReportConfig;
use crate::core::filter::FilterConfig;
use crate::error::Result;

/// Activity statistics for chat transcripts: who writes, when, how much, and
/// which words set each participant apart.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt --from 2024-01-01 --to 2024-03-31
    chatstats chat.txt --words-for Alice --top 25
    chatstats chat.txt -f csv -o authors.csv
    chatstats chat.txt -f json --author bob")]
pub struct Args {
    /// Path to the transcript file
    pub input: PathBuf,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Only count messages from this author (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Compute distinctive words for this author only
    #[arg(long, value_name = "NAME")]
    pub words_for: Option<String>,

    /// Distinctive words reported per author
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log level or filter directive (also read from RUST_LOG)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Builds the message filter from `--from`, `--to` and `--author`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`](crate::ChatstatsError::InvalidDate)
    /// if a date is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref from) = self.from {
            config = config.with_date_from(from)?;
        }
        if let Some(ref to) = self.to {
            config = config.with_date_to(to)?;
        }
        if let Some(ref author) = self.author {
            config = config.with_author(author.clone());
        }
        Ok(config)
    }

    /// Builds the report configuration from `--top` and `--words-for`.
    pub fn report_config(&self) -> ReportConfig {
        let config = ReportConfig::new().with_top_words(self.top);
        match self.words_for {
            Some(ref author) => config.with_words_for(author.clone()),
            None => config,
        }
    }
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - readable report (default)
/// - [`Json`](OutputFormat::Json) - every statistic as JSON
/// - [`Csv`](OutputFormat::Csv) - per-author table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,

    /// Semicolon-delimited CSV
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::ReportFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::ReportFormat {
    fn from(format: OutputFormat) -> crate::format::ReportFormat {
        match format {
            OutputFormat::Text => crate::format::ReportFormat::Text,
            OutputFormat::Json => crate::format::ReportFormat::Json,
            OutputFormat::Csv => crate::format::ReportFormat::Csv,
        }
    }
}

/// Installs a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`; an unparseable directive falls
/// back to `warn`. Calling this twice is harmless: the second install is
/// ignored.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
