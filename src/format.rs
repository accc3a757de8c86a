//! Report format types for the chatstats library.
//!
//! These types don't depend on the CLI framework; the binary maps its
//! `--format` flag onto [`ReportFormat`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::config::ReportConfig;
//! use chatstats::core::report::ChatReport;
//! use chatstats::format::{ReportFormat, render};
//!
//! let report = ChatReport::build(&[], &[], &ReportConfig::new());
//!
//! // Detect the format from the output file name
//! let format = ReportFormat::from_path("report.json")?;
//! assert_eq!(format, ReportFormat::Json);
//!
//! let json = render(&report, format)?;
//! assert!(json.contains("\"total_messages\": 0"));
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::report::ChatReport;
use crate::error::{ChatstatsError, Result};

/// Output format for reports.
///
/// - [`Text`](ReportFormat::Text) - every section, for reading in a terminal
/// - [`Json`](ReportFormat::Json) - every section, machine-readable
/// - [`Csv`](ReportFormat::Csv) - the per-author table only
///
/// # Example
///
/// ```rust
/// use chatstats::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("csv").unwrap();
/// assert_eq!(format, ReportFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Human-readable text (default)
    #[default]
    Text,

    /// Pretty-printed JSON of the whole report
    Json,

    /// Per-author CSV with semicolon delimiter
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json, ReportFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path("out/report.TXT").unwrap(), ReportFormat::Text);
    /// assert!(ReportFormat::from_path("report.xml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatstatsError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }

    /// Cargo feature that enables this format, if any.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            ReportFormat::Text => None,
            ReportFormat::Json => Some("json-output"),
            ReportFormat::Csv => Some("csv-output"),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report as a string in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - Serialization fails
pub fn render(report: &ChatReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(crate::core::output::to_text(report)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::core::output::to_csv(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Writes a report to a file in the specified format.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> chatstats::Result<()> {
/// use chatstats::config::ReportConfig;
/// use chatstats::core::report::ChatReport;
/// use chatstats::format::{ReportFormat, write_to_format};
///
/// let messages = chatstats::load("chat.txt")?;
/// let report = ChatReport::build(&messages, &messages, &ReportConfig::new());
/// write_to_format(&report, "authors.csv", ReportFormat::Csv)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    report: &ChatReport,
    path: impl AsRef<Path>,
    format: ReportFormat,
) -> Result<()> {
    let content = render(report, format)?;
    fs::write(path, content)?;
    Ok(())
}

fn missing_feature(format: ReportFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature().unwrap_or("default"),
        ),
    )
}
