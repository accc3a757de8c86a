//! Report writers.
//!
//! This module provides writers for different output formats:
//! - [`write_text`] / [`to_text`] - human-readable report, always available
//! - [`write_json`] / [`to_json`] - the whole report as JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-author table with semicolon delimiter - requires `csv-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Contents | Use Case |
//! |--------|----------|----------|
//! | Text | every section | terminal |
//! | JSON | every section | scripts, dashboards |
//! | CSV | per-author table | spreadsheets |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::ReportConfig;
//! use chatstats::core::output::{to_text, write_csv, write_json};
//! use chatstats::core::report::ChatReport;
//!
//! let messages = chatstats::load("chat.txt")?;
//! let report = ChatReport::build(&messages, &messages, &ReportConfig::new());
//!
//! write_csv(&report, "authors.csv")?;
//! write_json(&report, "report.json")?;
//! println!("{}", to_text(&report));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
