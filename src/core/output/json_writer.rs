//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::ChatReport;
use crate::error::Result;

/// Writes the report to `output_path` as pretty-printed JSON.
pub fn write_json(report: &ChatReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
///
/// # Format
/// ```json
/// {
///   "total_messages": 3,
///   "shown_messages": 3,
///   "range": {"start": "2024-01-15", "end": "2024-01-17"},
///   "authors": [{"author": "Alice", "messages": 2, ...}],
///   "hours": [0, 0, ...],
///   ...
/// }
/// ```
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
