//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::ChatReport;
use crate::error::Result;

const HEADER: [&str; 4] = ["Author", "Messages", "Share", "AvgLength"];

/// Writes the per-author table to `output_path` with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Author`, `Messages`, `Share`, `AvgLength`
/// - `Share` is a percentage and `AvgLength` a character count, both with
///   two decimals
/// - Encoding: UTF-8
pub fn write_csv(report: &ChatReport, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(report, file)
}

/// Converts the per-author table to a CSV string.
pub fn to_csv(report: &ChatReport) -> Result<String> {
    let mut buf = Vec::new();
    write_records(report, &mut buf)?;
    // csv only emits the UTF-8 it was given
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_records<W: Write>(report: &ChatReport, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for row in &report.authors {
        writer.write_record([
            row.author.clone(),
            row.messages.to_string(),
            format!("{:.2}", row.share_percent),
            format!("{:.2}", row.avg_length),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
