//! Plain-text report writer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::report::{ChatReport, DateSpan};
use crate::error::Result;

const DATE_FORMAT: &str = "%d/%m/%Y";
const BAR_WIDTH: usize = 30;

/// Writes the report as text to `output_path`.
pub fn write_text(report: &ChatReport, output_path: impl AsRef<Path>) -> Result<()> {
    fs::write(output_path, to_text(report))?;
    Ok(())
}

/// Renders the report as human-readable text.
///
/// Dates are printed day first (`15/01/2024`). Hour and weekday histograms
/// are drawn with `#` bars scaled to the largest bucket.
pub fn to_text(report: &ChatReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = render(report, &mut out);
    out
}

fn render(report: &ChatReport, out: &mut String) -> std::fmt::Result {
    writeln!(out, "Chat statistics")?;
    writeln!(out, "===============")?;
    if let Some(range) = report.range {
        writeln!(out, "Range:     {}", span(range))?;
    }
    if let Some(window) = report.window {
        writeln!(out, "Window:    {}", span(window))?;
    }
    writeln!(
        out,
        "Showing:   {} / {} messages",
        report.shown_messages, report.total_messages
    )?;

    if report.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Messages per author")?;
    writeln!(out, "-------------------")?;
    let name_width = report
        .authors
        .iter()
        .map(|a| a.author.chars().count())
        .max()
        .unwrap_or(0);
    for row in &report.authors {
        writeln!(
            out,
            "{:<name_width$}  {:>6}  {:>5.1}%  avg {:.1} chars",
            row.author, row.messages, row.share_percent, row.avg_length,
        )?;
    }

    if let Some(busiest) = report.busiest_day {
        writeln!(out)?;
        writeln!(
            out,
            "Busiest day: {} ({} messages)",
            busiest.date.format(DATE_FORMAT),
            busiest.messages
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Messages per hour")?;
    writeln!(out, "-----------------")?;
    let hour_max = report.hours.iter().copied().max().unwrap_or(0);
    for (hour, &count) in report.hours.iter().enumerate() {
        writeln!(out, "{hour:02}h  {:>6}  {}", count, bar(count, hour_max))?;
    }

    writeln!(out)?;
    writeln!(out, "Messages per weekday")?;
    writeln!(out, "--------------------")?;
    let day_max = report.weekdays.iter().map(|d| d.messages).max().unwrap_or(0);
    for day in &report.weekdays {
        // Pad by characters, not bytes: "Miércoles" and "Sábado" are not ASCII.
        let pad = 9usize.saturating_sub(day.day.chars().count());
        writeln!(
            out,
            "{}{}  {:>6}  {}",
            day.day,
            " ".repeat(pad),
            day.messages,
            bar(day.messages, day_max)
        )?;
    }

    for entry in &report.distinctive_words {
        writeln!(out)?;
        writeln!(out, "Distinctive words: {}", entry.author)?;
        if entry.words.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (word, score) in &entry.words {
            writeln!(out, "  {word}: {score}")?;
        }
    }

    Ok(())
}

fn span(span: DateSpan) -> String {
    format!(
        "{} - {}",
        span.start.format(DATE_FORMAT),
        span.end.format(DATE_FORMAT)
    )
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(max))
}
