//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{info, warn};

use chatstats::ChatstatsError;
use chatstats::cli::{Args, setup_logging};
use chatstats::core::{ChatReport, apply_filters, filter_by_date};
use chatstats::format::{ReportFormat, render, write_to_format};
use chatstats::loader::TranscriptLoader;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatsError> {
    let start = Instant::now();
    let args = <Args as ClapParser>::parse();
    setup_logging(&args.log_level);

    // Validate arguments before touching the file
    let filter_config = args.filter_config()?;
    let report_config = args.report_config();
    let format: ReportFormat = args.format.into();

    let (messages, load_stats) = TranscriptLoader::new().load_with_stats(&args.input)?;
    if messages.is_empty() {
        println!(
            "No messages found in {} ({} lines read)",
            args.input.display(),
            load_stats.lines
        );
        return Ok(());
    }

    // Distinctive words are scored against the date window, before --author
    let window = filter_by_date(&messages, filter_config.from, filter_config.to);
    let shown = if filter_config.author.is_some() {
        apply_filters(&window, &filter_config)
    } else {
        window.clone()
    };

    let report = ChatReport::build_in_window(&messages, &window, &shown, &report_config);

    if let Some(author) = report_config
        .words_for
        .as_deref()
        .filter(|name| !window.iter().any(|msg| msg.author() == *name))
    {
        warn!(author = %author, "--words-for author has no messages in the window");
    }

    match args.output {
        Some(ref path) => {
            info!(path = %path.display(), %format, "writing report");
            write_to_format(&report, path, format)?;
            println!(
                "Report ({}) saved to {}: {} / {} messages",
                format,
                path.display(),
                report.shown_messages,
                report.total_messages
            );
        }
        None => print!("{}", render(&report, format)?),
    }

    info!(
        parsed = load_stats.parsed,
        skipped = load_stats.skipped,
        shown = report.shown_messages,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "done"
    );

    Ok(())
}
