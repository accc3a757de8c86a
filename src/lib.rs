//! # Chatstats
//!
//! A Rust library for turning plain-text chat transcripts into activity
//! statistics.
//!
//! ## Overview
//!
//! Chatstats reads the text exports messaging apps produce, one message per
//! line:
//!
//! ```text
//! 15/01/2024, 10:30 - Alice: Hello everyone!
//! [15/01/2024, 10:31:12] Bob: Hi: how are you?
//! 1/15/24, 9:05 p.m. - Carol: late again
//! ```
//!
//! Lines that don't start a message (the second line of a multi-line message,
//! system notices) are skipped. The resulting [`Message`] collection feeds a
//! set of pure aggregation functions: date range, messages per author, hour
//! and weekday, average message length, busiest day and distinctive words.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let messages = load("chat.txt")?;
//!
//!     if let Some((first, last)) = date_range(&messages) {
//!         println!("{first} .. {last}");
//!     }
//!     for (author, count) in count_by_author(&messages) {
//!         println!("{author}: {count}");
//!     }
//!
//!     let report = ChatReport::build(&messages, &messages, &ReportConfig::new());
//!     println!("{}", to_text(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] — [`Message`], the normalized chat entry
//! - [`parsing`] — single-line parser and timestamp layouts
//!   - [`LineParser`](parsing::LineParser), [`parse_line`](parsing::parse_line)
//!   - [`DateLayout`](parsing::DateLayout), [`TimeLayout`](parsing::TimeLayout)
//! - [`loader`] — [`TranscriptLoader`](loader::TranscriptLoader), [`load`]
//! - [`core`] — aggregation and reporting
//!   - [`core::stats`] — counts, averages, date range, busiest day
//!   - [`core::filter`] — [`filter_by_date`](core::filter_by_date), [`FilterConfig`](core::FilterConfig)
//!   - [`core::words`] — [`distinctive_words`](core::distinctive_words)
//!   - [`core::report`] — [`ChatReport`](core::ChatReport)
//!   - [`core::output`] — text, JSON and CSV writers
//! - [`format`] — [`ReportFormat`](format::ReportFormat) and format dispatch
//! - [`config`] — [`ParserConfig`](config::ParserConfig), [`ReportConfig`](config::ReportConfig)
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] — Convenient re-exports
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `json-output` | yes | JSON report writer |
//! | `csv-output` | yes | CSV author table |
//! | `cli` | yes | the `chatstats` binary |
//! | `gen-test` | no | the `gen_test` transcript generator |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod loader;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use loader::load;
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Loading
    pub use crate::config::{ParserConfig, ReportConfig};
    pub use crate::loader::{LoadStats, TranscriptLoader, load};
    pub use crate::parsing::{LineParser, parse_line};

    // Aggregation
    pub use crate::core::filter::{FilterConfig, apply_filters, filter_by_date};
    pub use crate::core::stats::{
        avg_length_by_author, busiest_day, count_by_author, count_by_hour, count_by_weekday,
        date_range,
    };
    pub use crate::core::words::distinctive_words;

    // Reporting
    pub use crate::core::output::{to_text, write_text};
    pub use crate::core::report::ChatReport;
    pub use crate::format::{ReportFormat, render, write_to_format};
}
