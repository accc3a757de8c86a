//! Core processing logic for chatstats.
//!
//! This module contains:
//! - [`stats`] - Counting and averaging over message collections
//! - [`filter`] - Message filtering by date window and author
//! - [`words`] - Distinctive-word scoring
//! - [`report`] - All statistics for one window, ready to render
//! - [`output`] - Report writers (text, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{
//!     ChatReport, FilterConfig, apply_filters, count_by_author, date_range, to_text,
//! };
//! use chatstats::config::ReportConfig;
//! use chatstats::parsing::parse_line;
//!
//! let all: Vec<_> = ["15/01/2024, 10:30 - Alice: Hello", "16/01/2024, 09:00 - Bob: Hi"]
//!     .iter()
//!     .filter_map(|line| parse_line(line))
//!     .collect();
//!
//! let shown = apply_filters(&all, &FilterConfig::new().with_author("bob"));
//! assert_eq!(count_by_author(&shown).len(), 1);
//! assert!(date_range(&all).is_some());
//!
//! let report = ChatReport::build(&all, &shown, &ReportConfig::new());
//! assert!(to_text(&report).contains("1 / 2"));
//! ```

pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod words;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters, filter_by_date};
pub use report::{AuthorStats, AuthorWords, BusiestDay, ChatReport, DateSpan, WeekdayCount};
pub use stats::{
    WEEKDAY_NAMES, authors_in_order, avg_length_by_author, busiest_day, count_by_author,
    count_by_hour, count_by_hour_dense, count_by_weekday, date_range, weekday_name,
};
pub use words::distinctive_words;

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
pub use output::{to_text, write_text};
