//! A complete statistics report for one date window.
//!
//! [`ChatReport`] bundles every aggregate the writers render. It is built from
//! the whole transcript (for totals and the overall date range) and the
//! messages shown after filtering (for everything else). Distinctive words
//! are scored against the date window, so narrowing `shown` to one author
//! still subtracts everyone else's vocabulary.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::Message;
use crate::config::ReportConfig;

use super::stats::{
    authors_in_order, avg_length_by_author, busiest_day, count_by_author, count_by_hour_dense,
    count_by_weekday, date_range, weekday_name,
};
use super::words::distinctive_words;

/// Inclusive date span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateSpan {
    /// First day
    pub start: NaiveDate,
    /// Last day
    pub end: NaiveDate,
}

impl From<(NaiveDate, NaiveDate)> for DateSpan {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        Self { start, end }
    }
}

/// Per-author summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorStats {
    /// Display name
    pub author: String,
    /// Messages in the window
    pub messages: usize,
    /// Share of the window's messages, 0-100
    pub share_percent: f64,
    /// Mean body length in characters
    pub avg_length: f64,
}

/// Message count for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    /// Weekday name
    pub day: &'static str,
    /// Messages sent on that weekday
    pub messages: usize,
}

/// The busiest date and its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusiestDay {
    /// Date
    pub date: NaiveDate,
    /// Messages sent that day
    pub messages: usize,
}

/// Top distinctive words of one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorWords {
    /// Display name
    pub author: String,
    /// `(word, score)` pairs, best first
    pub words: Vec<(String, i64)>,
}

/// Every statistic for one window of a transcript.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ReportConfig;
/// use chatstats::core::report::ChatReport;
/// use chatstats::parsing::parse_line;
///
/// let all: Vec<_> = [
///     "15/01/2024, 10:30 - Alice: Hello there",
///     "15/01/2024, 10:31 - Bob: Hi",
///     "16/01/2024, 09:00 - Alice: Morning",
/// ]
/// .iter()
/// .filter_map(|line| parse_line(line))
/// .collect();
///
/// let report = ChatReport::build(&all, &all, &ReportConfig::new());
/// assert_eq!(report.total_messages, 3);
/// assert_eq!(report.authors[0].author, "Alice");
/// assert_eq!(report.hours[10], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    /// Messages in the whole transcript
    pub total_messages: usize,
    /// Messages in the window
    pub shown_messages: usize,
    /// Date span of the whole transcript
    pub range: Option<DateSpan>,
    /// Date span of the window
    pub window: Option<DateSpan>,
    /// Per-author rows, most active first
    pub authors: Vec<AuthorStats>,
    /// Messages per hour of day, index 0-23
    pub hours: [usize; 24],
    /// Messages per weekday, Monday first, including empty days
    pub weekdays: Vec<WeekdayCount>,
    /// Date with the most messages in the window
    pub busiest_day: Option<BusiestDay>,
    /// Distinctive words per author
    pub distinctive_words: Vec<AuthorWords>,
}

impl ChatReport {
    /// Computes every statistic over `shown`, with totals taken from `all`.
    ///
    /// Distinctive words are scored over `shown` too. Use
    /// [`build_in_window`](Self::build_in_window) when `shown` is narrower
    /// than the date window.
    pub fn build(all: &[Message], shown: &[Message], config: &ReportConfig) -> Self {
        Self::build_in_window(all, shown, shown, config)
    }

    /// Like [`build`](Self::build), but scores distinctive words over
    /// `window`, the date-filtered messages before any author filter.
    ///
    /// `shown` is expected to be a subset of `window`.
    pub fn build_in_window(
        all: &[Message],
        window: &[Message],
        shown: &[Message],
        config: &ReportConfig,
    ) -> Self {
        let order = authors_in_order(shown);
        let counts = count_by_author(shown);
        let averages = avg_length_by_author(shown);
        let total = shown.len();

        let mut authors: Vec<AuthorStats> = order
            .iter()
            .map(|&author| {
                let messages = counts.get(author).copied().unwrap_or(0);
                AuthorStats {
                    author: author.to_string(),
                    messages,
                    share_percent: percent(messages, total),
                    avg_length: averages.get(author).copied().unwrap_or(0.0),
                }
            })
            .collect();
        authors.sort_by(|a, b| b.messages.cmp(&a.messages));

        let by_weekday = count_by_weekday(shown);
        let weekdays = WEEK
            .iter()
            .map(|&day| {
                let name = weekday_name(day);
                WeekdayCount {
                    day: name,
                    messages: by_weekday.get(name).copied().unwrap_or(0),
                }
            })
            .collect();

        let word_authors: Vec<&str> = match config.words_for.as_deref() {
            Some(author) => vec![author],
            None => order.clone(),
        };
        let distinctive_words = word_authors
            .into_iter()
            .map(|author| AuthorWords {
                author: author.to_string(),
                words: distinctive_words(window, author, config.top_words),
            })
            .collect();

        Self {
            total_messages: all.len(),
            shown_messages: total,
            range: date_range(all).map(DateSpan::from),
            window: date_range(shown).map(DateSpan::from),
            authors,
            hours: count_by_hour_dense(shown),
            weekdays,
            busiest_day: busiest_day(shown).map(|(date, messages)| BusiestDay { date, messages }),
            distinctive_words,
        }
    }

    /// Returns `true` if the window holds no messages.
    pub fn is_empty(&self) -> bool {
        self.shown_messages == 0
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
