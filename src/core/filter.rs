//! Filter messages by date window and author.
//!
//! [`filter_by_date`] is the plain windowing operation. [`FilterConfig`] and
//! [`apply_filters`] add the author filter and the `YYYY-MM-DD` argument
//! parsing the command line needs.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Messages from one author |
//!
//! # Examples
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::parsing::parse_line;
//!
//! # fn main() -> chatstats::Result<()> {
//! let messages: Vec<_> = [
//!     "01/01/2024, 12:00 - Alice: Old",
//!     "15/06/2024, 12:00 - Alice: New",
//!     "15/06/2024, 12:05 - Bob: Also new",
//! ]
//! .iter()
//! .filter_map(|line| parse_line(line))
//! .collect();
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_author("alice");
//!
//! let filtered = apply_filters(&messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Both date bounds are inclusive, whole days
//! - Author matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Messages dated within `[from, to]`, in their original order.
///
/// Either bound may be `None`; with both `None` the whole collection is
/// returned.
///
/// # Examples
///
/// ```
/// use chatstats::core::filter::filter_by_date;
/// use chatstats::parsing::parse_line;
/// use chrono::NaiveDate;
///
/// let messages: Vec<_> = ["01/01/2024, 12:00 - A: x", "05/01/2024, 12:00 - A: y"]
///     .iter()
///     .filter_map(|line| parse_line(line))
///     .collect();
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 5);
/// assert_eq!(filter_by_date(&messages, from, None).len(), 1);
/// assert_eq!(filter_by_date(&messages, None, None), messages);
/// ```
pub fn filter_by_date(
    messages: &[Message],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Message> {
    messages
        .iter()
        .filter(|msg| in_window(msg.date(), from, to))
        .cloned()
        .collect()
}

fn in_window(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
}

/// Configuration for filtering messages by date and author.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatstats::core::filter::FilterConfig;
///
/// # fn main() -> chatstats::Result<()> {
/// let by_author = FilterConfig::new().with_author("Alice");
///
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
///
/// assert!(by_author.is_active());
/// assert!(by_date.has_date_filter());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages on or after this date.
    pub from: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub to: Option<NaiveDate>,

    /// Include only messages from this author (case-insensitive).
    pub author: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.from = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.to = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Sets the author filter.
    ///
    /// Matching is case-insensitive for ASCII characters.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.author.is_some()
    }

    /// Returns `true` if a date bound is set.
    pub fn has_date_filter(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref author) = self.author {
            if !msg.author().eq_ignore_ascii_case(author) {
                return false;
            }
        }
        in_window(msg.date(), self.from, self.to)
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatsError::invalid_date(date_str))
}

/// Messages matching every active filter in `config`, in their original
/// order.
///
/// With no filter active this is a copy of `messages`.
pub fn apply_filters(messages: &[Message], config: &FilterConfig) -> Vec<Message> {
    if config.author.is_none() {
        return filter_by_date(messages, config.from, config.to);
    }

    messages
        .iter()
        .filter(|msg| config.matches(msg))
        .cloned()
        .collect()
}
