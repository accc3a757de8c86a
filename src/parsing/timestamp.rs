//! Date and time normalization for transcript timestamps.
//!
//! Exports differ by platform and locale: `15/01/2024`, `1/15/24`,
//! `2024-01-15`, `10:30`, `10:30:45 p.m.` all occur in the wild. Each
//! accepted shape is a [`DateLayout`] or [`TimeLayout`] variant, tried in a
//! fixed priority order; the first layout that parses wins.
//!
//! The order makes numeric dates ambiguous on purpose. `03/04/2024` is tried
//! as day/month first and therefore means 3 April 2024, never March 4th.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Calendar layouts, listed in priority order by [`DateLayout::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// Day/month/4-digit year.
    /// Example: `15/01/2024`
    DayMonthYear,
    /// Day/month/2-digit year.
    /// Example: `15/01/24`
    DayMonthShortYear,
    /// Month/day/2-digit year (US).
    /// Example: `1/15/24`
    MonthDayShortYear,
    /// Month/day/4-digit year (US).
    /// Example: `1/15/2024`
    MonthDayYear,
    /// ISO year-month-day.
    /// Example: `2024-01-15`
    YearMonthDay,
}

impl DateLayout {
    /// Returns all layouts in the order they are tried.
    pub fn all() -> &'static [DateLayout] {
        &[
            DateLayout::DayMonthYear,
            DateLayout::DayMonthShortYear,
            DateLayout::MonthDayShortYear,
            DateLayout::MonthDayYear,
            DateLayout::YearMonthDay,
        ]
    }

    /// Returns the chrono format string for this layout.
    pub fn chrono_format(self) -> &'static str {
        match self {
            DateLayout::DayMonthYear => "%d/%m/%Y",
            DateLayout::DayMonthShortYear => "%d/%m/%y",
            DateLayout::MonthDayShortYear => "%m/%d/%y",
            DateLayout::MonthDayYear => "%m/%d/%Y",
            DateLayout::YearMonthDay => "%Y-%m-%d",
        }
    }

    /// Returns the field shape a token must have for this layout.
    ///
    /// chrono's `%Y` happily reads a 2-digit year as year 24 AD, so the
    /// 4-digit layouts pin their year width here.
    fn shape(self) -> &'static str {
        match self {
            DateLayout::DayMonthYear | DateLayout::MonthDayYear => r"^\d{1,2}/\d{1,2}/\d{4}$",
            DateLayout::DayMonthShortYear | DateLayout::MonthDayShortYear => {
                r"^\d{1,2}/\d{1,2}/\d{2}$"
            }
            DateLayout::YearMonthDay => r"^\d{4}-\d{1,2}-\d{1,2}$",
        }
    }

    /// Parses `token` with this layout alone.
    pub fn parse(self, token: &str) -> Option<NaiveDate> {
        if !DATE_SHAPES[self as usize].is_match(token) {
            return None;
        }
        NaiveDate::parse_from_str(token, self.chrono_format()).ok()
    }
}

/// One compiled shape per [`DateLayout`], indexed by discriminant.
static DATE_SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DateLayout::all()
        .iter()
        .map(|layout| Regex::new(layout.shape()).expect("date shape pattern is valid"))
        .collect()
});

/// Time-of-day layouts, listed in priority order by [`TimeLayout::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// 24-hour clock.
    /// Example: `14:30`
    Clock24,
    /// 24-hour clock with seconds.
    /// Example: `14:30:15`
    Clock24Seconds,
    /// 12-hour clock.
    /// Example: `2:30 PM`
    Clock12,
    /// 12-hour clock with seconds.
    /// Example: `2:30:15 PM`
    Clock12Seconds,
    /// 24-hour clock followed by a meaningless AM/PM marker.
    /// Example: `14:30 PM`, `00:15 AM`
    Clock24Marked,
}

impl TimeLayout {
    /// Returns all layouts in the order they are tried.
    pub fn all() -> &'static [TimeLayout] {
        &[
            TimeLayout::Clock24,
            TimeLayout::Clock24Seconds,
            TimeLayout::Clock12,
            TimeLayout::Clock12Seconds,
            TimeLayout::Clock24Marked,
        ]
    }

    /// Returns the chrono format string for this layout.
    pub fn chrono_format(self) -> &'static str {
        match self {
            TimeLayout::Clock24 | TimeLayout::Clock24Marked => "%H:%M",
            TimeLayout::Clock24Seconds => "%H:%M:%S",
            TimeLayout::Clock12 => "%I:%M %p",
            TimeLayout::Clock12Seconds => "%I:%M:%S %p",
        }
    }

    /// Parses an already cleaned token (see [`clean_time_token`]) with this
    /// layout alone.
    pub fn parse(self, token: &str) -> Option<NaiveTime> {
        let token = match self {
            // chrono would cross-check %H against %p; the marker carries no
            // information here, so it is dropped before parsing.
            TimeLayout::Clock24Marked => token
                .strip_suffix("AM")
                .or_else(|| token.strip_suffix("PM"))?
                .trim_end(),
            _ => token,
        };
        NaiveTime::parse_from_str(token, self.chrono_format()).ok()
    }
}

/// Removes the periods of `a.m.`/`p.m.` markers and uppercases the token.
///
/// The gap before the marker is normalized to one ASCII space: iOS exports
/// use a narrow no-break space there and some exports use none at all.
pub fn clean_time_token(token: &str) -> String {
    let upper = token.replace('.', "").to_uppercase();
    match upper.strip_suffix("AM").or_else(|| upper.strip_suffix("PM")) {
        Some(clock) => format!("{} {}", clock.trim_end(), &upper[clock.len()..]),
        None => upper,
    }
}

/// Normalizes a date token, trying every [`DateLayout`] in order.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::parse_date;
/// use chrono::NaiveDate;
///
/// // Day/month wins over the US reading.
/// assert_eq!(parse_date("03/04/2024"), NaiveDate::from_ymd_opt(2024, 4, 3));
/// // Only valid as month/day.
/// assert_eq!(parse_date("1/15/24"), NaiveDate::from_ymd_opt(2024, 1, 15));
/// assert_eq!(parse_date("2024-01-15"), NaiveDate::from_ymd_opt(2024, 1, 15));
/// assert_eq!(parse_date("15-01-2024"), None);
/// ```
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    DateLayout::all()
        .iter()
        .find_map(|layout| layout.parse(token))
}

/// Normalizes a time token, trying every [`TimeLayout`] in order.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::parse_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time("14:30"), NaiveTime::from_hms_opt(14, 30, 0));
/// assert_eq!(parse_time("2:30 p.m."), NaiveTime::from_hms_opt(14, 30, 0));
/// assert_eq!(parse_time("12:05:09 am"), NaiveTime::from_hms_opt(0, 5, 9));
/// assert_eq!(parse_time("25:00"), None);
/// ```
pub fn parse_time(token: &str) -> Option<NaiveTime> {
    let cleaned = clean_time_token(token);
    TimeLayout::all()
        .iter()
        .find_map(|layout| layout.parse(&cleaned))
}
