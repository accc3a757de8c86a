//! Single-line transcript parser.
//!
//! A transcript line that starts a message looks like one of:
//!
//! - Android: `15/01/2024, 10:30 - Alice: Hello`
//! - iOS: `[15/01/2024, 10:30:45] Alice: Hello`
//! - US: `1/15/24, 9:05 p.m. - Bob: Hi`
//!
//! One structural pattern covers them all; the decoration around the
//! timestamp (brackets, dash, colon) is optional. Anything that does not match
//! (the second line of a multi-line message, a system notice without an
//! author) is rejected with `None`. Rejection is the expected outcome for a
//! good share of lines and is never reported as an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;
use crate::config::ParserConfig;

use super::timestamp::{parse_date, parse_time};

/// Structure of a message line.
///
/// 1. `^\[?` optional opening bracket (iOS)
/// 2. date token, `/` or `-` separated
/// 3. `[,\s]+` date/time separator
/// 4. time token with optional seconds and AM/PM marker, in either case
/// 5. `\]?:?[\s-]*` optional closing bracket, colon and dash
/// 6. `(.*?):` author, shortest match up to the next colon
/// 7. `\s(.*)$` mandatory space, then the body
const LINE_PATTERN: &str = concat!(
    r"^\[?(\d{1,4}[/-]\d{1,2}[/-]\d{1,4})[,\s]+",
    r"(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[apAP]\.?[mM]\.?)?)\]?:?[\s-]*",
    r"(.*?):\s(.*)$",
);

static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is valid"));

/// Raw captures of a line that has the shape of a message.
///
/// Nothing is normalized yet; [`LineParser::parse`] does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    /// Date token, e.g. `15/01/2024`
    pub date: &'a str,
    /// Time token, e.g. `10:30 p.m.`
    pub time: &'a str,
    /// Author token
    pub author: &'a str,
    /// Message body
    pub text: &'a str,
}

/// Splits a line into its raw parts, or `None` if it lacks message structure.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::split_line;
///
/// let parts = split_line("[1/15/24, 10:30:45 AM] Alice: see: this").unwrap();
/// assert_eq!(parts.date, "1/15/24");
/// assert_eq!(parts.time, "10:30:45 AM");
/// assert_eq!(parts.author, "Alice");
/// assert_eq!(parts.text, "see: this");
///
/// assert!(split_line("just a continuation line").is_none());
/// ```
pub fn split_line(line: &str) -> Option<LineParts<'_>> {
    let caps = LINE_REGEX.captures(line)?;
    Some(LineParts {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        author: caps.get(3)?.as_str(),
        text: caps.get(4)?.as_str(),
    })
}

/// Turns transcript lines into [`Message`]s.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::LineParser;
/// use chatstats::config::ParserConfig;
///
/// let parser = LineParser::new();
/// let msg = parser.parse("15/01/2024, 10:30 - Alice: Hello").unwrap();
/// assert_eq!(msg.author(), "Alice");
///
/// let strict = LineParser::with_config(ParserConfig::new().with_max_author_len(3));
/// assert!(strict.parse("15/01/2024, 10:30 - Alice: Hello").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one stripped, non-empty line.
    ///
    /// Returns `None` when the line has no message structure, the author is
    /// empty or longer than [`ParserConfig::max_author_len`], or either the
    /// date or the time token matches no known layout.
    pub fn parse(&self, line: &str) -> Option<Message> {
        let parts = split_line(line)?;

        if parts.author.trim().is_empty()
            || parts.author.chars().count() > self.config.max_author_len
        {
            return None;
        }

        let date = parse_date(parts.date)?;
        let time = parse_time(parts.time)?;

        Some(Message::new(date, time, parts.author, parts.text))
    }
}

/// Parses one line with the default configuration.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::parse_line;
/// use chrono::NaiveDate;
///
/// let msg = parse_line("03/04/2024, 21:15 - Ana: hola").unwrap();
/// assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
/// ```
pub fn parse_line(line: &str) -> Option<Message> {
    LineParser::new().parse(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_android_line() {
        let msg = parse_line("15/01/2024, 10:30 - Alice: Hello everyone!").unwrap();
        assert_eq!(msg.date(), date(2024, 1, 15));
        assert_eq!(msg.time(), time(10, 30, 0));
        assert_eq!(msg.author(), "Alice");
        assert_eq!(msg.text(), "Hello everyone!");
    }

    #[test]
    fn test_ios_bracketed_line() {
        let msg = parse_line("[15/01/2024, 10:30:45] Bob: Hi there").unwrap();
        assert_eq!(msg.time(), time(10, 30, 45));
        assert_eq!(msg.author(), "Bob");
        assert_eq!(msg.text(), "Hi there");
    }

    #[test]
    fn test_us_line_with_marker() {
        let msg = parse_line("[1/15/24, 10:30:45 PM] Alice: Hello").unwrap();
        assert_eq!(msg.date(), date(2024, 1, 15));
        assert_eq!(msg.time(), time(22, 30, 45));

        let msg = parse_line("1/15/24, 9:05 p.m. - Bob: Hi").unwrap();
        assert_eq!(msg.time(), time(21, 5, 0));
    }

    #[test]
    fn test_iso_date_line() {
        let msg = parse_line("2024-01-15 08:00: Carol: morning").unwrap();
        assert_eq!(msg.date(), date(2024, 1, 15));
        assert_eq!(msg.author(), "Carol");
        assert_eq!(msg.text(), "morning");
    }

    #[test]
    fn test_ambiguous_date_resolves_day_first() {
        let msg = parse_line("03/04/2024, 12:00 - Ana: hola").unwrap();
        assert_eq!(msg.date(), date(2024, 4, 3));
    }

    #[test]
    fn test_body_keeps_further_colons() {
        let msg = parse_line("15/01/2024, 10:30 - Alice: note: meet at 10:45").unwrap();
        assert_eq!(msg.author(), "Alice");
        assert_eq!(msg.text(), "note: meet at 10:45");
    }

    #[test]
    fn test_author_with_spaces_and_symbols() {
        let msg = parse_line("15/01/2024, 10:30 - +34 600 11 22 33: ok").unwrap();
        assert_eq!(msg.author(), "+34 600 11 22 33");

        let msg = parse_line("15/01/2024, 10:30 - José Ñúñez 🎉: ok").unwrap();
        assert_eq!(msg.author(), "José Ñúñez 🎉");
    }

    #[test]
    fn test_uppercase_marker_stays_in_time_token() {
        let parts = split_line("1/15/24, 9:05 AM - Alice: hi").unwrap();
        assert_eq!(parts.time, "9:05 AM");
        assert_eq!(parts.author, "Alice");

        let parts = split_line("1/15/24, 9:05\u{202f}PM - Alice: hi").unwrap();
        assert_eq!(parts.author, "Alice");
        assert_eq!(parse_line("1/15/24, 9:05\u{202f}PM - Alice: hi").unwrap().hour(), 21);
    }

    #[test]
    fn test_continuation_line_rejected() {
        assert!(parse_line("and this is the second line of a message").is_none());
        assert!(parse_line("Meeting at 10:30: bring snacks").is_none());
    }

    #[test]
    fn test_system_line_without_author_rejected() {
        assert!(
            parse_line("15/01/2024, 10:30 - Messages and calls are end-to-end encrypted.")
                .is_none()
        );
        assert!(parse_line("15/01/2024, 10:30 - Alice created group \"Trip\"").is_none());
    }

    #[test]
    fn test_colon_without_space_rejected() {
        assert!(parse_line("15/01/2024, 10:30 - Alice:no space").is_none());
    }

    #[test]
    fn test_author_length_limit() {
        let author = "a".repeat(50);
        let line = format!("15/01/2024, 10:30 - {author}: hi");
        assert!(parse_line(&line).is_some());

        let author = "a".repeat(51);
        let line = format!("15/01/2024, 10:30 - {author}: hi");
        assert!(parse_line(&line).is_none());
    }

    #[test]
    fn test_author_limit_counts_characters() {
        // 50 two-byte characters are still 50 characters.
        let author = "ñ".repeat(50);
        let line = format!("15/01/2024, 10:30 - {author}: hi");
        assert!(parse_line(&line).is_some());
    }

    #[test]
    fn test_empty_author_rejected() {
        assert!(parse_line("15/01/2024, 10:30: hi").is_none());
    }

    #[test]
    fn test_invalid_date_or_time_rejects_line() {
        assert!(parse_line("31/02/2024, 10:30 - Alice: hi").is_none());
        assert!(parse_line("2024/01/15, 10:30 - Alice: hi").is_none());
        assert!(parse_line("15/01/2024, 27:30 - Alice: hi").is_none());
    }

    #[test]
    fn test_split_line_parts() {
        let parts = split_line("15/01/2024 10:30 Alice: Hi").unwrap();
        assert_eq!(
            parts,
            LineParts {
                date: "15/01/2024",
                time: "10:30",
                author: "Alice",
                text: "Hi",
            }
        );
    }

    #[test]
    fn test_custom_author_limit() {
        let parser = LineParser::with_config(ParserConfig::new().with_max_author_len(5));
        assert!(parser.parse("15/01/2024, 10:30 - Alice: hi").is_some());
        assert!(parser.parse("15/01/2024, 10:30 - Alicia: hi").is_none());
    }
}
