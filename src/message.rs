//! The normalized chat message.
//!
//! [`Message`] is the only record the rest of the crate works with. The line
//! parser produces it, the aggregation functions consume it, and nothing ever
//! mutates it after construction.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let msg = Message::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
//!     "Alice",
//!     "Hello: world",
//! );
//!
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.text(), "Hello: world");
//! assert_eq!(msg.hour(), 10);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatstats::Message;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let msg = Message::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
//!     "Alice",
//!     "Hello!",
//! );
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains("\"date\":\"2024-01-15\""));
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// A single chat entry from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `NaiveDate` | Calendar date, no timezone |
/// | `time` | `NaiveTime` | Time of day, seconds default to zero |
/// | `author` | `String` | Display name of the sender |
/// | `text` | `String` | Message body, may contain further colons |
///
/// Fields are private so a message cannot change once built; use the
/// accessors to read them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    date: NaiveDate,
    time: NaiveTime,
    author: String,
    text: String,
}

impl Message {
    /// Creates a message from already-normalized parts.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time,
            author: author.into(),
            text: text.into(),
        }
    }

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the author's display name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Day of the week the message was sent on.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Length of the body in characters (Unicode scalar values, not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Message {
        Message::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(23, 5, 9).unwrap(),
            "Usuario1",
            "Adiós: hasta mañana",
        )
    }

    #[test]
    fn test_message_accessors() {
        let msg = sample();
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(msg.time(), NaiveTime::from_hms_opt(23, 5, 9).unwrap());
        assert_eq!(msg.author(), "Usuario1");
        assert_eq!(msg.text(), "Adiós: hasta mañana");
    }

    #[test]
    fn test_message_derived_fields() {
        let msg = sample();
        assert_eq!(msg.hour(), 23);
        assert_eq!(msg.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_char_count_is_not_byte_length() {
        let msg = sample();
        assert_eq!(msg.char_count(), 19);
        assert!(msg.text().len() > msg.char_count());
    }

    #[test]
    fn test_message_serialization() {
        let msg = sample();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"author\":\"Usuario1\""));
        assert!(json.contains("\"time\":\"23:05:09\""));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
