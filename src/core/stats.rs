//! Aggregate statistics over a message collection.
//!
//! Every function here is a pure read over `&[Message]`: nothing is mutated,
//! nothing is cached between calls, and every function is total. Empty input
//! yields empty maps, or `None` where a single answer is asked for.
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`date_range`] | earliest and latest date |
//! | [`count_by_author`] | messages per author |
//! | [`count_by_hour`] | messages per hour of day |
//! | [`count_by_weekday`] | messages per weekday, Spanish names |
//! | [`avg_length_by_author`] | mean body length per author, in characters |
//! | [`busiest_day`] | the date with the most messages |
//!
//! # Example
//!
//! ```rust
//! use chatstats::core::stats::{busiest_day, count_by_author};
//! use chatstats::parsing::parse_line;
//!
//! let messages: Vec<_> = [
//!     "15/01/2024, 10:30 - Alice: Hello",
//!     "15/01/2024, 10:31 - Bob: Hi",
//!     "16/01/2024, 09:00 - Alice: Morning",
//! ]
//! .iter()
//! .filter_map(|line| parse_line(line))
//! .collect();
//!
//! assert_eq!(count_by_author(&messages)["Alice"], 2);
//! let (day, count) = busiest_day(&messages).unwrap();
//! assert_eq!(day.to_string(), "2024-01-15");
//! assert_eq!(count, 2);
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::Message;

/// Weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// Returns the display name of a weekday.
///
/// ```rust
/// use chatstats::core::stats::weekday_name;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_name(Weekday::Mon), "Lunes");
/// assert_eq!(weekday_name(Weekday::Sun), "Domingo");
/// ```
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Earliest and latest message date, or `None` for an empty collection.
///
/// The collection is scanned; it does not need to be sorted.
pub fn date_range(messages: &[Message]) -> Option<(NaiveDate, NaiveDate)> {
    messages.iter().map(Message::date).fold(None, |acc, date| match acc {
        None => Some((date, date)),
        Some((lo, hi)) => Some((lo.min(date), hi.max(date))),
    })
}

/// Number of messages per author.
pub fn count_by_author(messages: &[Message]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for msg in messages {
        *counts.entry(msg.author().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Number of messages per hour of day (0-23).
///
/// Hours without messages have no entry.
pub fn count_by_hour(messages: &[Message]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for msg in messages {
        *counts.entry(msg.hour()).or_insert(0) += 1;
    }
    counts
}

/// Number of messages per hour of day, with every hour present.
pub fn count_by_hour_dense(messages: &[Message]) -> [usize; 24] {
    let mut counts = [0; 24];
    for msg in messages {
        counts[msg.hour() as usize] += 1;
    }
    counts
}

/// Number of messages per weekday, keyed by [`WEEKDAY_NAMES`].
///
/// Days without messages have no entry.
pub fn count_by_weekday(messages: &[Message]) -> HashMap<&'static str, usize> {
    let mut counts = HashMap::new();
    for msg in messages {
        *counts.entry(weekday_name(msg.weekday())).or_insert(0) += 1;
    }
    counts
}

/// Mean body length per author, in characters.
pub fn avg_length_by_author(messages: &[Message]) -> HashMap<String, f64> {
    let mut totals: HashMap<&str, (usize, usize)> = HashMap::new();
    for msg in messages {
        let entry = totals.entry(msg.author()).or_insert((0, 0));
        entry.0 += msg.char_count();
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(author, (chars, count))| (author.to_string(), chars as f64 / count as f64))
        .collect()
}

/// The date with the most messages and its count.
///
/// When several dates tie, the one that appears first in `messages` wins.
pub fn busiest_day(messages: &[Message]) -> Option<(NaiveDate, usize)> {
    let mut order = Vec::new();
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for msg in messages {
        let count = counts.entry(msg.date()).or_insert(0);
        if *count == 0 {
            order.push(msg.date());
        }
        *count += 1;
    }

    let mut best: Option<(NaiveDate, usize)> = None;
    for date in order {
        let count = counts[&date];
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((date, count));
        }
    }
    best
}

/// Distinct authors, in order of their first message.
pub fn authors_in_order(messages: &[Message]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for msg in messages {
        if seen.insert(msg.author()) {
            order.push(msg.author());
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn msg(date: &str, hour: u32, author: &str, text: &str) -> Message {
        Message::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            author,
            text,
        )
    }

    fn sample() -> Vec<Message> {
        vec![
            msg("2024-01-02", 10, "Alice", "Hola"),
            msg("2024-01-01", 22, "Bob", "Qué tal"),
            msg("2024-01-08", 10, "Alice", "Bien"),
            msg("2024-01-02", 9, "Carol", "ok"),
        ]
    }

    #[test]
    fn test_date_range_unsorted() {
        let range = date_range(&sample()).unwrap();
        assert_eq!(range.0.to_string(), "2024-01-01");
        assert_eq!(range.1.to_string(), "2024-01-08");
    }

    #[test]
    fn test_date_range_empty() {
        assert_eq!(date_range(&[]), None);
    }

    #[test]
    fn test_count_by_author() {
        let counts = count_by_author(&sample());
        assert_eq!(counts.len(), 3);
        assert_eq!(counts["Alice"], 2);
        assert_eq!(counts["Bob"], 1);
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_count_by_hour() {
        let counts = count_by_hour(&sample());
        assert_eq!(counts.get(&10), Some(&2));
        assert_eq!(counts.get(&22), Some(&1));
        assert_eq!(counts.get(&0), None);
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![9, 10, 22]);
    }

    #[test]
    fn test_count_by_hour_dense() {
        let counts = count_by_hour_dense(&sample());
        assert_eq!(counts[10], 2);
        assert_eq!(counts[0], 0);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }

    #[test]
    fn test_count_by_weekday() {
        let messages = vec![
            msg("2024-01-01", 8, "A", "x"),
            msg("2024-01-08", 8, "A", "x"),
            msg("2024-01-02", 8, "A", "x"),
        ];
        let counts = count_by_weekday(&messages);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Lunes"], 2);
        assert_eq!(counts["Martes"], 1);
        assert!(!counts.contains_key("Miércoles"));
    }

    #[test]
    fn test_avg_length_counts_characters() {
        let avg = avg_length_by_author(&sample());
        assert!((avg["Alice"] - 4.0).abs() < f64::EPSILON);
        // "Qué tal" is 7 characters and 8 bytes
        assert!((avg["Bob"] - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_busiest_day() {
        let (day, count) = busiest_day(&sample()).unwrap();
        assert_eq!(day.to_string(), "2024-01-02");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_busiest_day_tie_goes_to_first_seen() {
        let messages = vec![
            msg("2024-03-05", 8, "A", "x"),
            msg("2024-03-01", 8, "A", "x"),
            msg("2024-03-01", 8, "A", "x"),
            msg("2024-03-05", 8, "A", "x"),
        ];
        let (day, count) = busiest_day(&messages).unwrap();
        assert_eq!(day.to_string(), "2024-03-05");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_busiest_day_empty() {
        assert_eq!(busiest_day(&[]), None);
    }

    #[test]
    fn test_authors_in_order() {
        assert_eq!(authors_in_order(&sample()), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_authors_in_order_interleaved_repeats() {
        let messages: Vec<Message> = (0..300)
            .map(|i| {
                let author = ["Carol", "Alice", "Bob"][i % 3];
                msg("2024-01-01", 10, author, "x")
            })
            .collect();
        assert_eq!(authors_in_order(&messages), vec!["Carol", "Alice", "Bob"]);
        assert!(authors_in_order(&[]).is_empty());
    }

    #[test]
    fn test_weekday_names_cover_week() {
        assert_eq!(weekday_name(Weekday::Wed), "Miércoles");
        assert_eq!(weekday_name(Weekday::Sat), "Sábado");
    }
}
