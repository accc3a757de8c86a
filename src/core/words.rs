//! Distinctive-word scoring.
//!
//! A word is distinctive for an author when they use it more often than
//! everyone else combined. Every text is lowercased and split on whitespace;
//! each occurrence scores +1 in the author's messages and -1 in anyone
//! else's. No stop-word list, no punctuation stripping: `hola` and `hola!`
//! are different words.

use std::collections::HashMap;

use crate::Message;

/// Top `n` words for `author`, by descending score.
///
/// Words with equal scores keep the order in which they first appear in
/// `messages`. Non-positive scores are not filtered out, so an author with few
/// messages can get words they never used.
///
/// # Example
///
/// ```rust
/// use chatstats::core::words::distinctive_words;
/// use chatstats::parsing::parse_line;
///
/// let messages: Vec<_> = [
///     "01/01/2024, 10:00 - Usuario1: Hola mundo hola",
///     "01/01/2024, 10:01 - Usuario2: Hola adios",
///     "01/01/2024, 10:02 - Usuario1: mundo python",
/// ]
/// .iter()
/// .filter_map(|line| parse_line(line))
/// .collect();
///
/// let words = distinctive_words(&messages, "Usuario1", 3);
/// assert_eq!(words[0], ("mundo".to_string(), 2));
/// assert_eq!(words[1], ("hola".to_string(), 1));
/// assert_eq!(words[2], ("python".to_string(), 1));
/// ```
pub fn distinctive_words(messages: &[Message], author: &str, n: usize) -> Vec<(String, i64)> {
    let mut order: Vec<String> = Vec::new();
    let mut scores: HashMap<String, i64> = HashMap::new();

    for msg in messages {
        let delta = if msg.author() == author { 1 } else { -1 };
        for word in msg.text().to_lowercase().split_whitespace() {
            match scores.get_mut(word) {
                Some(score) => *score += delta,
                None => {
                    scores.insert(word.to_string(), delta);
                    order.push(word.to_string());
                }
            }
        }
    }

    let mut ranked: Vec<(String, i64)> = order
        .into_iter()
        .map(|word| {
            let score = scores[&word];
            (word, score)
        })
        .collect();
    // Stable sort keeps first-seen order among equal scores.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
