//! Transcript loading.
//!
//! [`TranscriptLoader`] reads a whole export, strips every line, skips blank
//! ones and feeds the rest to the [`LineParser`]. Lines the parser rejects
//! (continuations of multi-line messages, system notices, noise) are dropped
//! without comment; only the totals are logged.
//!
//! Two outcomes that look alike to a user are kept apart for the caller:
//!
//! - the file does not exist: `Err(ChatstatsError::FileNotFound { .. })`
//! - the file exists but no line parsed: `Ok(vec![])`
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::loader::TranscriptLoader;
//!
//! let loader = TranscriptLoader::new();
//! let (messages, stats) = loader.load_with_stats("chat.txt".as_ref())?;
//! println!("{} messages, {} lines skipped", messages.len(), stats.skipped);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatstatsError, Result};
use crate::parsing::LineParser;

const BOM: char = '\u{feff}';

/// Line accounting for a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Physical lines in the input
    pub lines: usize,
    /// Lines that were empty after stripping
    pub blank_lines: usize,
    /// Lines that produced a message
    pub parsed: usize,
    /// Non-blank lines the parser rejected
    pub skipped: usize,
}

impl LoadStats {
    /// Share of non-blank lines that parsed, in percent.
    pub fn parse_ratio(&self) -> f64 {
        let candidates = self.parsed + self.skipped;
        if candidates == 0 {
            return 0.0;
        }
        self.parsed as f64 / candidates as f64 * 100.0
    }
}

/// Loads transcripts into ordered message collections.
#[derive(Debug, Clone, Default)]
pub struct TranscriptLoader {
    parser: LineParser,
}

impl TranscriptLoader {
    /// Creates a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            parser: LineParser::with_config(config),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        self.parser.config()
    }

    /// Loads every parseable message from `path`, in file order.
    pub fn load(&self, path: &Path) -> Result<Vec<Message>> {
        self.load_with_stats(path).map(|(messages, _)| messages)
    }

    /// Like [`load`](Self::load), also returning line accounting.
    pub fn load_with_stats(&self, path: &Path) -> Result<(Vec<Message>, LoadStats)> {
        // The whole file is read in one call; no handle outlives it.
        let content =
            fs::read_to_string(path).map_err(|e| ChatstatsError::from_read(e, path))?;
        let (messages, stats) = self.parse_content(&content);

        debug!(
            path = %path.display(),
            lines = stats.lines,
            parsed = stats.parsed,
            skipped = stats.skipped,
            "transcript loaded"
        );

        Ok((messages, stats))
    }

    /// Parses transcript content that is already in memory.
    pub fn load_str(&self, content: &str) -> Vec<Message> {
        self.parse_content(content).0
    }

    fn parse_content(&self, content: &str) -> (Vec<Message>, LoadStats) {
        let content = if self.config().strip_bom {
            content.strip_prefix(BOM).unwrap_or(content)
        } else {
            content
        };

        let mut stats = LoadStats::default();
        let mut messages = Vec::new();

        for line in content.lines() {
            stats.lines += 1;

            let line = line.trim();
            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match self.parser.parse(line) {
                Some(msg) => {
                    stats.parsed += 1;
                    messages.push(msg);
                }
                None => stats.skipped += 1,
            }
        }

        (messages, stats)
    }
}

/// Loads a transcript with the default configuration.
///
/// # Example
///
/// ```rust,no_run
/// let messages = chatstats::load("chat.txt")?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Message>> {
    TranscriptLoader::new().load(path.as_ref())
}
