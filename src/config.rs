//! Configuration types for parsing and reporting.
//!
//! Plain builder-style structs without any CLI framework dependencies. The
//! `chatstats` binary maps its flags onto these.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{ParserConfig, ReportConfig};
//! use chatstats::loader::TranscriptLoader;
//!
//! let loader = TranscriptLoader::with_config(ParserConfig::new().with_max_author_len(30));
//!
//! let report_config = ReportConfig::new()
//!     .with_top_words(25)
//!     .with_words_for("Alice");
//! ```

use serde::{Deserialize, Serialize};

/// Longest author name accepted by the line parser, in characters.
///
/// Anything longer is almost certainly a continuation line whose body happens
/// to look like `<timestamp> <text>: <more text>`.
pub const DEFAULT_MAX_AUTHOR_LEN: usize = 50;

/// Configuration for transcript line parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParserConfig;
///
/// let config = ParserConfig::new().with_strip_bom(false);
/// assert_eq!(config.max_author_len, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reject lines whose author token is longer than this (default: 50)
    pub max_author_len: usize,

    /// Ignore a UTF-8 byte-order mark at the start of the file (default: true)
    pub strip_bom: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_author_len: DEFAULT_MAX_AUTHOR_LEN,
            strip_bom: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author length limit.
    #[must_use]
    pub fn with_max_author_len(mut self, len: usize) -> Self {
        self.max_author_len = len;
        self
    }

    /// Sets whether a leading byte-order mark is ignored.
    #[must_use]
    pub fn with_strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }
}

/// Configuration for [`ChatReport`](crate::core::report::ChatReport) assembly.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ReportConfig;
///
/// let config = ReportConfig::new().with_top_words(5);
/// assert_eq!(config.top_words, 5);
/// assert!(config.words_for.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of distinctive words kept per author (default: 10)
    pub top_words: usize,

    /// Only compute distinctive words for this author; `None` means every
    /// author in the window (default: `None`)
    pub words_for: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            words_for: None,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many distinctive words are reported per author.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Restricts distinctive-word analysis to a single author.
    #[must_use]
    pub fn with_words_for(mut self, author: impl Into<String>) -> Self {
        self.words_for = Some(author.into());
        self
    }
}
