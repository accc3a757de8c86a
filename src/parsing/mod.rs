//! Transcript line parsing.
//!
//! - [`timestamp`] - date and time normalization ([`DateLayout`], [`TimeLayout`])
//! - [`line`] - the structural line pattern and [`LineParser`]

pub mod line;
pub mod timestamp;

pub use line::{LineParser, LineParts, parse_line, split_line};
pub use timestamp::{DateLayout, TimeLayout, clean_time_token, parse_date, parse_time};
