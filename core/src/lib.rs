//! Trie-based keyword extraction and replacement.
//!
//! [`KeywordProcessor`] stores keywords (optionally case-folded) with an
//! associated value and scans text for the longest keyword at each word
//! boundary, optionally tolerating a bounded Levenshtein distance.

pub mod error;
pub mod processor;
pub mod types;

pub use error::LoadError;
pub use processor::{KeywordMatch, KeywordProcessor};
pub use types::{ConfigError, MatcherConfig};
