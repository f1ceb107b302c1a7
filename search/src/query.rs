//! Search query types.

/// Query type for search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Catalog keywords anywhere in the text, with fuzzy fallback.
    Keywords(String),
    /// Fuzzy ranking only.
    Fuzzy(String),
}

impl SearchQuery {
    /// Builds a keyword query from raw launcher input such as `"aws ec2 s3"`,
    /// dropping the leading trigger word.
    pub fn from_launcher_input(input: &str) -> Self {
        let rest = input
            .trim_start()
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest.trim());
        Self::Keywords(rest.to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Keywords(text) | Self::Fuzzy(text) => text,
        }
    }
}
