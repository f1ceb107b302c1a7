use crate::processor::WHITESPACE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Upper bound accepted for `max_edit_cost`.
///
/// The approximate matcher explores every trie path whose Levenshtein row
/// stays within the budget, so large budgets degrade into a full trie walk.
pub const MAX_EDIT_COST: usize = 3;

/// Matcher settings, persisted as TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub case_sensitive: bool,
    pub max_edit_cost: usize,
    /// Replaces the default non-word-boundary set when present.
    pub word_chars: Option<String>,
    /// Characters added on top of the default (or overridden) set.
    pub extra_word_chars: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_edit_cost: 0,
            word_chars: None,
            extra_word_chars: String::new(),
        }
    }
}

impl MatcherConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "matcher config not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded matcher config");
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_edit_cost > MAX_EDIT_COST {
            errors.push(format!("max_edit_cost must be at most {MAX_EDIT_COST}"));
        }

        let word_chars = self.word_chars.as_deref().unwrap_or("");
        if word_chars
            .chars()
            .chain(self.extra_word_chars.chars())
            .any(is_separator)
        {
            errors.push(
                "word characters must not include whitespace, '.', ',' or '\\x07'".to_string(),
            );
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let strip = |s: &str| s.chars().filter(|&c| !is_separator(c)).collect::<String>();
        Self {
            case_sensitive: self.case_sensitive,
            max_edit_cost: if self.max_edit_cost > MAX_EDIT_COST {
                defaults.max_edit_cost
            } else {
                self.max_edit_cost
            },
            word_chars: self.word_chars.as_deref().map(strip),
            extra_word_chars: strip(&self.extra_word_chars),
        }
    }
}

/// Characters the scanner always treats as separators after a keyword.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || WHITESPACE.contains(&c)
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
