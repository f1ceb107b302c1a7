pub(crate) mod config;
pub use config::{ConfigError, MAX_EDIT_COST, MatcherConfig};
