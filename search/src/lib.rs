//! Launcher dispatch for AWS console destinations.
//!
//! Maps typed keywords ("ec2", "billing", "dns") to catalog entries and
//! returns the (label, description, URL) items the launcher host renders.
//!
//! # Design
//!
//! - The catalog is static data (bundled TOML, or a user-supplied file).
//! - Aliases are loaded into a `KeywordProcessor`, so a query may name
//!   several destinations, use multi-word aliases ("route 53") and carry
//!   small typos.
//! - When no alias matches, entries are ranked with Nucleo's fuzzy matcher
//!   so partially typed names still resolve.
//! - An empty query lists every entry.

mod catalog;
mod config;
mod engine;
mod query;
mod results;

pub use catalog::{Alias, Catalog, CatalogEntry, CatalogError, MAX_ALIAS_LENGTH};
pub use config::{CaseMatching, SearchConfig};
pub use engine::SearchEngine;
pub use query::SearchQuery;
pub use results::{ResultItem, SearchResults};
