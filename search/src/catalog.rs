//! Static table of console destinations.

use nutype::nutype;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

pub const MAX_ALIAS_LENGTH: usize = 64;

const BUILTIN: &str = include_str!("../catalog.toml");

/// A keyword that selects a catalog entry.
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = MAX_ALIAS_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Alias(String);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub aliases: Vec<Alias>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The AWS console destinations bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_unique_ids(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),
}
