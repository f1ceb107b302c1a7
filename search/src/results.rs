//! Search results types.

use crate::catalog::CatalogEntry;
use serde::Serialize;

/// What the launcher host renders: a label, a description and the URL to
/// open when the item is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultItem<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a CatalogEntry> for ResultItem<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            name: &entry.name,
            description: &entry.description,
            url: &entry.url,
        }
    }
}

/// Matched catalog entries, best first. Borrows from the SearchEngine.
#[derive(Debug, Clone, Default)]
pub struct SearchResults<'a> {
    pub(crate) entries: Vec<&'a CatalogEntry>,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = ResultItem<'a>> + '_ {
        self.entries.iter().map(|&entry| ResultItem::from(entry))
    }

    /// Catalog ids of the matched entries.
    #[cfg(test)]
    pub(crate) fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|&entry| entry.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_items(self) -> Vec<ResultItem<'a>> {
        self.entries.into_iter().map(ResultItem::from).collect()
    }
}
