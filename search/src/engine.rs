//! Catalog lookup driven by keyword extraction.

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::{CaseMatching, SearchConfig};
use crate::query::SearchQuery;
use crate::results::SearchResults;
use kwmatch_core::KeywordProcessor;
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher};

/// Resolves launcher queries to catalog entries.
///
/// Every alias (and the id) of every entry is stored in a keyword processor
/// whose values are entry indexes. Queries are scanned for those keywords;
/// when none is found the entries are ranked with Nucleo's fuzzy matcher.
pub struct SearchEngine {
    catalog: Catalog,
    keywords: KeywordProcessor<usize>,
    haystacks: Vec<String>,
    matcher: Matcher,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        let mut keywords = KeywordProcessor::new();
        for (index, entry) in catalog.entries().iter().enumerate() {
            keywords.insert(&entry.id, index);
            for alias in &entry.aliases {
                keywords.insert(alias.as_str(), index);
            }
        }

        let haystacks = catalog.entries().iter().map(haystack).collect();

        tracing::debug!(
            entries = catalog.len(),
            keywords = keywords.len(),
            "search engine ready"
        );

        Self {
            catalog,
            keywords,
            haystacks,
            matcher: Matcher::new(NucleoConfig::DEFAULT),
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Search operations.
impl SearchEngine {
    pub fn search(&mut self, query: &SearchQuery) -> SearchResults<'_> {
        let text = query.text().trim();

        let mut indexes = if text.is_empty() {
            (0..self.catalog.len()).collect()
        } else {
            let hits = match query {
                SearchQuery::Keywords(_) => self.keyword_hits(text),
                SearchQuery::Fuzzy(_) => Vec::new(),
            };
            let fuzzy = matches!(query, SearchQuery::Fuzzy(_)) || self.config.fuzzy_fallback;
            if hits.is_empty() && fuzzy {
                self.fuzzy_hits(text)
            } else {
                hits
            }
        };
        indexes.truncate(self.config.result_limit);

        tracing::debug!(query = text, results = indexes.len(), "search");

        let entries = self.catalog.entries();
        SearchResults {
            entries: indexes.into_iter().map(|i| &entries[i]).collect(),
        }
    }

    /// Entries named in `text`, in order of first mention.
    fn keyword_hits(&self, text: &str) -> Vec<usize> {
        let mut hits: Vec<usize> = Vec::new();
        for &index in self.keywords.extract(text, self.config.max_edit_cost) {
            if !hits.contains(&index) {
                hits.push(index);
            }
        }
        hits
    }

    /// Entries ranked by fuzzy score, best first.
    fn fuzzy_hits(&mut self, text: &str) -> Vec<usize> {
        let case_matching = match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };
        let pattern = Pattern::parse(text, case_matching, Normalization::Smart);

        let candidates = self
            .haystacks
            .iter()
            .enumerate()
            .map(|(index, text)| Haystack { index, text });

        pattern
            .match_list(candidates, &mut self.matcher)
            .into_iter()
            .map(|(haystack, _score)| haystack.index)
            .collect()
    }
}

struct Haystack<'a> {
    index: usize,
    text: &'a str,
}

impl AsRef<str> for Haystack<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

fn haystack(entry: &CatalogEntry) -> String {
    let mut text = format!("{} {}", entry.id, entry.name);
    for alias in &entry.aliases {
        text.push(' ');
        text.push_str(alias.as_str());
    }
    text
}
