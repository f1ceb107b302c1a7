//! Keyword storage and text scanning.
//!
//! Design:
//! - Keywords live in an index-arena trie keyed by (optionally case-folded)
//!   characters; the terminal node of each keyword holds its value.
//! - Case folding is per character and one-to-one, so folded text stays
//!   index-aligned with the input and spans always slice the original text.
//! - `extract` and `replace` share one scanner; they differ only in the sink
//!   that receives matches.
//! - Approximate matching is a bounded Levenshtein walk over trie children,
//!   tried only when the literal continuation is missing and the edit budget
//!   of the current match attempt is not yet spent.

mod fuzzy;
mod loader;
mod scan;
mod trie;

pub(crate) use fuzzy::WHITESPACE;
use scan::{Collect, Scanner, Splice};
use std::collections::{HashMap, HashSet};
use trie::Trie;

/// A keyword found in scanned text.
///
/// `start..end` is a byte range into the scanned text, covering the keyword
/// as it appears there (original casing, without the trailing separator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch<'a, V = String> {
    pub value: &'a V,
    pub start: usize,
    pub end: usize,
}

impl<V> KeywordMatch<'_, V> {
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Maps keywords to values and finds them in text.
#[derive(Debug, Clone)]
pub struct KeywordProcessor<V = String> {
    trie: Trie<V>,
    case_sensitive: bool,
    word_chars: HashSet<char>,
}

impl<V> Default for KeywordProcessor<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KeywordProcessor<V> {
    /// Creates a case-insensitive processor.
    pub fn new() -> Self {
        Self::with_case_sensitivity(false)
    }

    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self {
            trie: Trie::default(),
            case_sensitive,
            word_chars: default_word_chars(),
        }
    }

    /// Creates a processor configured from `config`.
    ///
    /// `max_edit_cost` is not part of the processor; callers pass it to each
    /// scan.
    pub fn from_config(config: &crate::MatcherConfig) -> Self {
        let mut processor = Self::with_case_sensitivity(config.case_sensitive);
        if let Some(word_chars) = &config.word_chars {
            processor.set_non_word_boundaries(word_chars.chars());
        }
        for c in config.extra_word_chars.chars() {
            processor.add_non_word_boundary(c);
        }
        processor
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of stored keywords.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn folded<'s>(&self, s: &'s str) -> impl Iterator<Item = char> + 's {
        let case_sensitive = self.case_sensitive;
        s.chars().map(move |c| fold(c, case_sensitive))
    }
}

/// Word-boundary configuration.
impl<V> KeywordProcessor<V> {
    /// Characters that continue a word. Every other character is a boundary.
    pub fn non_word_boundaries(&self) -> &HashSet<char> {
        &self.word_chars
    }

    pub fn set_non_word_boundaries(&mut self, chars: impl IntoIterator<Item = char>) {
        self.word_chars = chars.into_iter().collect();
    }

    pub fn add_non_word_boundary(&mut self, c: char) {
        self.word_chars.insert(c);
    }
}

/// Single-keyword operations.
impl<V> KeywordProcessor<V> {
    /// Stores `keyword` with `value`.
    ///
    /// Returns true if the keyword was not stored before. Storing an existing
    /// keyword replaces its value. Empty keywords are ignored.
    pub fn insert(&mut self, keyword: &str, value: V) -> bool {
        if keyword.is_empty() {
            return false;
        }
        let path: Vec<char> = self.folded(keyword).collect();
        self.trie.insert(path, value)
    }

    /// Stores `keyword` as its own value.
    pub fn add_keyword(&mut self, keyword: &str) -> bool
    where
        V: for<'k> From<&'k str>,
    {
        self.insert(keyword, V::from(keyword))
    }

    /// Returns true if `keyword` was stored and has been removed.
    pub fn remove(&mut self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }
        let path: Vec<char> = self.folded(keyword).collect();
        self.trie.remove(path).is_some()
    }

    /// Exact lookup of the whole of `word`.
    pub fn get(&self, word: &str) -> Option<&V> {
        let node = self.trie.walk(self.folded(word))?;
        self.trie.value(node)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Every stored keyword (as stored, i.e. folded unless case-sensitive)
    /// with its value.
    pub fn all_keywords(&self) -> HashMap<String, &V> {
        self.trie.entries().into_iter().collect()
    }
}

/// Text scanning.
impl<V> KeywordProcessor<V> {
    /// Values of the longest keywords found in `text`, left to right.
    ///
    /// `max_edit_cost` bounds the Levenshtein distance tolerated per match;
    /// `0` means exact matching.
    pub fn extract(&self, text: &str, max_edit_cost: usize) -> Vec<&V> {
        self.extract_with_spans(text, max_edit_cost)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }

    /// Like [`extract`](Self::extract), with the byte span of each match.
    pub fn extract_with_spans(&self, text: &str, max_edit_cost: usize) -> Vec<KeywordMatch<'_, V>> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut sink = Collect {
            matches: Vec::new(),
        };
        self.scanner(text, max_edit_cost).run(&mut sink);

        sink.matches
            .into_iter()
            .map(|(value, span)| KeywordMatch {
                value,
                start: span.start,
                end: span.end,
            })
            .collect()
    }

    /// Copies `text`, replacing every matched keyword with its value.
    ///
    /// Unmatched text, including separators after a match, is copied
    /// verbatim.
    pub fn replace(&self, text: &str, max_edit_cost: usize) -> String
    where
        V: AsRef<str>,
    {
        if text.is_empty() {
            return String::new();
        }

        let mut sink = Splice::new(text);
        self.scanner(text, max_edit_cost).run(&mut sink);
        sink.finish()
    }

    fn scanner<'a>(&'a self, text: &str, max_edit_cost: usize) -> Scanner<'a, V> {
        let case_sensitive = self.case_sensitive;
        Scanner::new(
            &self.trie,
            &self.word_chars,
            text,
            |c| fold(c, case_sensitive),
            max_edit_cost,
        )
    }
}

/// One-to-one lowercase mapping. Characters whose lowercase form is not a
/// single char are kept as-is.
fn fold(c: char, case_sensitive: bool) -> char {
    if case_sensitive {
        return c;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn default_word_chars() -> HashSet<char> {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain(std::iter::once('_'))
        .collect()
}
