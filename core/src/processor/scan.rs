//! Left-to-right keyword scanner shared by extraction and replacement.
//!
//! The scanner walks the case-folded text once. Matches are reported to an
//! [`Emit`] sink as byte ranges into the original text; the sink decides
//! whether to collect them or splice replacement values into a copy.

use super::fuzzy;
use super::trie::{NodeId, ROOT, Trie};
use std::collections::HashSet;
use std::ops::Range;

/// Receives every match the scanner settles on, left to right.
pub(crate) trait Emit<'a, V> {
    fn emit(&mut self, value: &'a V, span: Range<usize>);
}

/// Where the scanner is relative to the current match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the root, waiting for the first character of a word.
    AtBoundary,
    /// Following trie children through the current word.
    InWord(NodeId),
}

pub(crate) struct Scanner<'a, V> {
    trie: &'a Trie<V>,
    word_chars: &'a HashSet<char>,
    /// (byte offset in the original text, folded char)
    chars: Vec<(usize, char)>,
    text_len: usize,
    max_cost: usize,
}

impl<'a, V> Scanner<'a, V> {
    pub(crate) fn new(
        trie: &'a Trie<V>,
        word_chars: &'a HashSet<char>,
        text: &str,
        fold: impl Fn(char) -> char,
        max_cost: usize,
    ) -> Self {
        Self {
            trie,
            word_chars,
            chars: text.char_indices().map(|(i, c)| (i, fold(c))).collect(),
            text_len: text.len(),
            max_cost,
        }
    }

    pub(crate) fn run(&self, out: &mut impl Emit<'a, V>) {
        let len = self.chars.len();
        let mut state = State::AtBoundary;
        let mut start = 0;
        let mut budget = self.max_cost;
        let mut idx = 0;

        while idx < len {
            let c = self.char_at(idx);
            let node = match state {
                State::AtBoundary => ROOT,
                State::InWord(node) => node,
            };
            let mut reset = false;

            if !self.is_word_char(c) {
                if self.trie.is_terminal(node) || self.trie.child(node, c).is_some() {
                    let mut best = self.trie.value(node).map(|value| (value, idx));
                    if let Some(next) = self.trie.child(node, c) {
                        if let Some((value, end)) = self.longest_from(next, idx + 1, &mut budget) {
                            best = Some((value, end));
                            idx = end;
                        }
                    }
                    if let Some((value, end)) = best {
                        out.emit(value, self.span(start, end));
                    }
                }
                state = State::AtBoundary;
                reset = true;
            } else if let Some(next) = self.trie.child(node, c) {
                state = State::InWord(next);
            } else if budget > 0 {
                let word_end = self.word_end(idx);
                state = match self.fuzzy(node, idx..word_end, budget) {
                    Some(hit) => {
                        budget -= hit.cost;
                        State::InWord(hit.node)
                    }
                    None => State::AtBoundary,
                };
                idx = word_end - 1;
            } else {
                state = State::AtBoundary;
                reset = true;
                idx = self.word_end(idx + 1);
            }

            if idx + 1 >= len {
                if let State::InWord(node) = state {
                    if let Some(value) = self.trie.value(node) {
                        out.emit(value, self.span(start, len));
                    }
                }
            }

            idx += 1;
            if reset {
                start = idx;
                budget = self.max_cost;
            }
        }
    }

    /// Extends a match that has already crossed a boundary character,
    /// returning the rightmost terminal reachable from `node` and the index
    /// where it ends.
    fn longest_from(
        &self,
        mut node: NodeId,
        from: usize,
        budget: &mut usize,
    ) -> Option<(&'a V, usize)> {
        let len = self.chars.len();
        let mut best = None;
        let mut idy = from;

        while idy < len {
            let c = self.char_at(idy);
            if !self.is_word_char(c) {
                if let Some(value) = self.trie.value(node) {
                    best = Some((value, idy));
                }
            }

            if let Some(next) = self.trie.child(node, c) {
                node = next;
                idy += 1;
            } else if *budget > 0 {
                let word_end = self.word_end(idy);
                let Some(hit) = self.fuzzy(node, idy..word_end, *budget) else {
                    return best;
                };
                *budget -= hit.cost;
                node = hit.node;
                idy = word_end;
            } else {
                return best;
            }
        }

        if let Some(value) = self.trie.value(node) {
            best = Some((value, len));
        }
        best
    }

    fn fuzzy(&self, node: NodeId, word: Range<usize>, budget: usize) -> Option<fuzzy::FuzzyHit> {
        let word: Vec<char> = self.chars[word].iter().map(|&(_, c)| c).collect();
        let hit = fuzzy::cheapest(self.trie, node, &word, budget)?;
        tracing::trace!(
            word = %word.iter().collect::<String>(),
            cost = hit.cost,
            depth = hit.depth,
            "approximate continuation"
        );
        Some(hit)
    }

    fn char_at(&self, idx: usize) -> char {
        self.chars[idx].1
    }

    fn is_word_char(&self, c: char) -> bool {
        self.word_chars.contains(&c)
    }

    /// First index at or after `from` that is not a word character.
    fn word_end(&self, from: usize) -> usize {
        (from..self.chars.len())
            .find(|&i| !self.is_word_char(self.char_at(i)))
            .unwrap_or(self.chars.len())
    }

    fn span(&self, start: usize, end: usize) -> Range<usize> {
        self.offset(start)..self.offset(end)
    }

    fn offset(&self, idx: usize) -> usize {
        self.chars.get(idx).map_or(self.text_len, |&(offset, _)| offset)
    }
}

/// Collects matches with their spans.
pub(crate) struct Collect<'a, V> {
    pub(crate) matches: Vec<(&'a V, Range<usize>)>,
}

impl<'a, V> Emit<'a, V> for Collect<'a, V> {
    fn emit(&mut self, value: &'a V, span: Range<usize>) {
        self.matches.push((value, span));
    }
}

/// Rebuilds the text, substituting each match with its value.
pub(crate) struct Splice<'t> {
    text: &'t str,
    copied_to: usize,
    out: String,
}

impl<'t> Splice<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            text,
            copied_to: 0,
            out: String::with_capacity(text.len()),
        }
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push_str(&self.text[self.copied_to..]);
        self.out
    }
}

impl<'a, V: AsRef<str>> Emit<'a, V> for Splice<'_> {
    fn emit(&mut self, value: &'a V, span: Range<usize>) {
        self.out.push_str(&self.text[self.copied_to..span.start]);
        self.out.push_str(value.as_ref());
        self.copied_to = span.end;
    }
}
