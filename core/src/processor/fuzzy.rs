//! Bounded Levenshtein search over trie children.
//!
//! Each worklist entry carries the edit-distance row of its parent; the row
//! for the entry's character is derived from it the same way the classic
//! dynamic-programming matrix grows one row per character. The worklist is
//! an explicit stack, so memory grows with trie depth, not with input length.

use super::trie::{NodeId, Trie};
use std::rc::Rc;

/// Separators that can legitimately follow a partially matched keyword.
pub(crate) const WHITESPACE: [char; 6] = ['.', '\t', '\n', '\x07', ' ', ','];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FuzzyHit {
    pub(crate) node: NodeId,
    pub(crate) cost: usize,
    pub(crate) depth: usize,
}

struct Frame {
    c: char,
    node: NodeId,
    parent_row: Rc<[usize]>,
    depth: usize,
}

/// Finds the cheapest node below `start` that spells `word` within
/// `max_cost` edits and from which a match can still complete.
///
/// A node qualifies when it is terminal or has a whitespace child. Qualifying
/// nodes are not expanded further. Ties keep the first node found in
/// depth-first, character-ordered traversal.
pub(crate) fn cheapest<V>(
    trie: &Trie<V>,
    start: NodeId,
    word: &[char],
    max_cost: usize,
) -> Option<FuzzyHit> {
    let first_row: Rc<[usize]> = (0..=word.len()).collect();
    let mut stack: Vec<Frame> = trie
        .children(start)
        .rev()
        .map(|(c, node)| Frame {
            c,
            node,
            parent_row: Rc::clone(&first_row),
            depth: 1,
        })
        .collect();

    let mut best: Option<FuzzyHit> = None;

    while let Some(frame) = stack.pop() {
        let row = next_row(&frame.parent_row, word, frame.c);
        let cost = row[word.len()];

        if cost <= max_cost && can_complete(trie, frame.node) {
            if best.is_none_or(|b| cost < b.cost) {
                best = Some(FuzzyHit {
                    node: frame.node,
                    cost,
                    depth: frame.depth,
                });
            }
            continue;
        }

        if row.iter().min().is_some_and(|&m| m <= max_cost) {
            let row: Rc<[usize]> = row.into();
            stack.extend(trie.children(frame.node).rev().map(|(c, node)| Frame {
                c,
                node,
                parent_row: Rc::clone(&row),
                depth: frame.depth + 1,
            }));
        }
    }

    best
}

fn next_row(prev: &[usize], word: &[char], c: char) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev.len());
    row.push(prev[0] + 1);
    for col in 1..prev.len() {
        let insert = row[col - 1] + 1;
        let delete = prev[col] + 1;
        let replace = prev[col - 1] + usize::from(word[col - 1] != c);
        row.push(insert.min(delete).min(replace));
    }
    row
}

fn can_complete<V>(trie: &Trie<V>, node: NodeId) -> bool {
    trie.is_terminal(node)
        || WHITESPACE
            .iter()
            .any(|&w| trie.child(node, w).is_some())
}
