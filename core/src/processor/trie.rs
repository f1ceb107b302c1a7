//! Index-arena trie.
//!
//! Nodes are addressed by [`NodeId`] so the scanner can hold cursors into the
//! trie without borrowing it mutably, and deletion can release whole branches
//! without recursive ownership chains. Freed slots are recycled on insert.

use std::collections::BTreeMap;

pub(crate) type NodeId = usize;

pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node<V> {
    children: BTreeMap<char, NodeId>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn empty() -> Self {
        Self {
            children: BTreeMap::new(),
            value: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Trie<V> {
    nodes: Vec<Node<V>>,
    free: Vec<NodeId>,
    terms: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self {
            nodes: vec![Node::empty()],
            free: Vec::new(),
            terms: 0,
        }
    }
}

/// Read access.
impl<V> Trie<V> {
    pub(crate) fn len(&self) -> usize {
        self.terms
    }

    pub(crate) fn child(&self, id: NodeId, c: char) -> Option<NodeId> {
        self.nodes[id].children.get(&c).copied()
    }

    /// Children in ascending character order.
    pub(crate) fn children(&self, id: NodeId) -> impl DoubleEndedIterator<Item = (char, NodeId)> + '_ {
        self.nodes[id].children.iter().map(|(&c, &child)| (c, child))
    }

    pub(crate) fn value(&self, id: NodeId) -> Option<&V> {
        self.nodes[id].value.as_ref()
    }

    pub(crate) fn is_terminal(&self, id: NodeId) -> bool {
        self.nodes[id].value.is_some()
    }

    /// Follows `path` from the root, returning the node it ends on.
    pub(crate) fn walk(&self, path: impl IntoIterator<Item = char>) -> Option<NodeId> {
        path.into_iter()
            .try_fold(ROOT, |node, c| self.child(node, c))
    }

    /// Reconstructs every stored key together with its value.
    pub(crate) fn entries(&self) -> Vec<(String, &V)> {
        let mut out = Vec::with_capacity(self.terms);
        let mut stack = vec![(ROOT, String::new())];

        while let Some((id, prefix)) = stack.pop() {
            if let Some(value) = self.value(id) {
                out.push((prefix.clone(), value));
            }
            for (c, child) in self.children(id).rev() {
                let mut key = prefix.clone();
                key.push(c);
                stack.push((child, key));
            }
        }

        out
    }
}

/// Mutation.
impl<V> Trie<V> {
    /// Stores `value` at the end of `path`. Returns true if the path was not
    /// terminal before.
    pub(crate) fn insert(&mut self, path: impl IntoIterator<Item = char>, value: V) -> bool {
        let mut node = ROOT;
        for c in path {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = self.alloc();
                    self.nodes[node].children.insert(c, next);
                    next
                }
            };
        }

        let is_new = self.nodes[node].value.replace(value).is_none();
        if is_new {
            self.terms += 1;
        }
        is_new
    }

    /// Removes the value at the end of `path` and prunes the branch back to
    /// the nearest ancestor that is still shared with another key.
    pub(crate) fn remove(&mut self, path: impl IntoIterator<Item = char>) -> Option<V> {
        let mut trail: Vec<(NodeId, char)> = Vec::new();
        let mut node = ROOT;
        for c in path {
            let next = self.child(node, c)?;
            trail.push((node, c));
            node = next;
        }

        let value = self.nodes[node].value.take()?;
        self.terms -= 1;

        while let Some((parent, c)) = trail.pop() {
            if self.nodes[node].value.is_some() || !self.nodes[node].children.is_empty() {
                break;
            }
            self.nodes[parent].children.remove(&c);
            self.release(node);
            node = parent;
        }

        Some(value)
    }

    fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.nodes.push(Node::empty());
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        debug_assert_ne!(id, ROOT);
        self.nodes[id] = Node::empty();
        self.free.push(id);
    }

    #[cfg(test)]
    pub(crate) fn live_nodes(&self) -> usize {
        self.nodes.len() - self.free.len()
    }
}
