#![allow(dead_code)]

use crate::node::{NodeId, NodeKind};
use crate::tree::Tree;

/// A position inside a `Tree`, mirroring the original cursor model: `leaf`
/// is `None` only once iteration has run past the last element; `exists`
/// records whether the position produced by `find` actually holds a
/// matching entry (it can be a valid insertion point for a missing key).
pub struct Cursor<'a, K, V> {
    tree: Option<&'a Tree<K, V>>,
    leaf: Option<NodeId>,
    index: usize,
    exists: bool,
}

impl<'a, K: Ord + Clone, V> Cursor<'a, K, V> {
    pub(crate) fn at(tree: &'a Tree<K, V>, leaf: NodeId, index: usize, exists: bool) -> Self {
        Cursor {
            tree: Some(tree),
            leaf: Some(leaf),
            index,
            exists,
        }
    }

    pub(crate) fn invalid() -> Self {
        Cursor {
            tree: None,
            leaf: None,
            index: 0,
            exists: false,
        }
    }

    /// `true` as long as the cursor has not run past the last element.
    pub fn is_valid(&self) -> bool {
        self.leaf.is_some()
    }

    /// `true` if this cursor was produced by a successful `find`/lookup
    /// that landed exactly on a matching key.
    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn key(&self) -> Option<&'a K> {
        let (tree, leaf) = (self.tree?, self.leaf?);
        tree.node(leaf).keys.get(self.index)
    }

    pub fn value(&self) -> Option<&'a V> {
        let (tree, leaf) = (self.tree?, self.leaf?);
        match &tree.node(leaf).kind {
            NodeKind::Leaf { values, .. } => values.get(self.index),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Advances to the next element in key order, following the leaf
    /// sibling chain across node boundaries in O(1) amortized per step.
    pub fn advance(&mut self) {
        let Some(tree) = self.tree else { return };
        let Some(leaf) = self.leaf else { return };
        self.index += 1;
        if self.index >= tree.node(leaf).len() {
            self.leaf = tree.node(leaf).next_leaf();
            self.index = 0;
        }
        self.exists = self.leaf.is_some();
    }
}

/// Standard iterator adapter over a `Cursor`, yielding `(&K, &V)` pairs in
/// ascending key order.
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
}

impl<'a, K: Ord + Clone, V> Iter<'a, K, V> {
    pub(crate) fn new(cursor: Cursor<'a, K, V>) -> Self {
        Iter { cursor }
    }
}

impl<'a, K: Ord + Clone, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.is_valid() {
            return None;
        }
        let key = self.cursor.key()?;
        let value = self.cursor.value()?;
        self.cursor.advance();
        Some((key, value))
    }
}
