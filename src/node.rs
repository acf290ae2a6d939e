#![allow(dead_code)]

/// Index into a `Tree`'s arena. Stands in for the raw child/parent pointers
/// of a pointer-based tree; the arena is the sole owner of every `Node`.
pub type NodeId = usize;

pub enum NodeKind<V> {
    Internal { children: Vec<NodeId> },
    Leaf { values: Vec<V>, next: Option<NodeId> },
}

pub struct Node<K, V> {
    pub keys: Vec<K>,
    pub parent: Option<NodeId>,
    pub kind: NodeKind<V>,
}

/// Minimum key count a leaf may hold once it is not the root, `HN = ceil(N/2)`.
pub fn min_leaf_keys(n: usize) -> usize {
    (n + 1) / 2
}

/// Minimum key count an internal node may hold once it is not the root,
/// `IM = ceil((N+1)/2) - 1`. This is the standard B-tree minimum-degree
/// count and is distinct from `min_leaf_keys` for odd `N`.
pub fn min_internal_keys(n: usize) -> usize {
    (n + 2) / 2 - 1
}

impl<K: Ord, V> Node<K, V> {
    pub fn new_leaf() -> Self {
        Node {
            keys: Vec::new(),
            parent: None,
            kind: NodeKind::Leaf {
                values: Vec::new(),
                next: None,
            },
        }
    }

    pub fn new_internal() -> Self {
        Node {
            keys: Vec::new(),
            parent: None,
            kind: NodeKind::Internal {
                children: Vec::new(),
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Internal { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    pub fn values(&self) -> &[V] {
        match &self.kind {
            NodeKind::Leaf { values, .. } => values,
            NodeKind::Internal { .. } => &[],
        }
    }

    pub fn next_leaf(&self) -> Option<NodeId> {
        match &self.kind {
            NodeKind::Leaf { next, .. } => *next,
            NodeKind::Internal { .. } => None,
        }
    }

    pub fn set_next_leaf(&mut self, next: Option<NodeId>) {
        match &mut self.kind {
            NodeKind::Leaf { next: slot, .. } => *slot = next,
            NodeKind::Internal { .. } => debug_assert!(false, "set_next_leaf on internal node"),
        }
    }

    /// Branch-free binary search: returns the smallest index `i` such that
    /// `keys[i] >= key` (or `keys.len()` if none), plus whether `keys[i]`
    /// equals `key` exactly. No early `return` escapes the loop; both
    /// branches of the comparison always execute, only the resulting bound
    /// update differs.
    pub fn index_of(&self, key: &K) -> (usize, bool) {
        let mut lo = 0usize;
        let mut hi = self.keys.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let go_right = &self.keys[mid] < key;
            lo = if go_right { mid + 1 } else { lo };
            hi = if go_right { hi } else { mid };
        }
        let exact = lo < self.keys.len() && self.keys[lo] == *key;
        (lo, exact)
    }

    /// Index of the child to descend into for `key`, given the
    /// right-min-separator convention: `keys[i]` equals the minimum key of
    /// `children[i + 1]`, so an exact match on `keys[i]` belongs to the
    /// right side of that separator.
    pub fn child_index(&self, key: &K) -> usize {
        let (lo, found) = self.index_of(key);
        if found {
            lo + 1
        } else {
            lo
        }
    }

    pub fn insert_key_value(&mut self, index: usize, key: K, value: V) {
        debug_assert!(index <= self.keys.len());
        self.keys.insert(index, key);
        match &mut self.kind {
            NodeKind::Leaf { values, .. } => values.insert(index, value),
            NodeKind::Internal { .. } => debug_assert!(false, "insert_key_value on internal node"),
        }
    }

    pub fn insert_key_child(&mut self, index: usize, key: K, child: NodeId) {
        debug_assert!(index <= self.keys.len());
        self.keys.insert(index, key);
        match &mut self.kind {
            NodeKind::Internal { children } => children.insert(index + 1, child),
            NodeKind::Leaf { .. } => debug_assert!(false, "insert_key_child on leaf node"),
        }
    }

    pub fn remove_leaf_at(&mut self, index: usize) -> V {
        debug_assert!(self.is_leaf() && index < self.keys.len());
        self.keys.remove(index);
        match &mut self.kind {
            NodeKind::Leaf { values, .. } => values.remove(index),
            NodeKind::Internal { .. } => unreachable!(),
        }
    }

    /// Splits a full leaf (`N` keys) that needs to accommodate one more
    /// entry at `insert_index`. Always leaves `min_leaf_keys(n)` keys on
    /// whichever side the insertion point falls on the boundary, and the
    /// rest on the other side, so both siblings satisfy minimum occupancy
    /// regardless of the parity of `n`.
    pub fn split_leaf(&mut self, n: usize, insert_index: usize, key: K, value: V) -> (K, Node<K, V>)
    where
        K: Clone,
    {
        debug_assert!(self.is_leaf());
        debug_assert_eq!(self.keys.len(), n);
        let left_count = min_leaf_keys(n);

        if insert_index < left_count {
            // inserted key lands in the left sibling; left keeps exactly
            // left_count keys after the insert, so it donates one fewer
            // to the right side up front.
            let split_at = left_count - 1;
            let (right_keys, right_values) = match &mut self.kind {
                NodeKind::Leaf { values, .. } => {
                    let rk = self.keys.split_off(split_at);
                    let rv = values.split_off(split_at);
                    (rk, rv)
                }
                NodeKind::Internal { .. } => unreachable!(),
            };
            self.keys.insert(insert_index, key);
            match &mut self.kind {
                NodeKind::Leaf { values, .. } => values.insert(insert_index, value),
                NodeKind::Internal { .. } => unreachable!(),
            }
            let separator = right_keys[0].clone();
            let right = Node {
                keys: right_keys,
                parent: self.parent,
                kind: NodeKind::Leaf {
                    values: right_values,
                    next: self.next_leaf(),
                },
            };
            (separator, right)
        } else {
            let split_at = left_count;
            let (mut right_keys, mut right_values) = match &mut self.kind {
                NodeKind::Leaf { values, .. } => {
                    let rk = self.keys.split_off(split_at);
                    let rv = values.split_off(split_at);
                    (rk, rv)
                }
                NodeKind::Internal { .. } => unreachable!(),
            };
            let local_index = insert_index - split_at;
            right_keys.insert(local_index, key);
            right_values.insert(local_index, value);
            let separator = right_keys[0].clone();
            let right = Node {
                keys: right_keys,
                parent: self.parent,
                kind: NodeKind::Leaf {
                    values: right_values,
                    next: self.next_leaf(),
                },
            };
            (separator, right)
        }
    }

    /// Splits a full internal node (`N` keys, `N+1` children) that needs to
    /// accommodate one more `(key, child)` pair at `insert_index`. Mirrors
    /// `split_leaf`'s boundary handling but against `min_internal_keys`, and
    /// the separator key promoted to the parent is removed from both
    /// children rather than duplicated (internal nodes hold no payload at
    /// the separator itself, only routing keys).
    pub fn split_internal(
        &mut self,
        n: usize,
        insert_index: usize,
        key: K,
        child: NodeId,
    ) -> (K, Node<K, V>) {
        debug_assert!(!self.is_leaf());
        debug_assert_eq!(self.keys.len(), n);
        let left_count = min_internal_keys(n);

        // Materialize the conceptual post-insert sequence (N+1 keys,
        // N+2 children) first, then carve it at left_count. Simpler to
        // reason about than in-place donation, since keys and children
        // shift independently around insert_index.
        let mut all_keys: Vec<K> = std::mem::take(&mut self.keys);
        all_keys.insert(insert_index, key);

        let mut all_children: Vec<NodeId> = match &mut self.kind {
            NodeKind::Internal { children } => std::mem::take(children),
            NodeKind::Leaf { .. } => unreachable!(),
        };
        all_children.insert(insert_index + 1, child);

        // all_keys[left_count] is promoted to the parent as the separator;
        // it belongs to neither child's key list.
        let separator = all_keys.remove(left_count);
        let right_keys = all_keys.split_off(left_count);
        let right_children = all_children.split_off(left_count + 1);
        self.keys = all_keys;

        let right = Node {
            keys: right_keys,
            parent: self.parent,
            kind: NodeKind::Internal {
                children: right_children,
            },
        };
        match &mut self.kind {
            NodeKind::Internal { children } => *children = all_children,
            NodeKind::Leaf { .. } => unreachable!(),
        }
        (separator, right)
    }
}
