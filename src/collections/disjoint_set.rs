//! Union-find over a fixed universe of keys
//!
//! Keys are interned into dense slots on construction; the parent and size
//! tables are indexed by slot. A slot is a root iff it is its own parent, and
//! the size table is only meaningful at roots.

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set with path compression and union-by-size
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    keys: Vec<T>,
    slots: HashMap<T, usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Create a partition where every key starts in its own singleton set.
    ///
    /// Duplicate keys collapse into one element.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let mut keys = Vec::new();
        let mut slots = HashMap::new();
        for value in values {
            if slots.contains_key(&value) {
                continue;
            }
            slots.insert(value.clone(), keys.len());
            keys.push(value);
        }
        let n = keys.len();
        Self {
            keys,
            slots,
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    /// Representative key of the set containing `key`.
    ///
    /// Every key on the walked chain is re-pointed at the root.
    pub fn representative(&mut self, key: &T) -> Option<&T> {
        let slot = *self.slots.get(key)?;
        let root = self.find_slot(slot);
        Some(&self.keys[root])
    }

    /// Whether `a` and `b` are in the same set. Unknown keys are never
    /// connected to anything.
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        match (self.slots.get(a).copied(), self.slots.get(b).copied()) {
            (Some(a), Some(b)) => self.find_slot(a) == self.find_slot(b),
            _ => false,
        }
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The smaller set is attached under the larger one's root; on a size
    /// tie `a`'s root wins. Returns `false` if they were already together or
    /// either key is unknown.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let (Some(a), Some(b)) = (self.slots.get(a).copied(), self.slots.get(b).copied()) else {
            return false;
        };
        let root_a = self.find_slot(a);
        let root_b = self.find_slot(b);
        if root_a == root_b {
            return false;
        }

        let (winner, loser) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        self.size[loser] = 0;
        self.sets -= 1;
        true
    }

    /// Number of keys in the set containing `key`
    pub fn set_size(&mut self, key: &T) -> Option<usize> {
        let slot = *self.slots.get(key)?;
        let root = self.find_slot(slot);
        Some(self.size[root])
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of keys in the universe
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn find_slot(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != slot {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }

        root
    }
}
