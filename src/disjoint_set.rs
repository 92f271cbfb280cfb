//! A disjoint-set (union-find) structure over arbitrary hashable keys.
//!
//! Every key points at a representative. Following representatives always ends at a root that
//! represents itself, and two keys are in the same set exactly when they reach the same root.
//! Sets are merged by size, so the chains stay logarithmic even without path compression.
//!
//! # Examples
//!
//! ```
//! use pathwork::disjoint_set::DisjointSet;
//!
//! let mut sets = DisjointSet::new();
//! for key in ['A', 'B', 'C', 'D'] {
//!     sets.make_set(key);
//! }
//!
//! assert!(sets.union(&'A', &'B'));
//! assert!(sets.union(&'C', &'B'));
//!
//! // Already together.
//! assert!(!sets.union(&'A', &'C'));
//!
//! assert_eq!(sets.find(&'A'), sets.find(&'C'));
//! assert_ne!(sets.find(&'A'), sets.find(&'D'));
//! assert_eq!(sets.set_size(&'C'), Some(3));
//! assert_eq!(sets.set_count(), 2);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Whether looking up a root may shorten the chain it walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Chains are left as they are. [`DisjointSet::find`] always behaves like this.
    #[default]
    Disabled,
    /// Every key visited while looking up a root is pointed at its grandparent.
    PathHalving,
}

/// A partition of keys into disjoint sets.
#[derive(Clone, Debug)]
pub struct DisjointSet<K> {
    representative: HashMap<K, K>,
    /// Set sizes, keyed by root. Keys that aren't roots have no entry.
    size: HashMap<K, usize>,
    compression: Compression,
}

impl<K> Default for DisjointSet<K> {
    fn default() -> Self {
        Self {
            representative: HashMap::new(),
            size: HashMap::new(),
            compression: Compression::default(),
        }
    }
}

impl<K> DisjointSet<K>
where
    K: Eq + Hash + Clone,
{
    /// Generates a new, empty `DisjointSet`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates an empty `DisjointSet` whose [`root`][DisjointSet::root] and
    /// [`union`][DisjointSet::union] use the given compression.
    pub fn with_compression(compression: Compression) -> Self {
        Self {
            compression,
            ..Self::default()
        }
    }

    /// The compression used when looking up roots through `&mut self`.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Adds `key` as a set of its own. Returns `false`, leaving its current set alone, if the
    /// key was already known.
    pub fn make_set(&mut self, key: K) -> bool {
        if self.representative.contains_key(&key) {
            return false;
        }

        self.size.insert(key.clone(), 1);
        self.representative.insert(key.clone(), key);
        true
    }

    /// Whether the key has been added.
    pub fn contains(&self, key: &K) -> bool {
        self.representative.contains_key(key)
    }

    /// The number of keys across all sets.
    pub fn len(&self) -> usize {
        self.representative.len()
    }

    /// Whether no keys have been added.
    pub fn is_empty(&self) -> bool {
        self.representative.is_empty()
    }

    /// The number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.size.len()
    }

    /// The number of keys in the set containing `key`.
    pub fn set_size(&self, key: &K) -> Option<usize> {
        self.find(key).and_then(|root| self.size.get(root)).copied()
    }

    /// Follows representatives from `key` up to its set's root without changing anything.
    /// Returns `None` for unknown keys.
    pub fn find<'a>(&'a self, key: &K) -> Option<&'a K> {
        let parent = self.representative.get(key)?;
        if parent == key {
            Some(parent)
        } else {
            self.find(parent)
        }
    }

    /// The root of the set containing `key`, shortening the chain on the way if this set was
    /// built with [`Compression::PathHalving`].
    pub fn root(&mut self, key: &K) -> Option<K> {
        match self.compression {
            Compression::Disabled => self.find(key).cloned(),
            Compression::PathHalving => self.find_halving(key),
        }
    }

    /// Merges the sets containing `a` and `b`, hanging the smaller set's root under the larger
    /// one's. On a tie `a`'s root goes under `b`'s. Returns `false` if they were already in the
    /// same set or either key is unknown.
    pub fn union(&mut self, a: &K, b: &K) -> bool {
        match (self.root(a), self.root(b)) {
            (Some(root_a), Some(root_b)) if root_a != root_b => {
                self.link(root_a, root_b);
                true
            }
            _ => false,
        }
    }

    /// Splits every set back into singletons.
    pub fn reset(&mut self) {
        self.size.clear();
        for (key, representative) in self.representative.iter_mut() {
            representative.clone_from(key);
            self.size.insert(key.clone(), 1);
        }
    }

    fn find_halving(&mut self, key: &K) -> Option<K> {
        let mut current = key.clone();
        loop {
            let parent = self.representative.get(&current)?.clone();
            if parent == current {
                return Some(current);
            }

            let grandparent = self.representative.get(&parent)?.clone();
            self.representative.insert(current, grandparent.clone());
            current = grandparent;
        }
    }

    fn link(&mut self, root_a: K, root_b: K) {
        let size_a = self.size.remove(&root_a).unwrap_or(1);
        let size_b = self.size.remove(&root_b).unwrap_or(1);
        let (child, parent) = if size_a > size_b {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };

        self.size.insert(parent.clone(), size_a + size_b);
        self.representative.insert(child, parent);
    }
}
