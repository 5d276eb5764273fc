//! Transposition table for caching search results
//!
//! A fixed-capacity map with least-recently-used eviction. Entries live in a
//! slot vector threaded by an index-linked recency list, and an `FxHashMap`
//! maps keys to slots, so `get` and `put` are O(1).
//!
//! # Example
//!
//! ```
//! use grid5::search::TranspositionCache;
//!
//! let mut tt = TranspositionCache::new(2);
//! tt.put("a", 1);
//! tt.put("b", 2);
//! tt.get(&"a"); // "a" is now most recent
//! tt.put("c", 3); // evicts "b"
//!
//! assert_eq!(tt.get(&"b"), None);
//! assert_eq!(tt.len(), 2);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::board::{Signature, Stone};

/// Default maximum entry count
pub const DEFAULT_CAPACITY: usize = 10_000;

const NIL: usize = usize::MAX;

/// Cache key: the searched position plus everything its score depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub signature: Signature,
    /// Remaining depth
    pub depth: u8,
    /// Side to move is the searching player
    pub maximizing: bool,
    /// Symbol of the searching player
    pub symbol: Stone,
}

/// How a cached score relates to the true minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside its window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Score stored in the transposition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedScore {
    pub score: i32,
    pub entry_type: EntryType,
}

impl CachedScore {
    #[inline]
    pub fn exact(score: i32) -> Self {
        Self {
            score,
            entry_type: EntryType::Exact,
        }
    }

    /// Classify `score` against the window the search was entered with.
    #[inline]
    pub fn from_window(score: i32, alpha: i32, beta: i32) -> Self {
        let entry_type = if score <= alpha {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        Self { score, entry_type }
    }

    /// Score to return for a probe with the given window, if the entry decides it.
    #[inline]
    pub fn usable(self, alpha: i32, beta: i32) -> Option<i32> {
        match self.entry_type {
            EntryType::Exact => Some(self.score),
            EntryType::LowerBound if self.score >= beta => Some(self.score),
            EntryType::UpperBound if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Bounded key-value memo with least-recently-used eviction.
pub struct TranspositionCache<K = CacheKey, V = CachedScore> {
    map: FxHashMap<K, usize>,
    nodes: Vec<Node<K, V>>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V: Clone> TranspositionCache<K, V> {
    /// Create a cache holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: FxHashMap::default(),
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            capacity,
        }
    }

    /// Look up a key, marking it most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let idx = *self.map.get(key)?;
        self.touch(idx);
        Some(self.nodes[idx].value.clone())
    }

    /// Insert or overwrite a key; evicts the least recently used entry when full.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.touch(idx);
            return;
        }

        let idx = if self.nodes.len() < self.capacity {
            self.nodes.push(Node {
                key: key.clone(),
                value,
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        } else {
            // Reuse the LRU slot
            let idx = self.tail;
            self.unlink(idx);
            let node = &mut self.nodes[idx];
            self.map.remove(&node.key);
            node.key = key.clone();
            node.value = value;
            idx
        };

        self.map.insert(key, idx);
        self.push_front(idx);
    }

    /// Check for a key without touching its recency
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    fn touch(&mut self, idx: usize) {
        if self.head != idx {
            self.unlink(idx);
            self.push_front(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }
}
