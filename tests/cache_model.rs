use std::collections::VecDeque;

use grid5::search::TranspositionCache;
use proptest::prelude::*;

/// Reference LRU: front is most recently used
struct ModelLru {
    entries: VecDeque<(u8, i32)>,
    capacity: usize,
}

impl ModelLru {
    fn get(&mut self, key: u8) -> Option<i32> {
        let idx = self.entries.iter().position(|&(k, _)| k == key)?;
        let entry = self.entries.remove(idx)?;
        self.entries.push_front(entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u8, value: i32) {
        if let Some(idx) = self.entries.iter().position(|&(k, _)| k == key) {
            self.entries.remove(idx);
        } else if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front((key, value));
    }
}

#[derive(Debug, Clone)]
enum Op {
    Get(u8),
    Put(u8, i32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..24).prop_map(Op::Get),
        (0u8..24, any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
    ]
}

proptest! {
    #[test]
    fn prop_cache_matches_model(capacity in 1usize..12, ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut cache: TranspositionCache<u8, i32> = TranspositionCache::new(capacity);
        let mut model = ModelLru { entries: VecDeque::new(), capacity };

        for op in ops {
            match op {
                Op::Get(k) => prop_assert_eq!(cache.get(&k), model.get(k)),
                Op::Put(k, v) => {
                    cache.put(k, v);
                    model.put(k, v);
                }
            }
            prop_assert_eq!(cache.len(), model.entries.len());
            prop_assert!(cache.len() <= capacity);
        }

        for k in 0u8..24 {
            let expected = model.entries.iter().any(|&(mk, _)| mk == k);
            prop_assert_eq!(cache.contains(&k), expected);
        }
    }

    #[test]
    fn prop_overflow_evicts_least_recent(capacity in 1usize..64, touched in any::<prop::sample::Index>()) {
        let mut cache: TranspositionCache<usize, usize> = TranspositionCache::new(capacity);
        for k in 0..capacity {
            cache.put(k, k);
        }
        // Refresh one key; the oldest untouched key becomes the victim
        let refreshed = touched.index(capacity);
        prop_assert_eq!(cache.get(&refreshed), Some(refreshed));
        let victim = if refreshed == 0 && capacity > 1 { 1 } else { 0 };

        cache.put(capacity, capacity);
        prop_assert_eq!(cache.len(), capacity);
        prop_assert!(cache.contains(&capacity));
        if capacity > 1 {
            prop_assert!(!cache.contains(&victim));
            prop_assert!(cache.contains(&refreshed));
        } else {
            prop_assert!(!cache.contains(&refreshed));
        }
    }
}
