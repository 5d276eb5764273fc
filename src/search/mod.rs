//! Search module
//!
//! Contains:
//! - Transposition table (LRU) for caching search results
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod tt;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use tt::{CacheKey, CachedScore, EntryType, TranspositionCache, DEFAULT_CAPACITY};
