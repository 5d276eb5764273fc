//! Minimax search with alpha-beta pruning and transposition table
//!
//! This module implements the core search algorithm. The tree is explored on
//! one exclusively borrowed board: every speculative stone is placed through
//! a scoped guard and taken back when the guard drops, including on cutoffs.
//!
//! # Example
//!
//! ```
//! use grid5::board::{Board, Stone};
//! use grid5::eval::EvalWeights;
//! use grid5::search::Searcher;
//!
//! let mut searcher = Searcher::new(Stone::X, EvalWeights::default(), 10_000);
//! let mut board = Board::new();
//!
//! let result = searcher.choose_move(&mut board, 2).unwrap();
//! println!("Best move: {}", result.best_move.to_code());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::error::EngineError;
use crate::eval::{evaluate, EvalWeights};
use crate::rules::terminal_outcome;

use super::tt::{CacheKey, CachedScore, TranspositionCache};

/// Infinity score for alpha-beta bounds, far outside any reachable score
pub const INF: i32 = 1_000_000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (calls to `search`)
    pub nodes: u64,
    /// Move loops left early on `beta <= alpha`
    pub cutoffs: u64,
    /// Total TT probes
    pub cache_probes: u64,
    /// TT probes that returned a usable score
    pub cache_hits: u64,
}

impl SearchStats {
    /// TT score hit rate
    pub fn cache_hit_rate(&self) -> f64 {
        if self.cache_probes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.cache_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Pos,
    /// Score of the position after `best_move`
    pub score: i32,
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher playing a fixed symbol.
pub struct Searcher {
    me: Stone,
    weights: EvalWeights,
    cache: Option<TranspositionCache>,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher for `me` with a transposition table of `cache_capacity` entries.
    #[must_use]
    pub fn new(me: Stone, weights: EvalWeights, cache_capacity: usize) -> Self {
        Self {
            me,
            weights,
            cache: Some(TranspositionCache::new(cache_capacity)),
            stats: SearchStats::default(),
        }
    }

    /// Create a searcher that recomputes every node.
    #[must_use]
    pub fn without_cache(me: Stone, weights: EvalWeights) -> Self {
        Self {
            me,
            weights,
            cache: None,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn me(&self) -> Stone {
        self.me
    }

    /// Statistics accumulated since the last `choose_move` started
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Drop all cached scores
    pub fn clear_cache(&mut self) {
        if let Some(cache) = &mut self.cache {
            cache.clear();
        }
    }

    /// Pick the move with the strictly best score for `me`.
    ///
    /// Every root candidate is searched with a full window, so there is no
    /// pruning at the root; ties keep the earlier (more central) candidate.
    pub fn choose_move(&mut self, board: &mut Board, depth: u8) -> Result<SearchResult, EngineError> {
        self.stats = SearchStats::default();

        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let child_depth = depth.saturating_sub(1);
        let mut best: Option<(Pos, i32)> = None;

        for mov in moves {
            let score = {
                let mut placed = board.place_scoped(mov, self.me);
                self.search(&mut placed, child_depth, false, -INF, INF)
            };
            log::trace!("root move {} scored {}", mov.to_code(), score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mov, score));
            }
        }

        let (best_move, score) = best.ok_or(EngineError::NoLegalMoves)?;
        log::debug!(
            "best move {} score {} (nodes {}, cutoffs {}, cache hits {:.1}%)",
            best_move.to_code(),
            score,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.cache_hit_rate()
        );

        Ok(SearchResult {
            best_move,
            score,
            stats: self.stats.clone(),
        })
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `maximizing` is true when `me` is to move. Fail-soft: the returned
    /// value may lie outside `(alpha, beta)`.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let key = CacheKey {
            signature: board.signature(),
            depth,
            maximizing,
            symbol: self.me,
        };

        if let Some(cache) = &mut self.cache {
            self.stats.cache_probes += 1;
            if let Some(score) = cache.get(&key).and_then(|entry| entry.usable(alpha, beta)) {
                self.stats.cache_hits += 1;
                return score;
            }
        }

        if let Some(score) = terminal_outcome(board, self.me).score() {
            self.store(key, CachedScore::exact(score));
            return score;
        }

        if depth == 0 {
            let score = evaluate(board, self.me, &self.weights);
            self.store(key, CachedScore::exact(score));
            return score;
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            self.store(key, CachedScore::exact(0));
            return 0;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let stone = if maximizing { self.me } else { self.me.opponent() };
        let mut best = if maximizing { -INF } else { INF };

        for mov in moves {
            let score = {
                let mut placed = board.place_scoped(mov, stone);
                self.search(&mut placed, depth - 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.store(key, CachedScore::from_window(best, alpha_orig, beta_orig));
        best
    }

    #[inline]
    fn store(&mut self, key: CacheKey, entry: CachedScore) {
        if let Some(cache) = &mut self.cache {
            cache.put(key, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::CENTER_CELLS;
    use crate::rules::WIN_SCORE;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            board.place(Pos::new(r, c), s);
        }
        board
    }

    fn searcher(me: Stone) -> Searcher {
        Searcher::new(me, EvalWeights::default(), 10_000)
    }

    #[test]
    fn test_search_empty_board_depth1() {
        let mut board = Board::new();
        let result = searcher(Stone::X).choose_move(&mut board, 1).unwrap();
        assert_eq!(result.best_move, Pos::new(2, 2));
    }

    #[test]
    fn test_search_empty_board_opens_in_center() {
        for me in [Stone::X, Stone::O] {
            for depth in 1..=4 {
                let mut board = Board::new();
                let result = searcher(me).choose_move(&mut board, depth).unwrap();
                assert!(
                    CENTER_CELLS.contains(&result.best_move),
                    "{me:?} depth {depth} got {}",
                    result.best_move.to_code()
                );
                assert!(board.is_board_empty());
            }
        }
    }

    #[test]
    fn test_search_finds_winning_move() {
        // X X _ X on the top row
        let mut board = board_with(&[
            (0, 0, Stone::X),
            (0, 1, Stone::X),
            (0, 3, Stone::X),
            (2, 2, Stone::O),
            (3, 0, Stone::O),
            (4, 3, Stone::O),
        ]);
        for depth in 1..=3 {
            let result = searcher(Stone::X).choose_move(&mut board, depth).unwrap();
            assert_eq!(result.best_move, Pos::new(0, 2), "depth {depth}");
            assert_eq!(result.score, WIN_SCORE);
        }
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // O O _ O on the bottom row, X to move
        let mut board = board_with(&[
            (4, 0, Stone::O),
            (4, 1, Stone::O),
            (4, 3, Stone::O),
            (0, 0, Stone::X),
            (0, 4, Stone::X),
            (2, 2, Stone::X),
        ]);
        let result = searcher(Stone::X).choose_move(&mut board, 2).unwrap();
        assert_eq!(result.best_move, Pos::new(4, 2));
        assert!(result.score > -WIN_SCORE);
    }

    #[test]
    fn test_search_detects_existing_win() {
        let mut board = board_with(&[
            (1, 0, Stone::O),
            (1, 1, Stone::O),
            (1, 2, Stone::O),
            (1, 3, Stone::O),
        ]);
        let mut s = searcher(Stone::O);
        assert_eq!(s.search(&mut board, 3, true, -INF, INF), WIN_SCORE);
        let mut s = searcher(Stone::X);
        assert_eq!(s.search(&mut board, 3, true, -INF, INF), -WIN_SCORE);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = board_with(&[(2, 2, Stone::X), (1, 1, Stone::O)]);
        let before = board.clone();
        let mut s = searcher(Stone::X);
        let _ = s.search(&mut board, 3, true, -INF, INF);
        assert_eq!(board, before);
        let _ = s.choose_move(&mut board, 3).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_full_board_errors() {
        let rows = ["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"];
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let stone = if ch == 'X' { Stone::X } else { Stone::O };
                board.place(Pos::new(r as u8, c as u8), stone);
            }
        }
        let mut s = searcher(Stone::X);
        assert_eq!(s.choose_move(&mut board, 3).unwrap_err(), EngineError::NoLegalMoves);
        assert_eq!(s.search(&mut board, 3, true, -INF, INF), 0);
    }

    #[test]
    fn test_cache_reused_across_searches() {
        let mut board = board_with(&[(2, 2, Stone::X), (1, 2, Stone::O)]);
        let mut s = searcher(Stone::X);
        let first = s.choose_move(&mut board, 3).unwrap();
        let second = s.choose_move(&mut board, 3).unwrap();

        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert!(second.stats.cache_hits > 0);
        assert!(second.stats.nodes < first.stats.nodes);
    }

    #[test]
    fn test_uncached_search_matches() {
        let mut board = board_with(&[(2, 2, Stone::X), (1, 2, Stone::O), (3, 1, Stone::X)]);
        let cached = searcher(Stone::O).choose_move(&mut board, 3).unwrap();
        let plain = Searcher::without_cache(Stone::O, EvalWeights::default())
            .choose_move(&mut board, 3)
            .unwrap();
        assert_eq!(cached.best_move, plain.best_move);
        assert_eq!(cached.score, plain.score);
    }

    #[test]
    fn test_depth_zero_evaluates_root_children() {
        // depth 0 behaves like depth 1: children go straight to the evaluator
        let mut board = Board::new();
        let result = searcher(Stone::X).choose_move(&mut board, 0).unwrap();
        assert_eq!(result.best_move, Pos::new(2, 2));
    }

    #[test]
    fn test_search_counts_cutoffs() {
        let mut board = board_with(&[(2, 2, Stone::X), (1, 1, Stone::O)]);
        let result = searcher(Stone::X).choose_move(&mut board, 3).unwrap();
        assert!(result.stats.nodes > 0);
        assert!(result.stats.cutoffs > 0);
    }
}
