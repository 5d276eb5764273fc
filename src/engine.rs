//! Game-facing engine wrapping board state and search
//!
//! The engine owns the board for one game and plays one fixed symbol. The
//! client feeds it wire move codes and asks it for replies:
//!
//! - [`AIEngine::apply_opponent_move`] records the rival's move
//! - [`AIEngine::choose_move`] searches and returns a move code
//! - [`AIEngine::apply_own_move`] records the reply once sent
//! - [`AIEngine::is_terminal`] reports the game state from the engine's side
//!
//! # Example
//!
//! ```
//! use grid5::{AIEngine, EngineConfig, Outcome, Stone};
//!
//! let mut engine = AIEngine::new(EngineConfig::with_depth(2), Stone::X);
//! engine.apply_opponent_move(11).unwrap();
//!
//! let reply = engine.choose_move().unwrap();
//! engine.apply_own_move(reply).unwrap();
//! assert_eq!(engine.is_terminal(), Outcome::Ongoing);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::error::{EngineError, MoveError};
use crate::eval::EvalWeights;
use crate::rules::{terminal_outcome, Outcome};
use crate::search::{Searcher, DEFAULT_CAPACITY};

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u8 = 4;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched per move, the root move included
    pub depth: u8,
    /// Maximum transposition table entries
    pub cache_capacity: usize,
    pub weights: EvalWeights,
}

impl EngineConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            cache_capacity: DEFAULT_CAPACITY,
            weights: EvalWeights::default(),
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Search score of the position after the move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Wire code of the chosen move
    #[inline]
    pub fn code(&self) -> u32 {
        self.best_move.to_code()
    }
}

/// Engine for one game, playing a fixed symbol.
pub struct AIEngine {
    board: Board,
    searcher: Searcher,
    me: Stone,
    depth: u8,
}

impl AIEngine {
    /// Create an engine playing `me` on an empty board.
    pub fn new(config: EngineConfig, me: Stone) -> Self {
        Self {
            board: Board::new(),
            searcher: Searcher::new(me, config.weights, config.cache_capacity),
            me,
            depth: config.depth,
        }
    }

    /// Record the rival's move. A bad code leaves the board unchanged.
    pub fn apply_opponent_move(&mut self, code: u32) -> Result<Pos, MoveError> {
        self.apply(code, self.me.opponent())
    }

    /// Record the engine's own move after it has been sent.
    pub fn apply_own_move(&mut self, code: u32) -> Result<Pos, MoveError> {
        self.apply(code, self.me)
    }

    fn apply(&mut self, code: u32, stone: Stone) -> Result<Pos, MoveError> {
        let pos = Pos::from_code(code)?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.board.place(pos, stone);
        Ok(pos)
    }

    /// Search the current position and return the chosen move code.
    pub fn choose_move(&mut self) -> Result<u32, EngineError> {
        self.choose_move_with_stats().map(|result| result.code())
    }

    /// Search the current position and return the move with statistics.
    pub fn choose_move_with_stats(&mut self) -> Result<MoveResult, EngineError> {
        let start = Instant::now();
        let result = self.searcher.choose_move(&mut self.board, self.depth)?;
        let time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "chose {} (score {}, {} nodes, {}ms)",
            result.best_move.to_code(),
            result.score,
            result.stats.nodes,
            time_ms
        );

        Ok(MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
        })
    }

    /// Game state from the engine's point of view
    pub fn is_terminal(&self) -> Outcome {
        terminal_outcome(&self.board, self.me)
    }

    /// Current board, read-only
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn me(&self) -> Stone {
        self.me
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }
}
