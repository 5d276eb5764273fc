//! Decision engine for a 5x5 line game
//!
//! Two players alternate placing X and O on a 5x5 grid. Four or more in a
//! line wins, but a bare three-in-a-row loses for whoever owns it.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and move codes
//! - [`rules`]: Run measurement and terminal outcome
//! - [`eval`]: Static evaluation of non-terminal positions
//! - [`search`]: Minimax with alpha-beta and an LRU transposition table
//! - [`engine`]: Per-game engine facade used by the client
//! - [`client`]: Server protocol, transport and game loop
//!
//! # Quick Start
//!
//! ```
//! use grid5::{AIEngine, EngineConfig, Stone};
//!
//! let mut engine = AIEngine::new(EngineConfig::with_depth(2), Stone::O);
//! engine.apply_opponent_move(33).unwrap();
//!
//! let reply = engine.choose_move().unwrap();
//! engine.apply_own_move(reply).unwrap();
//! println!("AI plays {reply}");
//! ```

pub mod board;
pub mod client;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult};
pub use error::{ClientError, EngineError, MoveError};
pub use rules::Outcome;
