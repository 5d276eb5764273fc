//! Game rules for the 5x5 variant
//!
//! This module implements the rule set:
//! - Line measurement (longest run through a cell)
//! - Terminal outcome (four wins, a bare three loses, full board draws)

pub mod win;

// Re-exports for convenient access
pub use win::{
    line_winner, longest_run, run_length, terminal_outcome, Outcome, DIRECTIONS, LOSING_RUN,
    WIN_RUN, WIN_SCORE,
};
