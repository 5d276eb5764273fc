//! Evaluation module for 5x5 positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers:
//! - Line patterns (singles, pairs, threes, fours) with one-gap extension
//! - Terminal-adjacent runs and a one-ply threat probe
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_pattern};
pub use patterns::{EvalWeights, CENTER_CELLS};
