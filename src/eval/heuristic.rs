//! Heuristic evaluation function for non-terminal positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! It evaluates board positions based on:
//! - Positional bonuses (center control)
//! - Line patterns through every stone, allowing one gap
//! - Terminal-adjacent runs (exact three, four or more)
//! - A one-ply probe of every empty cell for both sides

use crate::board::{Board, Pos, Stone};
use crate::rules::{longest_run, DIRECTIONS, LOSING_RUN, WIN_RUN};

use super::patterns::EvalWeights;

/// Evaluate the board from the perspective of `me`.
///
/// Positive values favor `me`. The board is borrowed mutably for the probe
/// and is returned unchanged.
#[must_use]
pub fn evaluate(board: &mut Board, me: Stone, weights: &EvalWeights) -> i32 {
    let mut score = 0;

    for pos in board.occupied().iter_ones() {
        let stone = board.get(pos);
        let sign = if stone == me { 1 } else { -1 };

        if weights.center_cells.contains(&pos) {
            score += sign * weights.center;
        }

        for &(dr, dc) in &DIRECTIONS {
            let (len, gap) = evaluate_pattern(board, pos, dr, dc);
            score += sign * pattern_score(len, gap, weights);
        }

        score += sign * run_score(longest_run(board, pos, stone), weights);
    }

    score + probe(board, me, weights)
}

/// Measure the line of the stone at `pos` along one direction.
///
/// The walk stops at the opposing symbol or the edge. A single empty cell
/// may be crossed, once for both directions together, when another stone of
/// the same symbol lies right behind it. Returns `(length, crossed_gap)`.
pub fn evaluate_pattern(board: &Board, pos: Pos, dr: i32, dc: i32) -> (u8, bool) {
    let stone = board.get(pos);
    let mut gap = false;
    let forward = walk(board, pos, dr, dc, stone, &mut gap);
    let backward = walk(board, pos, -dr, -dc, stone, &mut gap);
    (1 + forward + backward, gap)
}

fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone, gap: &mut bool) -> u8 {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;

    while Pos::is_valid(r, c) {
        let cell = board.get(Pos::new(r as u8, c as u8));
        if cell == stone {
            count += 1;
        } else if cell == Stone::Empty && !*gap {
            let (nr, nc) = (r + dr, c + dc);
            if Pos::is_valid(nr, nc) && board.get(Pos::new(nr as u8, nc as u8)) == stone {
                *gap = true;
            } else {
                break;
            }
        } else {
            break;
        }
        r += dr;
        c += dc;
    }
    count
}

#[inline]
fn pattern_score(len: u8, gap: bool, weights: &EvalWeights) -> i32 {
    match len {
        0 | 1 => weights.single,
        2 if gap => 2 * weights.pair,
        2 => weights.pair,
        3 => weights.three,
        _ => weights.four,
    }
}

/// Weight of an unbroken run that would end the game
#[inline]
fn run_score(run: u8, weights: &EvalWeights) -> i32 {
    if run >= WIN_RUN {
        weights.four
    } else if run == LOSING_RUN {
        weights.three
    } else {
        0
    }
}

/// Try every empty cell for both sides one ply past the horizon.
fn probe(board: &mut Board, me: Stone, weights: &EvalWeights) -> i32 {
    let opponent = me.opponent();
    let mut score = 0;

    for pos in board.occupied().complement().iter_ones() {
        {
            let placed = board.place_scoped(pos, me);
            score += run_score(longest_run(&placed, pos, me), weights);
        }
        {
            let placed = board.place_scoped(pos, opponent);
            score -= run_score(longest_run(&placed, pos, opponent), weights);
        }
    }
    score
}
