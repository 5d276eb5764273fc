//! Terminal-state detection
//!
//! Win conditions for this variant:
//! 1. Four or more of a symbol in a line wins for its owner
//! 2. A bare three-in-a-row loses for its owner
//!
//! The first occupied cell (row-major) that shows either pattern decides.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Score of a won position, from the searching player's view
pub const WIN_SCORE: i32 = 10_000;

/// Run length that wins for its owner
pub const WIN_RUN: u8 = 4;

/// Run length that loses for its owner
pub const LOSING_RUN: u8 = 3;

/// Game state relative to the side the engine plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
    Ongoing,
}

impl Outcome {
    /// Signed search score, `None` while the game is still open
    #[inline]
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::Win => Some(WIN_SCORE),
            Outcome::Loss => Some(-WIN_SCORE),
            Outcome::Draw => Some(0),
            Outcome::Ongoing => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Count same-symbol cells from `pos` (exclusive) in one direction.
#[inline]
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u8 {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the run of `stone` through `pos` along one direction.
///
/// The origin cell is always counted, whatever it holds.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u8 {
    1 + count_direction(board, pos, dr, dc, stone) + count_direction(board, pos, -dr, -dc, stone)
}

/// Longest run of `stone` through `pos` over all four directions.
pub fn longest_run(board: &Board, pos: Pos, stone: Stone) -> u8 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| run_length(board, pos, dr, dc, stone))
        .max()
        .unwrap_or(1)
}

/// Winner implied by the line rules, if any.
///
/// Scans occupied cells row-major; a run of four or more wins for its owner,
/// a run of exactly three hands the game to the other side.
pub fn line_winner(board: &Board) -> Option<Stone> {
    for pos in board.occupied().iter_ones() {
        let stone = board.get(pos);
        let run = longest_run(board, pos, stone);
        if run >= WIN_RUN {
            return Some(stone);
        }
        if run == LOSING_RUN {
            return Some(stone.opponent());
        }
    }
    None
}

/// Outcome of the position for the player holding `me`.
pub fn terminal_outcome(board: &Board, me: Stone) -> Outcome {
    match line_winner(board) {
        Some(winner) if winner == me => Outcome::Win,
        Some(_) => Outcome::Loss,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            board.place(Pos::new(r, c), s);
        }
        board
    }

    /// Cells of a line of `len` starting at `start`, stepping by `dir`
    fn line(start: (u8, u8), dir: (i32, i32), len: usize) -> Vec<(u8, u8)> {
        (0..len as i32)
            .map(|i| {
                (
                    (start.0 as i32 + dir.0 * i) as u8,
                    (start.1 as i32 + dir.1 * i) as u8,
                )
            })
            .collect()
    }

    /// One start cell per direction that leaves room for four stones
    const LINE_STARTS: [((u8, u8), (i32, i32)); 4] = [
        ((1, 0), (0, 1)),
        ((0, 2), (1, 0)),
        ((0, 0), (1, 1)),
        ((0, 4), (1, -1)),
    ];

    #[test]
    fn test_longest_run_single() {
        let board = board_with(&[(2, 2, Stone::X)]);
        assert_eq!(longest_run(&board, Pos::new(2, 2), Stone::X), 1);
    }

    #[test]
    fn test_longest_run_counts_both_ways() {
        let board = board_with(&[(2, 0, Stone::X), (2, 1, Stone::X), (2, 3, Stone::X)]);
        // Origin (2,2) is empty but still counted
        assert_eq!(longest_run(&board, Pos::new(2, 2), Stone::X), 4);
        assert_eq!(longest_run(&board, Pos::new(2, 0), Stone::X), 2);
    }

    #[test]
    fn test_longest_run_stops_at_other_symbol() {
        let board = board_with(&[(0, 0, Stone::O), (1, 1, Stone::O), (2, 2, Stone::X), (3, 3, Stone::O)]);
        assert_eq!(longest_run(&board, Pos::new(1, 1), Stone::O), 2);
        assert_eq!(longest_run(&board, Pos::new(3, 3), Stone::O), 1);
    }

    #[test]
    fn test_four_wins_in_every_direction() {
        for (start, dir) in LINE_STARTS {
            let stones: Vec<_> = line(start, dir, 4).into_iter().map(|(r, c)| (r, c, Stone::X)).collect();
            let board = board_with(&stones);
            assert_eq!(line_winner(&board), Some(Stone::X), "dir {dir:?}");
            assert_eq!(terminal_outcome(&board, Stone::X), Outcome::Win);
            assert_eq!(terminal_outcome(&board, Stone::O), Outcome::Loss);
        }
    }

    #[test]
    fn test_five_wins() {
        let stones: Vec<_> = (0..5).map(|c| (4, c, Stone::O)).collect();
        let board = board_with(&stones);
        assert_eq!(terminal_outcome(&board, Stone::O), Outcome::Win);
    }

    #[test]
    fn test_bare_three_loses_in_every_direction() {
        for (start, dir) in LINE_STARTS {
            let stones: Vec<_> = line(start, dir, 3).into_iter().map(|(r, c)| (r, c, Stone::O)).collect();
            let board = board_with(&stones);
            assert_eq!(line_winner(&board), Some(Stone::X), "dir {dir:?}");
            assert_eq!(terminal_outcome(&board, Stone::O), Outcome::Loss);
            assert_eq!(terminal_outcome(&board, Stone::X), Outcome::Win);
        }
    }

    #[test]
    fn test_first_cell_in_scan_order_decides() {
        // X three on row 0 is found before O four on row 3
        let mut stones: Vec<_> = (0..3).map(|c| (0, c, Stone::X)).collect();
        stones.extend((0..4).map(|c| (3, c, Stone::O)));
        let board = board_with(&stones);
        assert_eq!(line_winner(&board), Some(Stone::O));

        // O four on row 0 is found before X three on row 3
        let mut stones: Vec<_> = (0..4).map(|c| (0, c, Stone::O)).collect();
        stones.extend((0..3).map(|c| (3, c, Stone::X)));
        let board = board_with(&stones);
        assert_eq!(line_winner(&board), Some(Stone::O));
    }

    #[test]
    fn test_two_in_a_row_is_ongoing() {
        let board = board_with(&[(0, 0, Stone::X), (0, 1, Stone::X), (1, 0, Stone::O)]);
        assert_eq!(terminal_outcome(&board, Stone::X), Outcome::Ongoing);
        assert_eq!(Outcome::Ongoing.score(), None);
    }

    #[test]
    fn test_full_board_without_lines_is_draw() {
        // Two-row stripes: no line of three in any direction
        let rows = ["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"];
        let mut stones = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let stone = if ch == 'X' { Stone::X } else { Stone::O };
                stones.push((r as u8, c as u8, stone));
            }
        }
        let board = board_with(&stones);
        assert!(board.is_full());
        assert_eq!(terminal_outcome(&board, Stone::X), Outcome::Draw);
        assert_eq!(Outcome::Draw.score(), Some(0));
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(Outcome::Win.score(), Some(WIN_SCORE));
        assert_eq!(Outcome::Loss.score(), Some(-WIN_SCORE));
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::Ongoing.is_terminal());
    }
}
