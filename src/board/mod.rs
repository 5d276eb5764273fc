//! Board representation for the 5x5 grid

pub mod bitboard;
pub mod board;


use crate::error::MoveError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, PlacedStone, Signature};

/// Board size (5x5)
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 25

/// Center cell used for candidate ordering
pub const CENTER: Pos = Pos { row: 2, col: 2 };

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    X,
    O,
}

impl Stone {
    /// Get opponent symbol
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::X => Stone::O,
            Stone::O => Stone::X,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Symbol for a player number as assigned by the server (1 plays X).
    pub fn for_player(player: u8) -> Stone {
        if player == 1 {
            Stone::X
        } else {
            Stone::O
        }
    }

    /// Single-character form used in signatures and board printing
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::X => 'X',
            Stone::O => 'O',
            Stone::Empty => '-',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Decode a wire move code: `(row + 1) * 10 + (col + 1)`, both digits in 1..=5.
    pub fn from_code(code: u32) -> Result<Self, MoveError> {
        let (tens, units) = (code / 10, code % 10);
        if !(1..=BOARD_SIZE as u32).contains(&tens) || !(1..=BOARD_SIZE as u32).contains(&units) {
            return Err(MoveError::OutOfRange(code));
        }
        Ok(Self::new((tens - 1) as u8, (units - 1) as u8))
    }

    /// Encode as a wire move code (11..=55)
    #[inline]
    pub fn to_code(self) -> u32 {
        (self.row as u32 + 1) * 10 + (self.col as u32 + 1)
    }

    /// Chebyshev distance to the board center
    #[inline]
    pub fn center_distance(self) -> u8 {
        self.row.abs_diff(CENTER.row).max(self.col.abs_diff(CENTER.col))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_code())
    }
}
