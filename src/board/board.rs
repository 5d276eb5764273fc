//! Board structure with scoped placement for search

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// X stones bitboard
    pub x: Bitboard,
    /// O stones bitboard
    pub o: Bitboard,
}

/// Order-sensitive encoding of the full grid, one byte per cell (`-`, `X`, `O`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; TOTAL_CELLS]);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.x.get(pos) {
            Stone::X
        } else if self.o.get(pos) {
            Stone::O
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a stone on an empty cell.
    ///
    /// Callers only pass board-derived candidates, so an occupied target is
    /// an internal invariant breach.
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "place on occupied cell {pos:?}");
        match stone {
            Stone::X => self.x.set(pos),
            Stone::O => self.o.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// Place a stone that is taken back when the returned guard drops.
    ///
    /// The guard derefs to the board, so recursion can continue through it.
    #[inline]
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> PlacedStone<'_> {
        self.place(pos, stone);
        PlacedStone { board: self, pos }
    }

    /// Get bitboard for a symbol (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::X => Some(&self.x),
            Stone::O => Some(&self.o),
            Stone::Empty => None,
        }
    }

    /// All occupied cells in row-major order
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x.union(self.o)
    }

    /// Empty cells ordered center-out (Chebyshev distance), row-major on ties.
    pub fn available_moves(&self) -> Vec<Pos> {
        let mut moves: Vec<Pos> = self.occupied().complement().iter_ones().collect();
        // sort_by_key is stable, so row-major order survives within a ring
        moves.sort_by_key(|p| p.center_distance());
        moves
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Cache-key encoding of the grid contents
    pub fn signature(&self) -> Signature {
        let mut bytes = [b'-'; TOTAL_CELLS];
        for (idx, byte) in bytes.iter_mut().enumerate() {
            *byte = self.get(Pos::from_index(idx)).symbol() as u8;
        }
        Signature(bytes)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 1..=BOARD_SIZE {
            write!(f, " {c}")?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{}", r + 1)?;
            for c in 0..BOARD_SIZE {
                write!(f, " {}", self.get(Pos::new(r as u8, c as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A speculative placement; the stone is removed again on drop.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl PlacedStone<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.remove(self.pos);
    }
}
