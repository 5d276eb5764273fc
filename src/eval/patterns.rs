//! Evaluation weights for the 5x5 variant
//!
//! A bare three is a loss in this rule set, so the three weight is negative
//! while four keeps the sign of its owner.

use crate::board::{Pos, TOTAL_CELLS};

/// Cells that earn the center-control bonus
pub const CENTER_CELLS: [Pos; 5] = [
    Pos { row: 2, col: 2 },
    Pos { row: 1, col: 2 },
    Pos { row: 2, col: 1 },
    Pos { row: 2, col: 3 },
    Pos { row: 3, col: 2 },
];

/// Tunable heuristic weights, all from the owner's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWeights {
    /// Per stone on one of `center_cells`.
    ///
    /// Must exceed twice the swing of all other terms on a board with two
    /// stones per side, or the opening drifts to the edge.
    pub center: i32,
    /// Line of one (isolated in that direction)
    pub single: i32,
    /// Line of two; doubled when it spans a gap
    pub pair: i32,
    /// Line of three, a losing shape
    pub three: i32,
    /// Line of four or more
    pub four: i32,
    pub center_cells: [Pos; 5],
}

impl EvalWeights {
    /// Upper bound on the absolute value `evaluate` can return.
    ///
    /// Must stay below `WIN_SCORE` so no heuristic total outranks a real
    /// terminal result.
    pub fn max_magnitude(&self) -> i32 {
        let cells = TOTAL_CELLS as i32;
        let line = self
            .single
            .abs()
            .max(2 * self.pair.abs())
            .max(self.three.abs())
            .max(self.four.abs());
        let terminal = self.three.abs().max(self.four.abs());

        let center = self.center_cells.len() as i32 * self.center.abs();
        let patterns = cells * 4 * line;
        let correction = cells * terminal;
        // Each empty cell is probed once per side
        let probe = cells * 2 * terminal;

        center + patterns + correction + probe
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            center: 300,
            single: 1,
            pair: 8,
            three: -40,
            four: 40,
            center_cells: CENTER_CELLS,
        }
    }
}
