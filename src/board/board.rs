//! Board structure: four 3x3 quadrants

use std::fmt;

use super::{to_quadrant, Marble, Move, Rotation, QUADRANTS, QUADRANT_CELLS, TOTAL_CELLS};
use crate::error::GameError;
use crate::rules::{evaluate_outcome, Outcome};

/// Game board. Copying a board yields a fully independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Marble; QUADRANT_CELLS]; QUADRANTS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Marble::Empty; QUADRANT_CELLS]; QUADRANTS],
        }
    }

    /// Get marble at (quadrant, cell)
    #[inline]
    pub fn get(&self, quadrant: usize, cell: usize) -> Marble {
        self.cells[quadrant][cell]
    }

    /// Get marble at composite (row, col) of the 6x6 board
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Marble {
        let (quadrant, cell) = to_quadrant(row, col);
        self.cells[quadrant][cell]
    }

    /// The nine cells of one quadrant, row-major
    #[inline]
    pub fn quadrant(&self, quadrant: usize) -> &[Marble; QUADRANT_CELLS] {
        &self.cells[quadrant]
    }

    /// Check a full move given as raw input.
    ///
    /// `rotation` is a direction token (`r`/`l`, either case). The rotation
    /// target's contents never matter.
    pub fn is_legal(&self, quadrant: usize, cell: usize, rotate_quadrant: usize, rotation: char) -> bool {
        quadrant < QUADRANTS
            && cell < QUADRANT_CELLS
            && rotate_quadrant < QUADRANTS
            && Rotation::from_token(rotation).is_some()
            && self.cells[quadrant][cell] == Marble::Empty
    }

    /// Validate only the placement half of a move
    pub fn check_placement(&self, quadrant: usize, cell: usize) -> Result<(), GameError> {
        if quadrant >= QUADRANTS {
            return Err(GameError::QuadrantOutOfRange(quadrant));
        }
        if cell >= QUADRANT_CELLS {
            return Err(GameError::CellOutOfRange(cell));
        }
        if self.cells[quadrant][cell] != Marble::Empty {
            return Err(GameError::Occupied { quadrant, cell });
        }
        Ok(())
    }

    /// Write a marble (no legality check)
    #[inline]
    pub fn place(&mut self, quadrant: usize, cell: usize, marble: Marble) {
        self.cells[quadrant][cell] = marble;
    }

    /// Rotate one quadrant by 90 degrees. The center cell never moves.
    #[inline]
    pub fn rotate(&mut self, quadrant: usize, rotation: Rotation) {
        let old = self.cells[quadrant];
        let map = rotation.permutation();
        for (dst, &src) in map.iter().enumerate() {
            self.cells[quadrant][dst] = old[src];
        }
    }

    /// Place a marble after checking the placement is legal
    pub fn apply_placement(&mut self, quadrant: usize, cell: usize, marble: Marble) -> Result<(), GameError> {
        self.check_placement(quadrant, cell)?;
        self.place(quadrant, cell, marble);
        Ok(())
    }

    /// Rotate a quadrant. The caller guarantees `quadrant < 4`.
    #[inline]
    pub fn apply_rotation(&mut self, quadrant: usize, rotation: Rotation) {
        debug_assert!(quadrant < QUADRANTS);
        self.rotate(quadrant, rotation);
    }

    /// Apply a full move; nothing changes when the placement is illegal.
    pub fn apply_move(&mut self, mv: Move, marble: Marble) -> Result<(), GameError> {
        if mv.rotate_quadrant as usize >= QUADRANTS {
            return Err(GameError::QuadrantOutOfRange(mv.rotate_quadrant as usize));
        }
        self.apply_placement(mv.quadrant as usize, mv.cell as usize, marble)?;
        self.apply_rotation(mv.rotate_quadrant as usize, mv.rotation);
        Ok(())
    }

    /// Current game outcome, recomputed on every call
    #[inline]
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(self)
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&m| m == Marble::Empty)
            .count()
    }

    /// Total marbles on board
    #[inline]
    pub fn marble_count(&self) -> usize {
        TOTAL_CELLS - self.empty_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.empty_count() == TOTAL_CELLS
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "+-------+-------+";

        for half in 0..2 {
            writeln!(f, "{}", SEPARATOR)?;
            for row in 0..3 {
                write!(f, "|")?;
                for quadrant in [half * 2, half * 2 + 1] {
                    for col in 0..3 {
                        write!(f, " {}", self.cells[quadrant][row * 3 + col].symbol())?;
                    }
                    write!(f, " |")?;
                }
                writeln!(f)?;
            }
        }
        write!(f, "{}", SEPARATOR)
    }
}
