//! Board representation for Pentago
//!
//! The 6x6 board is stored as four 3x3 quadrants. Quadrants are numbered
//! row-major (0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right) and so
//! are the nine cells inside each quadrant.

pub mod board;
pub mod moves;
pub mod notation;


// Re-exports
pub use board::Board;
pub use moves::{Move, Rotation};

/// Side length of the composite board
pub const BOARD_SIZE: usize = 6;
/// Number of quadrants
pub const QUADRANTS: usize = 4;
/// Cells per quadrant (3x3)
pub const QUADRANT_CELLS: usize = 9;
pub const TOTAL_CELLS: usize = QUADRANTS * QUADRANT_CELLS; // 36

/// Marble colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marble {
    #[default]
    Empty,
    Black,
    White,
}

impl Marble {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Marble {
        match self {
            Marble::Black => Marble::White,
            Marble::White => Marble::Black,
            Marble::Empty => Marble::Empty,
        }
    }

    /// Single-character symbol used by the text rendering
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Marble::Empty => '.',
            Marble::Black => 'B',
            Marble::White => 'W',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Marble::Empty => "Empty",
            Marble::Black => "Black",
            Marble::White => "White",
        }
    }
}

/// Convert composite (row, col) to (quadrant, cell)
#[inline]
pub const fn to_quadrant(row: usize, col: usize) -> (usize, usize) {
    ((row / 3) * 2 + col / 3, (row % 3) * 3 + col % 3)
}

/// Convert (quadrant, cell) to composite (row, col)
#[inline]
pub const fn to_composite(quadrant: usize, cell: usize) -> (usize, usize) {
    ((quadrant / 2) * 3 + cell / 3, (quadrant % 2) * 3 + cell % 3)
}

/// Builds a board from six rows of `.`/`B`/`W`, whitespace ignored.
#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; BOARD_SIZE]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), BOARD_SIZE, "row {} must have 6 cells", row);
        for (col, ch) in cells.into_iter().enumerate() {
            let marble = match ch {
                'B' => Marble::Black,
                'W' => Marble::White,
                _ => Marble::Empty,
            };
            let (q, c) = to_quadrant(row, col);
            board.place(q, c, marble);
        }
    }
    board
}
