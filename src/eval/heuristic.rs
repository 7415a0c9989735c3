//! Heuristic evaluation function for Pentago board positions
//!
//! The score of a position for a color is the number of adjacent pairs of
//! that color. Counted pairs are:
//! - every horizontally or vertically adjacent pair on the 6x6 board
//! - every diagonally adjacent pair inside a single quadrant
//! - the two diagonal pairs crossing the board center along the main diagonals
//!
//! The opponent's pairs are not subtracted.

use crate::board::{to_quadrant, Board, Marble, BOARD_SIZE};

/// Number of scored pairs: 30 horizontal + 30 vertical + 32 in-quadrant diagonal + 2
pub const PAIR_COUNT: usize = 94;

/// Every scored pair as composite (row, col) coordinates
pub const SCORED_PAIRS: [[(u8, u8); 2]; PAIR_COUNT] = build_pairs();

const fn same_quadrant(a: (usize, usize), b: (usize, usize)) -> bool {
    to_quadrant(a.0, a.1).0 == to_quadrant(b.0, b.1).0
}

const fn build_pairs() -> [[(u8, u8); 2]; PAIR_COUNT] {
    let mut pairs = [[(0u8, 0u8); 2]; PAIR_COUNT];
    let mut n = 0;

    let mut row = 0;
    while row < BOARD_SIZE {
        let mut col = 0;
        while col < BOARD_SIZE {
            let here = (row as u8, col as u8);

            if col + 1 < BOARD_SIZE {
                pairs[n] = [here, (row as u8, (col + 1) as u8)];
                n += 1;
            }
            if row + 1 < BOARD_SIZE {
                pairs[n] = [here, ((row + 1) as u8, col as u8)];
                n += 1;
            }
            // Down-right: inside a quadrant or on the main diagonal
            if row + 1 < BOARD_SIZE
                && col + 1 < BOARD_SIZE
                && (same_quadrant((row, col), (row + 1, col + 1)) || row == col)
            {
                pairs[n] = [here, ((row + 1) as u8, (col + 1) as u8)];
                n += 1;
            }
            // Down-left: inside a quadrant or on the anti-diagonal
            if row + 1 < BOARD_SIZE
                && col >= 1
                && (same_quadrant((row, col), (row + 1, col - 1)) || row + col == BOARD_SIZE - 1)
            {
                pairs[n] = [here, ((row + 1) as u8, (col - 1) as u8)];
                n += 1;
            }
            col += 1;
        }
        row += 1;
    }

    assert!(n == PAIR_COUNT);
    pairs
}

/// Count the scored pairs held by `marble`.
///
/// Larger is better for `marble`. An empty marble always scores 0.
#[must_use]
pub fn score(board: &Board, marble: Marble) -> i32 {
    if marble == Marble::Empty {
        return 0;
    }
    SCORED_PAIRS
        .iter()
        .filter(|[(r0, c0), (r1, c1)]| {
            board.at(*r0 as usize, *c0 as usize) == marble
                && board.at(*r1 as usize, *c1 as usize) == marble
        })
        .count() as i32
}
