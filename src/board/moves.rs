//! Moves and quadrant rotations

use super::{Board, Marble, QUADRANTS, QUADRANT_CELLS};

/// Quadrant rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Enumeration order used by successor generation
    pub const ALL: [Rotation; 2] = [Rotation::CounterClockwise, Rotation::Clockwise];

    /// Parse a direction token: `r` is clockwise, `l` counter-clockwise.
    pub fn from_token(token: char) -> Option<Rotation> {
        match token.to_ascii_lowercase() {
            'r' => Some(Rotation::Clockwise),
            'l' => Some(Rotation::CounterClockwise),
            _ => None,
        }
    }

    #[inline]
    pub fn token(self) -> char {
        match self {
            Rotation::Clockwise => 'R',
            Rotation::CounterClockwise => 'L',
        }
    }

    #[inline]
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Source index for each destination cell: `new[i] = old[map[i]]`.
    #[inline]
    pub(crate) fn permutation(self) -> &'static [usize; QUADRANT_CELLS] {
        match self {
            Rotation::Clockwise => &CLOCKWISE,
            Rotation::CounterClockwise => &COUNTER_CLOCKWISE,
        }
    }
}

const CLOCKWISE: [usize; QUADRANT_CELLS] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
const COUNTER_CLOCKWISE: [usize; QUADRANT_CELLS] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// One full turn: a placement followed by a quadrant rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub quadrant: u8,
    pub cell: u8,
    pub rotate_quadrant: u8,
    pub rotation: Rotation,
}

impl Move {
    #[inline]
    pub fn new(quadrant: u8, cell: u8, rotate_quadrant: u8, rotation: Rotation) -> Self {
        debug_assert!((quadrant as usize) < QUADRANTS && (cell as usize) < QUADRANT_CELLS);
        debug_assert!((rotate_quadrant as usize) < QUADRANTS);
        Self {
            quadrant,
            cell,
            rotate_quadrant,
            rotation,
        }
    }
}

impl Board {
    /// Every legal move for `marble` paired with the board it produces.
    ///
    /// Order: empty cells quadrant-major, then rotation quadrant, then
    /// [`Rotation::ALL`]. Yields exactly `8 * empty_count()` entries, each an
    /// independent copy of the board.
    pub fn successors(&self, marble: Marble) -> Vec<(Move, Board)> {
        let mut children = Vec::with_capacity(self.empty_count() * QUADRANTS * 2);

        for quadrant in 0..QUADRANTS {
            for cell in 0..QUADRANT_CELLS {
                if self.get(quadrant, cell) != Marble::Empty {
                    continue;
                }
                let mut placed = *self;
                placed.place(quadrant, cell, marble);

                for rotate_quadrant in 0..QUADRANTS {
                    for rotation in Rotation::ALL {
                        let mut child = placed;
                        child.rotate(rotate_quadrant, rotation);
                        let mv = Move::new(
                            quadrant as u8,
                            cell as u8,
                            rotate_quadrant as u8,
                            rotation,
                        );
                        children.push((mv, child));
                    }
                }
            }
        }

        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_from_rows;

    #[test]
    fn test_rotation_tokens() {
        assert_eq!(Rotation::from_token('r'), Some(Rotation::Clockwise));
        assert_eq!(Rotation::from_token('R'), Some(Rotation::Clockwise));
        assert_eq!(Rotation::from_token('l'), Some(Rotation::CounterClockwise));
        assert_eq!(Rotation::from_token('L'), Some(Rotation::CounterClockwise));
        assert_eq!(Rotation::from_token('x'), None);
        assert_eq!(Rotation::from_token(' '), None);
    }

    #[test]
    fn test_permutations_are_inverse() {
        for i in 0..QUADRANT_CELLS {
            assert_eq!(CLOCKWISE[COUNTER_CLOCKWISE[i]], i);
            assert_eq!(COUNTER_CLOCKWISE[CLOCKWISE[i]], i);
        }
        assert_eq!(CLOCKWISE[4], 4);
        assert_eq!(COUNTER_CLOCKWISE[4], 4);
    }

    #[test]
    fn test_successor_count_empty_board() {
        let board = Board::new();
        assert_eq!(board.successors(Marble::Black).len(), 36 * 8);
    }

    #[test]
    fn test_successor_count_partial_board() {
        let board = board_from_rows([
            "BW....",
            "......",
            "..B...",
            "...W..",
            "......",
            ".....B",
        ]);
        assert_eq!(board.empty_count(), 31);
        assert_eq!(board.successors(Marble::White).len(), 31 * 8);
    }

    #[test]
    fn test_successor_count_full_board() {
        let board = board_from_rows([
            "BBWWBB",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
        ]);
        assert!(board.successors(Marble::Black).is_empty());
    }

    #[test]
    fn test_successors_are_placement_then_rotation() {
        let board = board_from_rows([
            "B.....",
            ".W....",
            "......",
            "......",
            "....B.",
            "......",
        ]);

        for (mv, child) in board.successors(Marble::White) {
            assert_eq!(child.marble_count(), board.marble_count() + 1);

            let mut expected = board;
            expected.place(mv.quadrant as usize, mv.cell as usize, Marble::White);
            expected.rotate(mv.rotate_quadrant as usize, mv.rotation);
            assert_eq!(child, expected);

            // Undoing the rotation exposes the placed marble
            let mut undone = child;
            undone.rotate(mv.rotate_quadrant as usize, mv.rotation.inverse());
            assert_eq!(undone.get(mv.quadrant as usize, mv.cell as usize), Marble::White);
        }
    }

    #[test]
    fn test_successor_order() {
        let board = Board::new();
        let children = board.successors(Marble::Black);

        assert_eq!(children[0].0, Move::new(0, 0, 0, Rotation::CounterClockwise));
        assert_eq!(children[1].0, Move::new(0, 0, 0, Rotation::Clockwise));
        assert_eq!(children[2].0, Move::new(0, 0, 1, Rotation::CounterClockwise));
        assert_eq!(children[8].0, Move::new(0, 1, 0, Rotation::CounterClockwise));
        assert_eq!(children.last().map(|c| c.0), Some(Move::new(3, 8, 3, Rotation::Clockwise)));
    }

    #[test]
    fn test_successors_skip_occupied_cells() {
        let mut board = Board::new();
        board.place(0, 0, Marble::Black);
        let children = board.successors(Marble::White);
        assert!(children.iter().all(|(mv, _)| !(mv.quadrant == 0 && mv.cell == 0)));
        assert_eq!(children[0].0, Move::new(0, 1, 0, Rotation::CounterClockwise));
    }

    #[test]
    fn test_successors_do_not_alias_parent() {
        let board = Board::new();
        let mut children = board.successors(Marble::Black);
        children[0].1.place(3, 8, Marble::White);

        assert_eq!(board.get(3, 8), Marble::Empty);
        assert_eq!(children[1].1.get(3, 8), Marble::Empty);
        assert!(board.is_board_empty());
    }
}
