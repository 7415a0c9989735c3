//! Win condition checking
//!
//! A player wins with five marbles of one color on a winning line. The
//! winning lines are the two 5-cell windows of every row and column and of
//! the two main diagonals. A board holding lines for both colors is a draw,
//! as is a full board with no line.

use crate::board::{Board, Marble, BOARD_SIZE};

/// Number of winning lines: 6 rows + 6 columns + 2 diagonals, two windows each
pub const WIN_LINE_COUNT: usize = (BOARD_SIZE * 2 + 2) * 2;

/// Every winning line as composite (row, col) coordinates
pub const WIN_LINES: [[(u8, u8); 5]; WIN_LINE_COUNT] = build_win_lines();

const fn build_win_lines() -> [[(u8, u8); 5]; WIN_LINE_COUNT] {
    let mut lines = [[(0u8, 0u8); 5]; WIN_LINE_COUNT];
    let mut n = 0;

    // Rows and columns
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut start = 0;
        while start < 2 {
            let mut k = 0;
            while k < 5 {
                lines[n][k] = (i as u8, (start + k) as u8);
                lines[n + 1][k] = ((start + k) as u8, i as u8);
                k += 1;
            }
            n += 2;
            start += 1;
        }
        i += 1;
    }

    // Main diagonal and anti-diagonal
    let mut start = 0;
    while start < 2 {
        let mut k = 0;
        while k < 5 {
            let d = start + k;
            lines[n][k] = (d as u8, d as u8);
            lines[n + 1][k] = (d as u8, (BOARD_SIZE - 1 - d) as u8);
            k += 1;
        }
        n += 2;
        start += 1;
    }

    lines
}

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Marble),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    #[inline]
    pub fn winner(self) -> Option<Marble> {
        match self {
            Outcome::Win(marble) => Some(marble),
            _ => None,
        }
    }
}

/// Color holding the given line, if all five cells match and are non-empty
#[inline]
fn line_owner(board: &Board, line: &[(u8, u8); 5]) -> Option<Marble> {
    let (r0, c0) = line[0];
    let first = board.at(r0 as usize, c0 as usize);
    if first == Marble::Empty {
        return None;
    }
    line[1..]
        .iter()
        .all(|&(r, c)| board.at(r as usize, c as usize) == first)
        .then_some(first)
}

/// Check if `marble` holds any winning line
pub fn has_five_in_row(board: &Board, marble: Marble) -> bool {
    marble != Marble::Empty && WIN_LINES.iter().any(|line| line_owner(board, line) == Some(marble))
}

/// Evaluate the board without modifying anything.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    let mut black = false;
    let mut white = false;

    for line in &WIN_LINES {
        match line_owner(board, line) {
            Some(Marble::Black) => black = true,
            Some(Marble::White) => white = true,
            _ => {}
        }
        if black && white {
            return Outcome::Draw;
        }
    }

    match (black, white) {
        (true, false) => Outcome::Win(Marble::Black),
        (false, true) => Outcome::Win(Marble::White),
        _ if board.is_full() => Outcome::Draw,
        _ => Outcome::InProgress,
    }
}

/// First winning line on the board with its owner
pub fn find_winning_line(board: &Board) -> Option<(Marble, [(u8, u8); 5])> {
    WIN_LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|owner| (owner, *line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{board_from_rows, Rotation};

    #[test]
    fn test_line_count() {
        assert_eq!(WIN_LINES.len(), 28);
        for line in &WIN_LINES {
            for &(r, c) in line {
                assert!((r as usize) < BOARD_SIZE && (c as usize) < BOARD_SIZE);
            }
        }
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_five_in_row_horizontal_across_quadrants() {
        let board = board_from_rows([
            "......",
            ".BBBBB",
            "......",
            "......",
            "......",
            "......",
        ]);
        assert!(has_five_in_row(&board, Marble::Black));
        assert!(!has_five_in_row(&board, Marble::White));
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_from_rows([
            "....W.",
            "....W.",
            "....W.",
            "....W.",
            "....W.",
            "......",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::White));
    }

    #[test]
    fn test_five_in_row_main_diagonal() {
        let board = board_from_rows([
            "......",
            ".B....",
            "..B...",
            "...B..",
            "....B.",
            ".....B",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::Black));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let board = board_from_rows([
            ".....W",
            "....W.",
            "...W..",
            "..W...",
            ".W....",
            "......",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::White));
    }

    #[test]
    fn test_off_main_diagonal_is_not_a_line() {
        let board = board_from_rows([
            ".B....",
            "..B...",
            "...B..",
            "....B.",
            ".....B",
            "......",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_from_rows([
            "BBBB.B",
            "......",
            "......",
            "......",
            "......",
            "......",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_from_rows([
            "......",
            "......",
            "......",
            "WWWWWW",
            "......",
            "......",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::White));
    }

    #[test]
    fn test_both_colors_is_draw() {
        let board = board_from_rows([
            "BBBBB.",
            "......",
            "......",
            "......",
            "......",
            ".WWWWW",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_rows([
            "BBWWBB",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = board_from_rows([
            "BBBBBW",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::Black));
    }

    #[test]
    fn test_rotation_completes_line() {
        let mut board = board_from_rows([
            "BBB...",
            "...B..",
            "...B..",
            "......",
            "......",
            "......",
        ]);
        assert_eq!(evaluate_outcome(&board), Outcome::InProgress);

        // Clockwise turn of quadrant 1 swings its left column onto the top row
        board.rotate(1, Rotation::Clockwise);
        assert_eq!(board.at(0, 3), Marble::Black);
        assert_eq!(board.at(0, 4), Marble::Black);
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::Black));

        board.rotate(1, Rotation::CounterClockwise);
        assert_eq!(evaluate_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_find_winning_line() {
        let board = board_from_rows([
            "......",
            "......",
            "......",
            "......",
            "WWWWW.",
            "......",
        ]);
        let (owner, line) = find_winning_line(&board).unwrap();
        assert_eq!(owner, Marble::White);
        assert_eq!(line, [(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]);
    }

    #[test]
    fn test_outcome_is_pure() {
        let board = board_from_rows([
            "BBBBB.",
            "......",
            "......",
            "......",
            "......",
            "......",
        ]);
        let copy = board;
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::Black));
        assert_eq!(board, copy);
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
        assert_eq!(evaluate_outcome(&board), Outcome::Win(Marble::Black));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Win(Marble::White).winner(), Some(Marble::White));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
