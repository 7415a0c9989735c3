//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Pentago AI.
//! Every node is an owned board snapshot produced by
//! [`Board::successors`]; the live game board is never touched.
//!
//! Leaves are scored from the maximizing color's point of view:
//! - `WIN_SCORE` when the maximizing color has won
//! - `LOSS_SCORE` when the minimizing color has won
//! - `0` for a draw
//! - the pair-count heuristic otherwise
//!
//! # Example
//!
//! ```
//! use pentago::board::{Board, Marble};
//! use pentago::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(0, 4, Marble::Black);
//!
//! let mut searcher = Searcher::new(Marble::White);
//! let result = searcher.search(&board, 1);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use crate::board::{Board, Marble, Move};
use crate::eval::score;
use crate::rules::Outcome;

/// Score of a position won by the maximizing color
pub const WIN_SCORE: i32 = 500;
/// Score of a position won by the minimizing color
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
    /// Nodes evaluated as leaves (depth exhausted or terminal)
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Move leading to the best-valued child; `None` when the root was not expanded
    pub best_move: Option<Move>,
    /// Minimax value of the root
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher for one side.
pub struct Searcher {
    max_color: Marble,
    min_color: Marble,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that maximizes for `color`.
    pub fn new(color: Marble) -> Self {
        debug_assert!(color != Marble::Empty);
        Self {
            max_color: color,
            min_color: color.opponent(),
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn color(&self) -> Marble {
        self.max_color
    }

    /// Search `board` to `depth` plies with the maximizing color to move.
    ///
    /// The root is a maximizing node searched with the full window. Ties
    /// between equally valued moves keep the first one enumerated.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 1;
        self.stats = SearchStats::default();

        let mut best_move = None;
        let best_score = match self.leaf_value(board, depth) {
            Some(value) => value,
            None => {
                let mut alpha = i32::MIN;
                let beta = i32::MAX;
                let mut best = i32::MIN;

                for (mv, child) in board.successors(self.max_color) {
                    let value = self.alpha_beta(&child, depth - 1, alpha, beta, false);
                    if best_move.is_none() || value > best {
                        best = value;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                best
            }
        };

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Value of `board` searched to `depth` plies.
    pub fn alpha_beta(&mut self, board: &Board, depth: u8, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(value) = self.leaf_value(board, depth) {
            return value;
        }

        if maximizing {
            let mut best = i32::MIN;
            for (_, child) in board.successors(self.max_color) {
                best = best.max(self.alpha_beta(&child, depth - 1, alpha, beta, false));
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    return best;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for (_, child) in board.successors(self.min_color) {
                best = best.min(self.alpha_beta(&child, depth - 1, alpha, beta, true));
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    return best;
                }
            }
            best
        }
    }

    /// Static value when the node must not be expanded.
    ///
    /// A full board always evaluates as a draw or a win, so a node with no
    /// legal move never reaches successor generation.
    fn leaf_value(&mut self, board: &Board, depth: u8) -> Option<i32> {
        let outcome = board.outcome();
        if depth > 0 && !outcome.is_terminal() {
            debug_assert!(!board.is_full());
            return None;
        }

        self.stats.leaves += 1;
        Some(match outcome {
            Outcome::Win(color) if color == self.max_color => WIN_SCORE,
            Outcome::Win(_) => LOSS_SCORE,
            Outcome::Draw => 0,
            Outcome::InProgress => score(board, self.max_color),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{board_from_rows, Rotation};

    /// Plain minimax without pruning, for comparison.
    fn minimax(board: &Board, depth: u8, maximizing: bool, max_color: Marble) -> i32 {
        match board.outcome() {
            Outcome::Win(c) if c == max_color => return WIN_SCORE,
            Outcome::Win(_) => return LOSS_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress if depth == 0 => return score(board, max_color),
            Outcome::InProgress => {}
        }

        let to_move = if maximizing { max_color } else { max_color.opponent() };
        let values = board
            .successors(to_move)
            .into_iter()
            .map(|(_, child)| minimax(&child, depth - 1, !maximizing, max_color));
        if maximizing {
            values.max().unwrap_or(i32::MIN)
        } else {
            values.min().unwrap_or(i32::MAX)
        }
    }

    /// Drawn full board; clearing cells from it gives quiet test positions
    fn drawn_board() -> Board {
        board_from_rows([
            "BBWWBB",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
            "BBWWBB",
            "WWBBWW",
        ])
    }

    fn cleared(cells: &[(usize, usize)]) -> Board {
        let mut board = drawn_board();
        for &(q, c) in cells {
            board.place(q, c, Marble::Empty);
        }
        board
    }

    #[test]
    fn test_depth_zero_returns_heuristic() {
        let board = board_from_rows([
            "BB....",
            ".B....",
            "......",
            "...WW.",
            "......",
            "......",
        ]);
        let mut searcher = Searcher::new(Marble::Black);
        let result = searcher.search(&board, 0);
        assert_eq!(result.score, score(&board, Marble::Black));
        assert_eq!(result.score, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);

        let mut searcher = Searcher::new(Marble::White);
        assert_eq!(searcher.alpha_beta(&board, 0, i32::MIN, i32::MAX, true), 1);
    }

    #[test]
    fn test_terminal_root_values() {
        let won = board_from_rows([
            "BBBBB.",
            "......",
            "......",
            "......",
            "......",
            "......",
        ]);
        assert_eq!(Searcher::new(Marble::Black).search(&won, 3).score, WIN_SCORE);
        assert_eq!(Searcher::new(Marble::White).search(&won, 3).score, LOSS_SCORE);

        let full = drawn_board();
        let result = Searcher::new(Marble::Black).search(&full, 3);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_finds_immediate_win() {
        let board = board_from_rows([
            "BBBB..",
            "W.W...",
            ".W....",
            "......",
            "...W..",
            "......",
        ]);
        let mut searcher = Searcher::new(Marble::Black);
        let result = searcher.search(&board, 1);
        assert_eq!(result.score, WIN_SCORE);

        let mv = result.best_move.unwrap();
        let mut after = board;
        after.apply_move(mv, Marble::Black).unwrap();
        assert_eq!(after.outcome(), Outcome::Win(Marble::Black));
    }

    #[test]
    fn test_root_move_matches_value() {
        let board = cleared(&[(0, 0), (1, 4), (2, 8), (3, 3)]);
        for depth in 1..=2 {
            let mut searcher = Searcher::new(Marble::White);
            let result = searcher.search(&board, depth);
            let mv = result.best_move.unwrap();

            let mut child = board;
            child.apply_move(mv, Marble::White).unwrap();
            assert_eq!(minimax(&child, depth - 1, false, Marble::White), result.score);
        }
    }

    #[test]
    fn test_ties_pick_first_enumerated() {
        // Every depth-1 child of the empty board scores 0 for the mover
        let mut searcher = Searcher::new(Marble::Black);
        let result = searcher.search(&Board::new(), 1);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(Move::new(0, 0, 0, Rotation::CounterClockwise)));
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let positions = [
            cleared(&[(0, 0), (1, 4), (2, 8), (3, 3)]),
            cleared(&[(0, 1), (0, 2), (1, 0), (3, 8), (2, 4)]),
            cleared(&[(0, 4), (1, 4), (2, 4), (3, 4)]),
            cleared(&[(1, 0), (1, 1), (1, 2), (1, 3)]),
        ];

        for board in &positions {
            assert_eq!(board.outcome(), Outcome::InProgress);
            for color in [Marble::Black, Marble::White] {
                for depth in 1..=3 {
                    let mut searcher = Searcher::new(color);
                    let pruned = searcher.search(board, depth).score;
                    let full = minimax(board, depth, true, color);
                    assert_eq!(pruned, full, "depth {} color {:?}\n{}", depth, color, board);
                }
            }
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let board = cleared(&[(0, 1), (0, 2), (1, 0), (3, 8), (2, 4)]);
        let mut searcher = Searcher::new(Marble::Black);
        let result = searcher.search(&board, 3);

        // Unpruned tree: 1 + 40 + 40*32 + 40*32*24 nodes at most
        assert!(result.nodes < 1 + 40 + 40 * 32 + 40 * 32 * 24);
        assert!(result.stats.cutoffs > 0);
    }

    #[test]
    fn test_interior_window_respected() {
        let board = cleared(&[(0, 0), (1, 4), (2, 8), (3, 3)]);
        let mut searcher = Searcher::new(Marble::Black);
        let full = searcher.alpha_beta(&board, 2, i32::MIN, i32::MAX, true);
        assert_eq!(full, minimax(&board, 2, true, Marble::Black));

        // Windows that exclude the true value fail toward the violated bound
        let mut searcher = Searcher::new(Marble::Black);
        assert!(searcher.alpha_beta(&board, 2, full + 10, full + 20, true) <= full + 10);
        let mut searcher = Searcher::new(Marble::Black);
        assert!(searcher.alpha_beta(&board, 2, full - 20, full - 10, true) >= full - 10);
    }
}
