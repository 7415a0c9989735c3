//! Main AI Engine for the automated player
//!
//! Wraps the alpha-beta [`Searcher`] with configuration, timing and logging.
//! The caller owns the live board: the engine only reads it and returns the
//! move to apply.
//!
//! # Example
//!
//! ```
//! use pentago::{AIEngine, Board, Marble, Move};
//!
//! let mut engine = AIEngine::with_depth(1);
//! let mut board = Board::new();
//! board.apply_move("1/5 2R".parse::<Move>().unwrap(), Marble::Black).unwrap();
//!
//! let result = engine.choose_move_with_stats(&board, Marble::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Marble, Move};
use crate::search::{SearchResult, Searcher};

/// Search depth used by the automated player
pub const DEFAULT_DEPTH: u8 = 3;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Look-ahead in plies
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value of the position from the mover's side
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Automated Pentago player.
///
/// # Example
///
/// ```
/// use pentago::{AIEngine, Board, Marble};
///
/// let mut engine = AIEngine::with_depth(1);
/// let mut board = Board::new();
/// if let Some(mv) = engine.choose_move(&board, Marble::Black) {
///     board.apply_move(mv, Marble::Black).unwrap();
/// }
/// assert_eq!(board.marble_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings (depth 3).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::with_config(EngineConfig { depth })
    }

    /// Choose the move for `color`. `None` when the board is already decided.
    pub fn choose_move(&mut self, board: &Board, color: Marble) -> Option<Move> {
        self.choose_move_with_stats(board, color).best_move
    }

    /// Choose the move for `color` and report search statistics.
    pub fn choose_move_with_stats(&mut self, board: &Board, color: Marble) -> MoveResult {
        let start = Instant::now();
        // A depth-0 search never expands the root, so always look one ply ahead
        let depth = self.config.depth.max(1);

        let mut searcher = Searcher::new(color);
        let result = searcher.search(board, depth);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            "search depth={} score={} nodes={} cutoffs={} leaves={} time={}ms",
            result.depth, result.score, result.nodes, result.stats.cutoffs, result.stats.leaves, time_ms
        );
        match result.best_move {
            Some(mv) => info!("{} plays {} (score {})", color.name(), mv, result.score),
            None => info!("{} has no move: game already decided", color.name()),
        }

        MoveResult::from_search(result, time_ms)
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Outcome;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), 3);
        assert_eq!(engine.config(), EngineConfig::default());
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::with_depth(2);
        assert_eq!(engine.depth(), 2);
        engine.set_depth(4);
        assert_eq!(engine.depth(), 4);
    }

    #[test]
    fn test_engine_returns_legal_move() {
        let mut board = Board::new();
        board.place(0, 4, Marble::Black);
        board.place(3, 4, Marble::White);

        let mut engine = AIEngine::with_depth(2);
        let mv = engine.choose_move(&board, Marble::Black).unwrap();
        assert!(board.is_legal(
            mv.quadrant as usize,
            mv.cell as usize,
            mv.rotate_quadrant as usize,
            mv.rotation.token()
        ));
        assert!(board.apply_move(mv, Marble::Black).is_ok());
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for cell in [0, 3, 6] {
            board.place(0, cell, Marble::White); // column 0, rows 0-2
        }
        board.place(2, 0, Marble::White); // (3,0)
        board.place(1, 4, Marble::Black);
        board.place(3, 4, Marble::Black);
        board.place(1, 0, Marble::Black);

        let mut engine = AIEngine::with_depth(1);
        let result = engine.choose_move_with_stats(&board, Marble::White);
        assert_eq!(result.score, crate::search::WIN_SCORE);

        let mut after = board;
        after.apply_move(result.best_move.unwrap(), Marble::White).unwrap();
        assert_eq!(after.outcome(), Outcome::Win(Marble::White));
    }

    #[test]
    fn test_engine_depth_zero_still_moves() {
        let mut engine = AIEngine::with_depth(0);
        let result = engine.choose_move_with_stats(&Board::new(), Marble::Black);
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_engine_decided_board() {
        let mut board = Board::new();
        for cell in [0, 1, 2] {
            board.place(0, cell, Marble::Black);
        }
        board.place(1, 0, Marble::Black);
        board.place(1, 1, Marble::Black);

        let mut engine = AIEngine::with_depth(2);
        let result = engine.choose_move_with_stats(&board, Marble::White);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, crate::search::LOSS_SCORE);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut board = Board::new();
        let mut engine = AIEngine::with_depth(1);
        let mut color = Marble::Black;

        for _ in 0..6 {
            let mv = engine.choose_move(&board, color).unwrap();
            board.apply_move(mv, color).unwrap();
            color = color.opponent();
        }
        assert_eq!(board.marble_count(), 6);
    }
}
