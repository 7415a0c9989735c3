//! Pentago AI Engine
//!
//! An engine for Pentago, the two-player game played on a 6x6 board split
//! into four 3x3 quadrants:
//! - Each turn places one marble into an empty cell, then rotates any one
//!   quadrant by 90 degrees in either direction
//! - Five in a row (horizontal, vertical, or along a main diagonal) wins
//! - Lines for both players at once, or a full board, is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, moves, rotations and move notation
//! - [`rules`]: Terminal detection (wins and draws)
//! - [`eval`]: Pair-count heuristic
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI player integrating search, configuration and logging
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use pentago::{AIEngine, Board, Marble, Outcome};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_depth(1);
//!
//! // Human plays Black: centre of the top-left quadrant, then turns the
//! // top-right quadrant clockwise
//! board.apply_move("1/5 2R".parse().unwrap(), Marble::Black).unwrap();
//!
//! // AI responds as White
//! if let Some(mv) = engine.choose_move(&board, Marble::White) {
//!     board.apply_move(mv, Marble::White).unwrap();
//!     println!("AI plays {}", mv);
//! }
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! println!("{}", board);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Marble, Move, Rotation, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult};
pub use error::GameError;
pub use rules::Outcome;
