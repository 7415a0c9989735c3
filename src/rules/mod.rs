//! Game rules for Pentago
//!
//! This module implements terminal detection: five in a row on the
//! composite 6x6 board, or a full board.

pub mod win;

// Re-exports for convenient access
pub use win::{evaluate_outcome, find_winning_line, has_five_in_row, Outcome, WIN_LINES};
