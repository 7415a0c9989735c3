//! Search module for the Pentago AI
//!
//! Contains depth-limited minimax with alpha-beta pruning over board
//! snapshots.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, LOSS_SCORE, WIN_SCORE};
