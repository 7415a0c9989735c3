//! Evaluation module for Pentago positions
//!
//! The heuristic counts adjacent same-colored pairs for one color.

pub mod heuristic;

pub use heuristic::{score, SCORED_PAIRS};
