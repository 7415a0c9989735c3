//! Error type shared by the board model and the move notation parser

use thiserror::Error;

/// Errors reported back to the turn loop so it can re-prompt.
///
/// Fields hold 0-based indices; messages show them 1-based, the way moves
/// are typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("quadrant {} is out of range (expected 1-4)", shown(.0))]
    QuadrantOutOfRange(usize),

    #[error("cell {} is out of range (expected 1-9)", shown(.0))]
    CellOutOfRange(usize),

    #[error("invalid rotation direction {0:?} (expected 'R' or 'L')")]
    InvalidRotation(char),

    #[error("cell {}/{} is already occupied", shown(.quadrant), shown(.cell))]
    Occupied { quadrant: usize, cell: usize },

    #[error("malformed move: {0}")]
    Malformed(String),
}

fn shown(index: &usize) -> usize {
    index.saturating_add(1)
}

impl GameError {
    /// True for errors that describe an illegal move rather than bad input text.
    pub fn is_illegal(&self) -> bool {
        !matches!(self, GameError::Malformed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_one_based() {
        assert_eq!(
            GameError::QuadrantOutOfRange(4).to_string(),
            "quadrant 5 is out of range (expected 1-4)"
        );
        assert_eq!(GameError::CellOutOfRange(9).to_string(), "cell 10 is out of range (expected 1-9)");
        assert_eq!(
            GameError::Occupied { quadrant: 0, cell: 4 }.to_string(),
            "cell 1/5 is already occupied"
        );
        assert_eq!(GameError::QuadrantOutOfRange(usize::MAX).to_string(), format!("quadrant {} is out of range (expected 1-4)", usize::MAX));
    }

    #[test]
    fn test_is_illegal() {
        assert!(GameError::Occupied { quadrant: 1, cell: 1 }.is_illegal());
        assert!(GameError::InvalidRotation('x').is_illegal());
        assert!(!GameError::Malformed("x".to_string()).is_illegal());
    }
}
