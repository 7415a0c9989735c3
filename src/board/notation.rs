//! Text notation for moves
//!
//! A move is written as two tokens with 1-based numbers: `Q/C` for the
//! placement (quadrant and cell, any one-character separator) and `QD` for
//! the rotation (quadrant and `R`/`L`). Example: `1/5 2R`.

use std::fmt;
use std::str::FromStr;

use super::{Move, Rotation, QUADRANTS, QUADRANT_CELLS};
use crate::error::GameError;

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(place), Some(rotate), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(GameError::Malformed(format!(
                "expected two tokens like \"1/5 2R\", got {:?}",
                s.trim()
            )));
        };

        let place: Vec<char> = place.chars().collect();
        let rotate: Vec<char> = rotate.chars().collect();
        if place.len() != 3 {
            return Err(GameError::Malformed(format!(
                "placement must look like \"Q/C\", got {:?}",
                place.iter().collect::<String>()
            )));
        }
        if rotate.len() != 2 {
            return Err(GameError::Malformed(format!(
                "rotation must look like \"QR\" or \"QL\", got {:?}",
                rotate.iter().collect::<String>()
            )));
        }

        let quadrant = one_based(place[0], "quadrant", QUADRANTS, GameError::QuadrantOutOfRange)?;
        let cell = one_based(place[2], "cell", QUADRANT_CELLS, GameError::CellOutOfRange)?;
        let rotate_quadrant = one_based(rotate[0], "quadrant", QUADRANTS, GameError::QuadrantOutOfRange)?;
        let rotation = Rotation::from_token(rotate[1]).ok_or(GameError::InvalidRotation(rotate[1]))?;

        Ok(Move::new(quadrant as u8, cell as u8, rotate_quadrant as u8, rotation))
    }
}

/// Decode a 1-based digit into a 0-based index below `limit`.
/// Anything that is not a digit from 1 to 9 is malformed text.
fn one_based(
    ch: char,
    what: &str,
    limit: usize,
    out_of_range: fn(usize) -> GameError,
) -> Result<usize, GameError> {
    match ch.to_digit(10) {
        Some(digit) if digit >= 1 => {
            let index = digit as usize - 1;
            if index < limit {
                Ok(index)
            } else {
                Err(out_of_range(index))
            }
        }
        _ => Err(GameError::Malformed(format!(
            "{} must be a number from 1 to {}, got {:?}",
            what, limit, ch
        ))),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {}{}",
            self.quadrant + 1,
            self.cell + 1,
            self.rotate_quadrant + 1,
            self.rotation.token()
        )
    }
}
