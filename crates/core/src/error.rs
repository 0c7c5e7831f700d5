//! Errors raised while setting up a board.
//!
//! Gameplay itself never errors: illegal moves and game over are reported
//! through booleans and [`GameStatus`](crate::types::GameStatus).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Rows or columns is zero
    InvalidDimensions { rows: usize, columns: usize },
    /// Dimensions do not fit the signed coordinate space
    DimensionsTooLarge { rows: usize, columns: usize },
}

impl BoardError {
    pub fn code(self) -> &'static str {
        match self {
            BoardError::InvalidDimensions { .. } | BoardError::DimensionsTooLarge { .. } => {
                "invalid_dimensions"
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BoardError::InvalidDimensions { .. } => "rows and columns must both be positive",
            BoardError::DimensionsTooLarge { .. } => "rows and columns must fit in an i32",
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, columns }
            | BoardError::DimensionsTooLarge { rows, columns } => {
                write!(f, "{} (got {}x{})", self.message(), rows, columns)
            }
        }
    }
}

impl std::error::Error for BoardError {}
