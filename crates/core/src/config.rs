//! Board configuration - dimensions and spawn position

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::shape::spawn_origin;
use crate::types::{Vector2D, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Caller-owned settings consumed once when a board is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    /// Pivot position of every spawned piece. Centered on the top row when unset.
    #[serde(default)]
    pub spawn: Option<Vector2D>,
}

impl BoardConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            spawn: None,
        }
    }

    pub fn with_spawn(mut self, spawn: Vector2D) -> Self {
        self.spawn = Some(spawn);
        self
    }

    /// Spawn pivot after applying the default
    pub fn spawn_origin(&self) -> Vector2D {
        self.spawn.unwrap_or_else(|| spawn_origin(self.columns))
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(BoardError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if i32::try_from(self.rows).is_err() || i32::try_from(self.columns).is_err() {
            return Err(BoardError::DimensionsTooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_classic_playfield() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.columns), (24, 20));
        assert_eq!(config.spawn_origin(), Vector2D::new(0, 9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            BoardConfig::new(0, 10).validate(),
            Err(BoardError::InvalidDimensions { rows: 0, columns: 10 })
        );
        assert!(BoardConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn explicit_spawn_overrides_default() {
        let config = BoardConfig::new(10, 10).with_spawn(Vector2D::new(2, 3));
        assert_eq!(config.spawn_origin(), Vector2D::new(2, 3));
    }
}
