//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the engine.
//! All types are plain data with no behaviour beyond arithmetic and parsing,
//! making them usable in any context (rules engine, session layer, snapshots).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs:
//!
//! - **row** grows downward (row 0 is the top of the playfield)
//! - **col** grows to the right (col 0 is the left wall)
//!
//! # Default Playfield
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 24 | Playfield height |
//! | `DEFAULT_COLUMNS` | 20 | Playfield width |
//!
//! # Examples
//!
//! ```
//! use frag_tetris_types::{Command, ShapeKind, Vector2D, DOWN};
//!
//! let pivot = Vector2D::new(3, 4);
//! assert_eq!(pivot + DOWN, Vector2D::new(4, 4));
//!
//! // Right of the pivot maps to above it
//! assert_eq!(Vector2D::new(0, 1).rotate90(), Vector2D::new(-1, 0));
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Default playfield height in rows
pub const DEFAULT_ROWS: usize = 24;

/// Default playfield width in columns
pub const DEFAULT_COLUMNS: usize = 20;

/// Identifier of a piece. Allocated monotonically and never reused.
pub type PieceId = u32;

/// Palette index painted into a cell
pub type Paint = u8;

/// Integer `(row, col)` point.
///
/// A pure value type: every operation returns a new vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vector2D {
    pub row: i32,
    pub col: i32,
}

/// One row downward
pub const DOWN: Vector2D = Vector2D { row: 1, col: 0 };

/// One column to the left
pub const LEFT: Vector2D = Vector2D { row: 0, col: -1 };

/// One column to the right
pub const RIGHT: Vector2D = Vector2D { row: 0, col: 1 };

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Component-wise sum
    pub const fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.row + other.row, self.col + other.col)
    }

    /// Component-wise difference
    pub const fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.row - other.row, self.col - other.col)
    }

    /// Quarter turn `(row, col) -> (-col, row)`.
    ///
    /// Only meaningful for an offset relative to a pivot, never for an
    /// absolute board coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use frag_tetris_types::Vector2D;
    ///
    /// let v = Vector2D::new(1, 2);
    /// assert_eq!(v.rotate90(), Vector2D::new(-2, 1));
    /// assert_eq!(v.rotate90().rotate90().rotate90().rotate90(), v);
    /// ```
    pub const fn rotate90(self) -> Vector2D {
        Vector2D::new(-self.col, self.row)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::sub(self, rhs)
    }
}

/// Whether a cell or a piece block holds material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Empty,
    Occupied,
}

impl Occupancy {
    pub fn is_empty(self) -> bool {
        self == Occupancy::Empty
    }

    pub fn is_occupied(self) -> bool {
        self == Occupancy::Occupied
    }
}

/// The seven tetromino shapes
///
/// Each shape has a fixed palette index, in catalog order:
/// - **I**: 0, straight bar
/// - **O**: 1, 2x2 square (rotation invariant)
/// - **T**: 2
/// - **S**: 3
/// - **Z**: 4 (mirror of S)
/// - **J**: 5
/// - **L**: 6 (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All shapes in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use frag_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    /// Palette index painted into the grid for this shape
    pub fn paint(&self) -> Paint {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    /// Only the square is unchanged by a quarter turn
    pub fn is_rotation_invariant(&self) -> bool {
        matches!(self, ShapeKind::O)
    }
}

/// Whether the game is still accepting play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    /// A spawned piece collided with existing material
    Ended,
}

/// Commands a caller dispatches to a session
///
/// These replace any comparison of UI widgets: the input layer maps its
/// buttons or keys to a `Command` and hands it over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move the falling piece one column left
    MoveLeft,
    /// Move the falling piece one column right
    MoveRight,
    /// Move the falling piece one row down
    MoveDown,
    /// Quarter-turn the falling piece around its pivot
    Rotate,
    /// One gravity step: fall, or commit and spawn the next piece
    Tick,
    TogglePause,
    ToggleDifficulty,
    /// Start over on a fresh board
    Restart,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use frag_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveDown"), Some(Command::MoveDown));
    /// assert_eq!(Command::from_str("TICK"), Some(Command::Tick));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            "togglepause" => Some(Command::TogglePause),
            "toggledifficulty" => Some(Command::ToggleDifficulty),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::Tick => "tick",
            Command::TogglePause => "togglePause",
            Command::ToggleDifficulty => "toggleDifficulty",
            Command::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_arithmetic_is_component_wise() {
        let a = Vector2D::new(2, -3);
        let b = Vector2D::new(-1, 5);
        assert_eq!(a + b, Vector2D::new(1, 2));
        assert_eq!(a - b, Vector2D::new(3, -8));
        assert_eq!(Vector2D::add(a, b), a + b);
        assert_eq!(Vector2D::sub(a, b), a - b);
    }

    #[test]
    fn rotate90_fixes_the_origin() {
        assert_eq!(Vector2D::ZERO.rotate90(), Vector2D::ZERO);
    }

    #[test]
    fn rotate90_maps_down_to_right() {
        // (1, 0) -> (0, 1)
        assert_eq!(DOWN.rotate90(), RIGHT);
        assert_eq!(RIGHT.rotate90(), Vector2D::new(-1, 0));
    }

    #[test]
    fn shape_round_trips_through_str() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn shape_paints_are_distinct() {
        let mut paints: Vec<Paint> = ShapeKind::ALL.iter().map(|k| k.paint()).collect();
        paints.dedup();
        assert_eq!(paints, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn only_square_is_rotation_invariant() {
        let invariant: Vec<ShapeKind> = ShapeKind::ALL
            .into_iter()
            .filter(|k| k.is_rotation_invariant())
            .collect();
        assert_eq!(invariant, vec![ShapeKind::O]);
    }

    #[test]
    fn command_round_trips_through_str() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::MoveDown,
            Command::Rotate,
            Command::Tick,
            Command::TogglePause,
            Command::ToggleDifficulty,
            Command::Restart,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }
}
