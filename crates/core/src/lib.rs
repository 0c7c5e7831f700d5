//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules engine of a falling-block puzzle whose line
//! clears fragment pieces instead of shifting rows. It has **zero
//! dependencies** on UI, timing, or I/O:
//!
//! - **Deterministic**: the random source is injected, so a seed replays a game
//! - **Synchronous**: every operation returns a definite result immediately
//! - **Single owner**: the [`Board`] is the only mutator of cells and pieces
//!
//! # Module Structure
//!
//! - [`cell`]: one playfield slot (paint, owner, occupancy)
//! - [`shape`]: the seven tetromino offset tables and uniform shape selection
//! - [`piece`]: a live piece instance whose blocks can be emptied one by one
//! - [`board`]: spawn, movement, rotation, commit, line clear, settlement
//! - [`rng`]: injectable random source and a small LCG default
//! - [`snapshot`]: serializable read-only view for callers
//!
//! # Game Rules
//!
//! - The falling piece is tracked as floating coordinates and only written to
//!   the grid when committed, so collision never has to ignore its own cells.
//! - A full row is cleared one at a time, bottom first. Every piece crossing it
//!   is split into an upper and a lower remnant with fresh ids.
//! - After each cleared row, every piece falls on its own until it rests.
//!
//! # Example
//!
//! ```
//! use frag_tetris_core::{Board, BoardConfig, SimpleRng};
//! use frag_tetris_types::ShapeKind;
//!
//! let mut board = Board::new(BoardConfig::new(24, 20), ShapeKind::T, SimpleRng::new(7)).unwrap();
//! assert!(board.move_left());
//! assert!(board.move_down());
//!
//! // Let gravity run until the first piece locks
//! while board.tick() {}
//! assert_eq!(board.occupied_count(), 4);
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use frag_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cell::{Cell, Stamp};
pub use config::BoardConfig;
pub use error::BoardError;
pub use piece::{Block, Piece};
pub use rng::{random_shape, RandomSource, SimpleRng};
pub use shape::{offsets, spawn_origin};
pub use snapshot::{BoardSnapshot, FallingSnapshot};
