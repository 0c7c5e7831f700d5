//! Session layer - drives a [`Board`](frag_tetris_core::Board) on behalf of a caller
//!
//! The core board exposes synchronous rules and nothing else. This crate adds
//! what a driver needs around it:
//!
//! - [`config`]: TOML-backed settings (dimensions, seed, run length)
//! - [`session`]: explicit [`Command`](frag_tetris_types::Command) dispatch,
//!   pause gating of gravity, and restarting on a fresh board
//!
//! A session is single-threaded. Callers that tick from a background thread
//! must serialize every call themselves (one owner, or a command queue).

pub mod config;
pub mod session;

pub use frag_tetris_core as core;
pub use frag_tetris_types as types;

pub use config::{ConfigError, EngineConfig};
pub use session::Session;
