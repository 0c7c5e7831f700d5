//! Fragmenting falling-block engine (workspace facade crate).
//!
//! This package exposes the `frag_tetris::{core,engine,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use frag_tetris_core as core;
pub use frag_tetris_engine as engine;
pub use frag_tetris_types as types;
