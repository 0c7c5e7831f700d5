//! Headless autoplay runner (default binary).
//!
//! Drives a session with a pseudo-random command policy until game over or
//! the configured tick budget, then prints the final board snapshot as JSON.
//! There is no rendering and no terminal input.
//!
//! Usage: `frag-tetris [config.toml]`. Without an argument the path comes from
//! `FRAG_TETRIS_CONFIG` or defaults to `frag_tetris.toml`; a missing file means
//! default settings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use frag_tetris::core::{RandomSource, SimpleRng};
use frag_tetris::engine::config::config_file_path;
use frag_tetris::engine::{EngineConfig, Session};
use frag_tetris::types::Command;

/// Player moves attempted between two gravity steps
const MOVES_PER_TICK: u32 = 2;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config_file_path);
    let config = EngineConfig::load_or_default(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    info!(
        "starting {}x{} game, seed {}, at most {} ticks",
        config.rows, config.columns, config.seed, config.max_ticks
    );

    let mut session = Session::new(&config).context("building session")?;
    let mut policy = SimpleRng::new(config.seed.wrapping_add(1));
    run(&mut session, &mut policy, config.max_ticks);

    let snapshot = session.snapshot();
    info!(
        "finished after {} ticks: score {}, {} pieces locked",
        session.ticks(),
        snapshot.score,
        session.locked_pieces()
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run(session: &mut Session, policy: &mut SimpleRng, max_ticks: u64) {
    while !session.is_over() && session.ticks() < max_ticks {
        for _ in 0..MOVES_PER_TICK {
            let command = pick_move(policy);
            let applied = session.apply(command);
            debug!("{} -> {}", command.as_str(), applied);
        }
        session.apply(Command::Tick);
    }
}

fn pick_move(policy: &mut SimpleRng) -> Command {
    match policy.next_range(4) {
        0 => Command::MoveLeft,
        1 => Command::MoveRight,
        2 => Command::Rotate,
        _ => Command::MoveDown,
    }
}
