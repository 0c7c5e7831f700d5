//! Session - command dispatch around a single board
//!
//! A session is what a tick scheduler and an input layer talk to. Gravity is
//! suspended while paused or after game over; movement commands go straight
//! to the board, which refuses them itself once the game has ended.

use log::{debug, info};

use crate::config::{ConfigError, EngineConfig};
use crate::core::{Board, BoardSnapshot, RandomSource, SimpleRng};
use crate::types::Command;

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    board: Board<R>,
    /// Gravity steps actually applied
    ticks: u64,
    /// Pieces committed to the grid
    locked_pieces: u64,
    restarts: u32,
}

impl Session<SimpleRng> {
    /// Build a session from validated settings
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_random_start(config.board_config(), SimpleRng::new(config.seed))?;
        debug!(
            "session started on {}x{} board, seed {}",
            config.rows, config.columns, config.seed
        );
        Ok(Self::from_board(board))
    }
}

impl<R: RandomSource> Session<R> {
    /// Wrap an existing board, e.g. one built with a scripted random source
    pub fn from_board(board: Board<R>) -> Self {
        Self {
            board,
            ticks: 0,
            locked_pieces: 0,
            restarts: 0,
        }
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<R> {
        &mut self.board
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn locked_pieces(&self) -> u64 {
        self.locked_pieces
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn is_over(&self) -> bool {
        !self.board.is_running()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Apply one command. Returns whether it took effect.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.board.move_left(),
            Command::MoveRight => self.board.move_right(),
            Command::MoveDown => self.board.move_down(),
            Command::Rotate => self.board.rotate(),
            Command::Tick => self.tick(),
            Command::TogglePause => {
                if !self.board.is_running() {
                    return false;
                }
                let paused = self.board.toggle_pause();
                debug!("paused: {}", paused);
                true
            }
            Command::ToggleDifficulty => {
                let hard = self.board.toggle_difficulty();
                debug!("difficult mode: {}", hard);
                true
            }
            Command::Restart => {
                self.restart();
                true
            }
        }
    }

    /// One scheduler step. Skipped while paused or after game over.
    ///
    /// Returns true if the falling piece moved down.
    pub fn tick(&mut self) -> bool {
        if self.is_over() || self.board.paused() {
            return false;
        }
        self.ticks += 1;

        let moved = self.board.tick();
        if !moved {
            self.locked_pieces += 1;
            if self.is_over() {
                info!(
                    "game over after {} ticks: score {}, {} pieces locked",
                    self.ticks,
                    self.board.score(),
                    self.locked_pieces
                );
            }
        }
        moved
    }

    /// Start over on an empty board of the same size
    pub fn restart(&mut self) {
        self.board.reset();
        self.ticks = 0;
        self.locked_pieces = 0;
        self.restarts += 1;
        info!("session restarted ({} so far)", self.restarts);
    }
}
