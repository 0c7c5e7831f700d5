use serde::{Deserialize, Serialize};

use crate::types::{GameStatus, PieceId, ShapeKind, Vector2D};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FallingSnapshot {
    pub id: PieceId,
    pub shape: ShapeKind,
    pub positions: Vec<Vector2D>,
}

/// Read-only copy of everything a renderer or scheduler needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Paint per cell, row-major; -1 marks an empty cell
    pub cells: Vec<Vec<i16>>,
    pub falling: Option<FallingSnapshot>,
    pub status: GameStatus,
    pub score: u32,
    pub paused: bool,
    pub difficult_mode: bool,
    pub live_pieces: usize,
    pub next_id: PieceId,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.cells.clear();
        self.falling = None;
        self.status = GameStatus::Running;
        self.score = 0;
        self.paused = false;
        self.difficult_mode = false;
        self.live_pieces = 0;
        self.next_id = 0;
    }

    /// Paint at (row, col), None if out of bounds
    pub fn paint_at(&self, row: usize, col: usize) -> Option<i16> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&p| p >= 0).count()
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running && !self.paused
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            cells: Vec::new(),
            falling: None,
            status: GameStatus::Running,
            score: 0,
            paused: false,
            difficult_mode: false,
            live_pieces: 0,
            next_id: 0,
        }
    }
}
