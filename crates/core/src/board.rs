//! Board module - the rules engine
//!
//! The board is a `rows x columns` grid of [`Cell`]s plus a registry mapping
//! piece ids to live [`Piece`]s. Coordinates are `(row, col)` with row 0 at the
//! top; uses a flat row-major vector for storage.
//!
//! The falling piece lives in the registry but is **not** written to the grid
//! until [`Board::paint`] commits it. Collision checks therefore test a
//! prospective position against walls, floor and settled material only.
//!
//! Line clears do not shift rows. Every piece crossing a full row is split
//! into an upper and a lower remnant with fresh ids, and each remnant then
//! falls on its own until it rests.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::cell::{Cell, Stamp};
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::rng::{random_shape, RandomSource, SimpleRng};
use crate::snapshot::{BoardSnapshot, FallingSnapshot};
use crate::types::{GameStatus, PieceId, ShapeKind, Vector2D, DOWN, LEFT, RIGHT};

/// The playfield and every piece on it
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    rows: usize,
    columns: usize,
    spawn: Vector2D,
    /// Flat array of cells, row-major order (row * columns + col)
    grid: Vec<Cell>,
    /// Pieces with at least one live block, plus the falling piece
    registry: BTreeMap<PieceId, Piece>,
    next_id: PieceId,
    falling: Option<PieceId>,
    status: GameStatus,
    score: u32,
    paused: bool,
    difficult_mode: bool,
    rng: R,
}

impl<R: RandomSource> Board<R> {
    /// Create a board whose first piece is drawn from `rng`
    pub fn with_random_start(config: BoardConfig, mut rng: R) -> Result<Self, BoardError> {
        let initial = random_shape(&mut rng);
        Self::new(config, initial, rng)
    }

    /// One gravity step.
    ///
    /// Moves the falling piece down. When it cannot move, commits it, clears
    /// full rows and spawns a random next piece. Returns true only if the
    /// piece moved; does nothing once the game has ended.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.move_down() {
            return true;
        }

        if let Some(id) = self.falling {
            self.paint(id);
            debug!("piece {} committed", id);
        }
        self.clear_lines();
        let next = random_shape(&mut self.rng);
        self.spawn(next);
        false
    }

    /// Start a new game on the same playfield.
    ///
    /// Empties every cell, forgets every piece, zeroes score and flags, and
    /// spawns a random first piece as id 0. The random source carries on.
    pub fn reset(&mut self) {
        for cell in &mut self.grid {
            cell.reset();
        }
        self.registry.clear();
        self.next_id = 0;
        self.falling = None;
        self.status = GameStatus::Running;
        self.score = 0;
        self.paused = false;
        self.difficult_mode = false;

        let initial = random_shape(&mut self.rng);
        self.spawn(initial);
    }
}

impl<R> Board<R> {
    /// Create an empty board and spawn `initial` as piece 0
    pub fn new(config: BoardConfig, initial: ShapeKind, rng: R) -> Result<Self, BoardError> {
        config.validate()?;

        let columns = config.columns;
        let grid = (0..config.rows)
            .flat_map(|row| {
                (0..columns).map(move |col| Cell::new(Vector2D::new(row as i32, col as i32)))
            })
            .collect();

        let mut board = Self {
            rows: config.rows,
            columns: config.columns,
            spawn: config.spawn_origin(),
            grid,
            registry: BTreeMap::new(),
            next_id: 0,
            falling: None,
            status: GameStatus::Running,
            score: 0,
            paused: false,
            difficult_mode: false,
            rng,
        };
        board.spawn(initial);
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Pivot position of newly spawned pieces
    pub fn spawn_position(&self) -> Vector2D {
        self.spawn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the pause flag and return the new value.
    ///
    /// The board never reads it; the driver decides whether to tick.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn difficult_mode(&self) -> bool {
        self.difficult_mode
    }

    /// Flip the difficulty flag and return the new value
    pub fn toggle_difficulty(&mut self) -> bool {
        self.difficult_mode = !self.difficult_mode;
        self.difficult_mode
    }

    /// Id the next spawn or split will receive
    pub fn next_id(&self) -> PieceId {
        self.next_id
    }

    // ============== Cells ==============

    pub fn in_bounds(&self, pos: Vector2D) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.columns
    }

    /// Flat index of an in-bounds position.
    ///
    /// Every position the engine produces for itself is in bounds, so a
    /// miss here is a broken invariant and panics.
    fn index(&self, pos: Vector2D) -> usize {
        assert!(
            self.in_bounds(pos),
            "cell {:?} outside {}x{} board",
            pos,
            self.rows,
            self.columns
        );
        pos.row as usize * self.columns + pos.col as usize
    }

    fn cell_ref(&self, pos: Vector2D) -> &Cell {
        &self.grid[self.index(pos)]
    }

    fn cell_mut(&mut self, pos: Vector2D) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.grid[idx]
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.grid.get(row * self.columns + col)
    }

    /// Get cell at a position. Returns None if out of bounds.
    pub fn cell_at(&self, pos: Vector2D) -> Option<&Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.grid.get(self.index(pos))
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.grid
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_occupied()).count()
    }

    /// Check if a row is completely occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.columns;
        self.grid[start..start + self.columns]
            .iter()
            .all(Cell::is_occupied)
    }

    /// True if `pos` is outside the board or holds settled material
    pub fn conflicts(&self, pos: Vector2D) -> bool {
        !self.in_bounds(pos) || self.cell_ref(pos).is_occupied()
    }

    // ============== Pieces ==============

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.registry.get(&id)
    }

    /// Registered pieces in id order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.registry.values()
    }

    pub fn piece_count(&self) -> usize {
        self.registry.len()
    }

    pub fn falling_id(&self) -> Option<PieceId> {
        self.falling
    }

    /// The piece under player control, if it still exists
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling.and_then(|id| self.registry.get(&id))
    }

    fn allocate_id(&mut self) -> PieceId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True once every live block of the piece has been written to the grid.
    /// A piece that no longer exists counts as committed.
    fn is_committed(&self, id: PieceId) -> bool {
        match self.registry.get(&id) {
            Some(piece) => piece
                .live_blocks()
                .all(|b| self.cell_at(b.position).and_then(Cell::owner) == Some(id)),
            None => true,
        }
    }

    /// Create the next falling piece at the spawn position.
    ///
    /// A previous falling piece that was never painted is dropped from the
    /// registry. The spawn always completes; if any of its cells collide the
    /// game ends and the caller must stop driving the board.
    pub fn spawn(&mut self, shape: ShapeKind) -> PieceId {
        if let Some(previous) = self.falling.take() {
            if !self.is_committed(previous) {
                self.registry.remove(&previous);
            }
        }

        let id = self.allocate_id();
        let piece = Piece::new(id, shape, self.spawn);
        let blocked = piece.live_blocks().any(|b| self.conflicts(b.position));
        self.registry.insert(id, piece);
        self.falling = Some(id);

        if blocked {
            if self.is_running() {
                debug!("spawn of {:?} (piece {}) blocked, game over", shape, id);
            }
            self.status = GameStatus::Ended;
        } else {
            debug!("spawned {:?} as piece {}", shape, id);
        }
        id
    }

    /// Paint a fresh piece straight into the grid as settled material.
    ///
    /// Returns None without mutation if any block would collide.
    pub fn lock_piece(&mut self, shape: ShapeKind, origin: Vector2D) -> Option<PieceId> {
        let candidate = Piece::new(self.next_id, shape, origin);
        if candidate.live_blocks().any(|b| self.conflicts(b.position)) {
            return None;
        }

        let id = self.allocate_id();
        self.registry.insert(id, candidate);
        self.paint(id);
        Some(id)
    }

    // ============== Movement ==============

    /// Shift an uncommitted piece by `delta`, all or nothing.
    ///
    /// Painted pieces are refused; only [`drop_one_piece`](Self::drop_one_piece)
    /// moves settled material.
    pub fn try_displace(&mut self, id: PieceId, delta: Vector2D) -> bool {
        if self.is_committed(id) {
            return false;
        }
        let Some(piece) = self.registry.get(&id) else {
            return false;
        };
        if piece.live_blocks().any(|b| self.conflicts(b.position + delta)) {
            return false;
        }
        if let Some(piece) = self.registry.get_mut(&id) {
            piece.translate(delta);
        }
        true
    }

    /// Quarter-turn an uncommitted piece, all or nothing.
    ///
    /// Rotation-invariant shapes succeed without mutation. Painted pieces
    /// are refused.
    pub fn try_rotate(&mut self, id: PieceId) -> bool {
        if self.is_committed(id) {
            return false;
        }
        let Some(piece) = self.registry.get(&id) else {
            return false;
        };
        if piece.is_rotation_invariant() {
            return true;
        }
        if piece.rotated_positions().iter().any(|&p| self.conflicts(p)) {
            return false;
        }
        if let Some(piece) = self.registry.get_mut(&id) {
            piece.rotate_around_pivot();
        }
        true
    }

    fn move_falling(&mut self, delta: Vector2D) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.falling {
            Some(id) => self.try_displace(id, delta),
            None => false,
        }
    }

    pub fn move_down(&mut self) -> bool {
        self.move_falling(DOWN)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_falling(LEFT)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_falling(RIGHT)
    }

    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.falling {
            Some(id) => self.try_rotate(id),
            None => false,
        }
    }

    // ============== Commit / clear / settle ==============

    /// Write every live block of a piece onto the grid
    pub fn paint(&mut self, id: PieceId) {
        let Some(piece) = self.registry.get(&id) else {
            return;
        };
        let stamps: ArrayVec<(Vector2D, Stamp), 4> = piece
            .live_blocks()
            .map(|b| (b.position, piece.stamp(b)))
            .collect();
        for (pos, stamp) in stamps {
            self.cell_mut(pos).apply(stamp);
        }
    }

    /// Clear full rows one at a time, lowest first, rescanning from the
    /// bottom after each clear. Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        while let Some(row) = (0..self.rows).rev().find(|&row| self.is_row_full(row)) {
            for col in 0..self.columns {
                self.clear_cell(Vector2D::new(row as i32, col as i32));
            }
            self.settle();
            self.increment_score();
            cleared += 1;
            debug!("cleared row {}, score {}", row, self.score);
        }
        cleared
    }

    /// Empty one cell of a full row and split its owner around that row
    fn clear_cell(&mut self, pos: Vector2D) {
        let owner = self.cell_ref(pos).owner();
        self.cell_mut(pos).reset();

        // Siblings in the same row still name the split piece; they are
        // emptied later in this same pass.
        let Some(id) = owner else {
            return;
        };
        let Some(mut piece) = self.registry.remove(&id) else {
            return;
        };
        if !piece.clear_block_at(pos) {
            self.registry.insert(id, piece);
            return;
        }
        self.split(&piece, pos.row);
    }

    /// Replace `piece` by an upper and a lower remnant around `row`
    fn split(&mut self, piece: &Piece, row: i32) {
        let upper_id = self.allocate_id();
        let mut upper = piece.clone_with_id(upper_id);
        upper.retain_blocks(|b| b.position.row < row);

        let lower_id = self.allocate_id();
        let mut lower = piece.clone_with_id(lower_id);
        lower.retain_blocks(|b| b.position.row > row);

        trace!(
            "split piece {} at row {} into {} ({} blocks) and {} ({} blocks)",
            piece.id(),
            row,
            upper_id,
            upper.live_count(),
            lower_id,
            lower.live_count()
        );
        self.register_remnant(upper);
        self.register_remnant(lower);
    }

    /// Re-point every cell of a remnant to its new id, then register it
    fn register_remnant(&mut self, remnant: Piece) {
        if remnant.is_dead() {
            return;
        }
        let id = remnant.id();
        for pos in remnant.live_positions() {
            self.cell_mut(pos).relink(id);
        }
        self.registry.insert(id, remnant);
    }

    /// Let every settled piece fall until it rests, scanning bottom to top
    pub fn settle(&mut self) {
        for row in (0..self.rows).rev() {
            for col in 0..self.columns {
                let pos = Vector2D::new(row as i32, col as i32);
                if let Some(id) = self.cell_ref(pos).owner() {
                    self.drop_one_piece(id);
                }
            }
        }
    }

    /// Drop one committed piece row by row until something stops it.
    ///
    /// A piece's own blocks never block it. Returns the rows fallen, so a
    /// piece already at rest returns 0.
    pub fn drop_one_piece(&mut self, id: PieceId) -> u32 {
        if self.falling == Some(id) && !self.is_committed(id) {
            return 0;
        }

        let mut dropped = 0;
        loop {
            let Some(piece) = self.registry.get(&id) else {
                break;
            };
            if piece.is_dead() {
                break;
            }
            let blocked = piece.live_blocks().any(|b| {
                let below = b.position + DOWN;
                !piece.occupies(below) && self.conflicts(below)
            });
            if blocked {
                break;
            }

            let vacated = piece.live_positions();
            for pos in vacated {
                self.cell_mut(pos).reset();
            }
            if let Some(piece) = self.registry.get_mut(&id) {
                piece.translate(DOWN);
            }
            self.paint(id);
            dropped += 1;
        }

        if dropped > 0 {
            trace!("piece {} fell {} rows", id, dropped);
        }
        dropped
    }

    // ============== Snapshot ==============

    /// Fill `out` with the current state, reusing its allocations
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.rows = self.rows;
        out.columns = self.columns;
        out.cells.resize_with(self.rows, Vec::new);
        for (row, line) in out.cells.iter_mut().enumerate() {
            line.clear();
            let start = row * self.columns;
            line.extend(
                self.grid[start..start + self.columns]
                    .iter()
                    .map(|c| c.paint().map_or(-1, i16::from)),
            );
        }
        out.falling = self.falling_piece().map(|piece| FallingSnapshot {
            id: piece.id(),
            shape: piece.shape(),
            positions: piece.live_positions().to_vec(),
        });
        out.status = self.status;
        out.score = self.score;
        out.paused = self.paused;
        out.difficult_mode = self.difficult_mode;
        out.live_pieces = self.registry.len();
        out.next_id = self.next_id;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
