//! Piece module - a live tetromino instance
//!
//! A piece owns exactly four blocks. Each block carries its own absolute
//! position and occupancy, so a line clear can empty one block without
//! touching the other three. `blocks[0]` is the rotation pivot.
//!
//! Pieces never validate their own moves: the [`Board`](crate::Board) checks
//! legality first and only then asks the piece to mutate.

use arrayvec::ArrayVec;

use crate::cell::Stamp;
use crate::shape::offsets;
use crate::types::{Occupancy, Paint, PieceId, ShapeKind, Vector2D};

/// One block of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub position: Vector2D,
    pub occupancy: Occupancy,
}

impl Block {
    pub fn is_live(&self) -> bool {
        self.occupancy.is_occupied()
    }
}

/// A tetromino instance with a unique id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    shape: ShapeKind,
    blocks: [Block; 4],
}

impl Piece {
    /// Build a piece with its pivot at `origin`
    pub fn new(id: PieceId, shape: ShapeKind, origin: Vector2D) -> Self {
        let blocks = offsets(shape).map(|offset| Block {
            position: origin + offset,
            occupancy: Occupancy::Occupied,
        });
        Self { id, shape, blocks }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn paint(&self) -> Paint {
        self.shape.paint()
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    pub fn pivot(&self) -> &Block {
        &self.blocks[0]
    }

    /// Blocks that still hold material
    pub fn live_blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().filter(|b| b.is_live())
    }

    /// Positions of the blocks that still hold material
    pub fn live_positions(&self) -> ArrayVec<Vector2D, 4> {
        self.live_blocks().map(|b| b.position).collect()
    }

    pub fn live_count(&self) -> usize {
        self.live_blocks().count()
    }

    /// All four blocks emptied: the piece no longer exists on the board
    pub fn is_dead(&self) -> bool {
        self.live_count() == 0
    }

    /// True if a live block of this piece sits at `position`
    pub fn occupies(&self, position: Vector2D) -> bool {
        self.live_blocks().any(|b| b.position == position)
    }

    pub fn is_rotation_invariant(&self) -> bool {
        self.shape.is_rotation_invariant()
    }

    /// What painting `block` leaves on the grid
    pub fn stamp(&self, block: &Block) -> Stamp {
        Stamp {
            paint: self.paint(),
            owner: self.id,
            occupancy: block.occupancy,
        }
    }

    /// Shift every live block by `delta`. Unchecked.
    pub fn translate(&mut self, delta: Vector2D) {
        for block in self.blocks.iter_mut().filter(|b| b.is_live()) {
            block.position = block.position + delta;
        }
    }

    /// Where each live block would land after a quarter turn around the pivot
    pub fn rotated_positions(&self) -> ArrayVec<Vector2D, 4> {
        let pivot = self.pivot().position;
        self.live_blocks()
            .map(|b| pivot + (b.position - pivot).rotate90())
            .collect()
    }

    /// Quarter-turn every live block around the pivot. Unchecked.
    pub fn rotate_around_pivot(&mut self) {
        let pivot = self.pivot().position;
        for block in self.blocks.iter_mut().filter(|b| b.is_live()) {
            block.position = pivot + (block.position - pivot).rotate90();
        }
    }

    /// Deep copy of shape and all four blocks under a fresh id
    pub fn clone_with_id(&self, id: PieceId) -> Piece {
        Piece {
            id,
            shape: self.shape,
            blocks: self.blocks,
        }
    }

    /// Empty the live block at `position`. Returns false if there is none.
    pub fn clear_block_at(&mut self, position: Vector2D) -> bool {
        match self
            .blocks
            .iter_mut()
            .find(|b| b.is_live() && b.position == position)
        {
            Some(block) => {
                block.occupancy = Occupancy::Empty;
                true
            }
            None => false,
        }
    }

    /// Force every block failing `keep` to empty
    pub fn retain_blocks(&mut self, mut keep: impl FnMut(&Block) -> bool) {
        for block in self.blocks.iter_mut() {
            if !keep(block) {
                block.occupancy = Occupancy::Empty;
            }
        }
    }
}
