//! Cell module - one slot of the playfield
//!
//! A cell's position is fixed at construction and equals its grid address.
//! Only paint, owner and occupancy change over the life of the board.

use crate::types::{Occupancy, Paint, PieceId, Vector2D};

/// Material copied from a piece block onto a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stamp {
    pub paint: Paint,
    pub owner: PieceId,
    pub occupancy: Occupancy,
}

/// One playfield slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    position: Vector2D,
    paint: Option<Paint>,
    owner: Option<PieceId>,
    occupancy: Occupancy,
}

impl Cell {
    /// Create an empty cell at a grid address
    pub fn new(position: Vector2D) -> Self {
        Self {
            position,
            paint: None,
            owner: None,
            occupancy: Occupancy::Empty,
        }
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    /// Palette index, `None` while empty
    pub fn paint(&self) -> Option<Paint> {
        self.paint
    }

    /// Id of the piece whose block fills this cell, `None` while empty
    pub fn owner(&self) -> Option<PieceId> {
        self.owner
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupancy.is_occupied()
    }

    /// Back to empty. The position is kept.
    pub fn reset(&mut self) {
        self.paint = None;
        self.owner = None;
        self.occupancy = Occupancy::Empty;
    }

    /// Copy paint, owner and occupancy from a block without touching the position.
    ///
    /// An empty stamp resets the cell so paint and owner never outlive occupancy.
    pub fn apply(&mut self, stamp: Stamp) {
        if stamp.occupancy.is_empty() {
            self.reset();
            return;
        }
        self.paint = Some(stamp.paint);
        self.owner = Some(stamp.owner);
        self.occupancy = Occupancy::Occupied;
    }

    /// Re-point ownership after the owning piece was split
    pub(crate) fn relink(&mut self, owner: PieceId) {
        debug_assert!(self.is_occupied(), "relinking an empty cell at {:?}", self.position);
        self.owner = Some(owner);
    }
}
