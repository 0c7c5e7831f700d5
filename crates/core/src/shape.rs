//! Shape module - tetromino offset tables
//!
//! Offsets are `(row, col)` relative to the pivot, and the pivot always comes
//! first. Rotation is computed from these offsets at runtime, so there is one
//! table per shape rather than one per orientation.

use crate::types::{ShapeKind, Vector2D};

/// The four pivot-relative offsets of a shape
pub type ShapeOffsets = [Vector2D; 4];

const fn v(row: i32, col: i32) -> Vector2D {
    Vector2D::new(row, col)
}

const I_OFFSETS: ShapeOffsets = [v(0, 0), v(0, -1), v(0, 1), v(0, 2)];
const O_OFFSETS: ShapeOffsets = [v(0, 0), v(0, 1), v(1, 0), v(1, 1)];
const T_OFFSETS: ShapeOffsets = [v(0, 0), v(0, -1), v(0, 1), v(1, 0)];
const S_OFFSETS: ShapeOffsets = [v(0, 0), v(0, 1), v(1, -1), v(1, 0)];
const Z_OFFSETS: ShapeOffsets = [v(0, 0), v(0, -1), v(1, 0), v(1, 1)];
const J_OFFSETS: ShapeOffsets = [v(0, 0), v(0, -1), v(0, 1), v(1, 1)];
const L_OFFSETS: ShapeOffsets = [v(0, 0), v(0, -1), v(0, 1), v(1, -1)];

/// Get the pivot-relative offsets for a shape
pub fn offsets(kind: ShapeKind) -> ShapeOffsets {
    match kind {
        ShapeKind::I => I_OFFSETS,
        ShapeKind::O => O_OFFSETS,
        ShapeKind::T => T_OFFSETS,
        ShapeKind::S => S_OFFSETS,
        ShapeKind::Z => Z_OFFSETS,
        ShapeKind::J => J_OFFSETS,
        ShapeKind::L => L_OFFSETS,
    }
}

/// Default pivot position for new pieces on a board `columns` wide
pub fn spawn_origin(columns: usize) -> Vector2D {
    let col = columns.saturating_sub(1) / 2;
    Vector2D::new(0, col as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pivot_is_first_for_every_shape() {
        for kind in ShapeKind::ALL {
            assert_eq!(offsets(kind)[0], Vector2D::ZERO, "{:?}", kind);
        }
    }

    #[test]
    fn offsets_are_distinct_and_connected() {
        for kind in ShapeKind::ALL {
            let cells = offsets(kind);
            let unique: HashSet<_> = cells.iter().collect();
            assert_eq!(unique.len(), 4, "{:?} has duplicate offsets", kind);

            for a in cells {
                let touching = cells.iter().any(|&b| {
                    let d = b - a;
                    d.row.abs() + d.col.abs() == 1
                });
                assert!(touching, "{:?} block {:?} is detached", kind, a);
            }
        }
    }

    #[test]
    fn offsets_never_reach_above_the_pivot_row() {
        // Spawning at row 0 must stay inside the board
        for kind in ShapeKind::ALL {
            assert!(offsets(kind).iter().all(|o| o.row >= 0), "{:?}", kind);
        }
    }

    #[test]
    fn spawn_origin_is_centered() {
        assert_eq!(spawn_origin(20), Vector2D::new(0, 9));
        assert_eq!(spawn_origin(10), Vector2D::new(0, 4));
        assert_eq!(spawn_origin(1), Vector2D::new(0, 0));
    }
}
