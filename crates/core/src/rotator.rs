//! Rotation state of the active piece and wall-kick resolution
//!
//! Rotation only ever advances (`index + 1` modulo the variant count). When the
//! rotated shape does not fit in place, it is retried at the horizontal offsets
//! in [`KICK_OFFSETS`], in that exact order, on the same row. The first legal
//! offset wins.

use crate::collision::can_place;
use crate::grid::Grid;
use crate::movement::Position;
use crate::pieces::{get_shape, Shape};
use crate::types::PieceKind;

/// Horizontal deltas tried when rotating, in priority order
pub const KICK_OFFSETS: [i32; 5] = [0, -1, 1, -2, 2];

/// Candidate produced by [`Rotator::next`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextShape {
    pub shape: Shape,
    pub rotation: usize,
}

/// Rotation index of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotator {
    kind: PieceKind,
    rotation: usize,
}

impl Rotator {
    pub fn new(kind: PieceKind) -> Self {
        Self { kind, rotation: 0 }
    }

    /// Switch to a new piece, back to its first variant
    pub fn set_piece(&mut self, kind: PieceKind) {
        self.kind = kind;
        self.rotation = 0;
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn current_shape(&self) -> Shape {
        get_shape(self.kind, self.rotation)
    }

    /// The following variant, without committing to it
    pub fn next(&self) -> NextShape {
        let rotation = (self.rotation + 1) % self.kind.rotation_count();
        NextShape {
            shape: get_shape(self.kind, rotation),
            rotation,
        }
    }

    /// Commit a rotation index (wraps modulo the variant count)
    pub fn set_rotation(&mut self, rotation: usize) {
        self.rotation = rotation % self.kind.rotation_count();
    }
}

/// Try to rotate with wall kicks
///
/// On success the rotation index and the position are updated together and the
/// applied horizontal kick is returned. On failure nothing changes.
pub fn try_rotate(grid: &Grid, rotator: &mut Rotator, position: &mut Position) -> Option<i32> {
    let candidate = rotator.next();

    let kick = KICK_OFFSETS
        .iter()
        .copied()
        .find(|&dx| can_place(grid, &candidate.shape, position.x + dx, position.y))?;

    rotator.set_rotation(candidate.rotation);
    position.x += kick;
    Some(kick)
}
