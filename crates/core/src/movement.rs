//! Validated translation of the active piece

use serde::Serialize;

use crate::collision::can_place;
use crate::grid::Grid;
use crate::pieces::Shape;

/// Offset of a piece's 4x4 matrix in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Move `position` by (dx, dy) if the shape fits there
///
/// Rows below the board count as blocked, so downward moves stop at the floor.
/// Returns false and leaves `position` untouched when blocked.
pub fn try_move(grid: &Grid, shape: &Shape, position: &mut Position, dx: i32, dy: i32) -> bool {
    let candidate = position.offset(dx, dy);
    if !can_place(grid, shape, candidate.x, candidate.y) {
        return false;
    }
    *position = candidate;
    true
}
