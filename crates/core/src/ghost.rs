//! Ghost projection - where the active piece would land if dropped straight down

use crate::grid::{intersect, Grid};
use crate::pieces::Shape;

/// Lowest row offset reachable from `y` by moving straight down
///
/// The result is always `>= y` and below the board height. It is a pure function
/// of the grid and the piece, so callers recompute it after every change.
pub fn compute_landing_y(grid: &Grid, shape: &Shape, x: i32, y: i32) -> i32 {
    let rows = grid.height() as i32;
    let mut landing = y;
    while landing + 1 < rows && !intersect(grid, shape, x, landing + 1) {
        landing += 1;
    }
    landing
}
