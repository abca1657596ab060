//! Collision detection against the board edges and settled cells

use crate::grid::{intersect, Grid};
use crate::pieces::{column_span, Shape};

/// Check that the occupied columns of `shape` placed at column `x` stay on the board
///
/// An all-zero shape is always in bounds.
pub fn is_within_horizontal_bounds(shape: &Shape, x: i32, columns: u8) -> bool {
    match column_span(shape) {
        Some((min_col, max_col)) => x + min_col >= 0 && x + max_col < columns as i32,
        None => true,
    }
}

/// Check if `shape` at (x, y) overlaps a settled cell or leaves the grid
pub fn has_collision(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    intersect(grid, shape, x, y)
}

/// A placement is legal when it is inside the side walls and collision-free
pub fn can_place(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    is_within_horizontal_bounds(shape, x, grid.width()) && !has_collision(grid, shape, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_horizontal_bounds_use_occupied_span() {
        // Vertical I occupies matrix column 1 only
        let shape = get_shape(PieceKind::I, 1);
        assert!(is_within_horizontal_bounds(&shape, -1, 10));
        assert!(!is_within_horizontal_bounds(&shape, -2, 10));
        assert!(is_within_horizontal_bounds(&shape, 8, 10));
        assert!(!is_within_horizontal_bounds(&shape, 9, 10));
    }

    #[test]
    fn test_empty_shape_always_in_bounds() {
        let shape = [[0; 4]; 4];
        assert!(is_within_horizontal_bounds(&shape, -100, 10));
        assert!(is_within_horizontal_bounds(&shape, 100, 10));
    }

    #[test]
    fn test_can_place() {
        let mut grid = Grid::new(10, 20);
        let shape = get_shape(PieceKind::O, 0);
        assert!(can_place(&grid, &shape, 0, 0));
        assert!(!can_place(&grid, &shape, -2, 0));
        assert!(!can_place(&grid, &shape, 0, 19));

        grid.set(1, 2, 4);
        assert!(has_collision(&grid, &shape, 0, 1));
        assert!(!can_place(&grid, &shape, 0, 1));
    }
}
