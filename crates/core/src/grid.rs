//! Grid module - the settled-cell matrix and the pure operations over it
//!
//! The grid is a `width x height` matrix of small integers where `0` is empty
//! and `1..=7` is the color id of a settled cell.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x is the column (left to right) and y the row (top to bottom).
//!
//! [`intersect`], [`merge`] and [`compact_full_rows`] never mutate their input.

use crate::pieces::{minos, Shape};
use crate::scoring::calculate_line_bonus;
use crate::types::{Cell, EMPTY};

/// Settled cells of a board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Build a grid from rows (top row first)
    ///
    /// Returns `None` if the rows are empty, ragged, or wider/taller than 255.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first()?.as_ref().len()).ok()?;
        if width == 0 || rows.iter().any(|r| r.as_ref().len() != width as usize) {
            return None;
        }

        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Convert to rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Check if a row is completely filled
    ///
    /// Rows of a zero-width grid are never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        if self.width == 0 || y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Cells of row `y`
    ///
    /// Panics if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Rows from top to bottom
    ///
    /// A zero-width grid has no cells and yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Shift every row up by one (row 0 is discarded) and write `row` as the new bottom row
    ///
    /// `row` must be exactly `width` cells long; otherwise the grid is left unchanged
    /// and false is returned.
    pub fn push_bottom_row(&mut self, row: &[Cell]) -> bool {
        let width = self.width as usize;
        if row.len() != width || self.height == 0 {
            return false;
        }
        self.cells.copy_within(width.., 0);
        let bottom = (self.height as usize - 1) * width;
        self.cells[bottom..].copy_from_slice(row);
        true
    }
}

/// Result of a row compaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearResult {
    /// Number of full rows removed
    pub lines_removed: u32,
    /// Grid after compaction (an unchanged copy when nothing was removed)
    pub grid: Grid,
    /// `50 * lines_removed^2`, before any combo scaling
    pub score_bonus: u32,
    /// Indices (in the input grid) of the rows that were removed, top to bottom
    pub cleared_rows: Vec<usize>,
}

impl ClearResult {
    pub fn is_clear(&self) -> bool {
        self.lines_removed > 0
    }
}

/// True if placing `shape` at (x, y) hits a settled cell or leaves the grid
///
/// Only non-zero shape cells count; an all-zero shape never intersects.
pub fn intersect(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    minos(shape).any(|(dx, dy, _)| !grid.is_free(x + dx, y + dy))
}

/// Copy of `grid` with the non-zero cells of `shape` written at (x, y)
///
/// Zero shape cells leave the grid untouched; cells landing out of bounds are skipped.
pub fn merge(grid: &Grid, shape: &Shape, x: i32, y: i32) -> Grid {
    let mut merged = grid.clone();
    for (dx, dy, cell) in minos(shape) {
        merged.set(x + dx, y + dy, cell);
    }
    merged
}

/// Remove all full rows, shifting the rows above down
///
/// Uses a two-pointer pass from the bottom on a copy of the grid. Rows vacated at the
/// top are zero-filled. When no row is full the result carries `lines_removed == 0`,
/// a zero bonus and an unchanged copy of the grid.
pub fn compact_full_rows(grid: &Grid) -> ClearResult {
    let mut out = grid.clone();
    let width = grid.width as usize;
    let height = grid.height as usize;
    let mut cleared_rows = Vec::new();
    let mut write_y = height;

    // Scan from bottom to top
    for read_y in (0..height).rev() {
        if grid.is_row_full(read_y) {
            cleared_rows.push(read_y);
        } else {
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                out.cells
                    .copy_within(src..src + width, write_y * width);
            }
        }
    }

    // Clear the remaining rows at the top
    out.cells[..write_y * width].fill(EMPTY);

    cleared_rows.reverse();
    let lines_removed = cleared_rows.len() as u32;
    ClearResult {
        lines_removed,
        grid: out,
        score_bonus: calculate_line_bonus(lines_removed),
        cleared_rows,
    }
}
