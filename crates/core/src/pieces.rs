//! Pieces module - piece shapes and their rotation cycles
//!
//! Every piece kind owns an ordered, closed list of 4x4 rotation matrices.
//! Matrices hold 0/1 markers; [`get_shape`] scales them by the piece's color id
//! so merged cells carry the piece's identity.
//! Rows run top to bottom, columns left to right.

use crate::types::{Cell, PieceKind, EMPTY, SHAPE_SIZE};

/// A rotation variant: a 4x4 matrix indexed `[row][column]`
pub type Shape = [[Cell; SHAPE_SIZE]; SHAPE_SIZE];

const I_SHAPES: [Shape; 2] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const O_SHAPES: [Shape; 1] = [[[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]];

const T_SHAPES: [Shape; 4] = [
    [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const S_SHAPES: [Shape; 2] = [
    [[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
    [[1, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const Z_SHAPES: [Shape; 2] = [
    [[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
];

const J_SHAPES: [Shape; 4] = [
    [[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const L_SHAPES: [Shape; 4] = [
    [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
    [[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
];

/// Marker matrices of every rotation variant, in rotation order
pub fn variants(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Get the colored shape for a piece kind and rotation index
///
/// The index wraps modulo the variant count.
pub fn get_shape(kind: PieceKind, rotation: usize) -> Shape {
    let variants = variants(kind);
    let markers = &variants[rotation % variants.len()];
    let color = kind.color_id();

    let mut shape = [[EMPTY; SHAPE_SIZE]; SHAPE_SIZE];
    for (out_row, row) in shape.iter_mut().zip(markers) {
        for (out, &marker) in out_row.iter_mut().zip(row) {
            *out = marker * color;
        }
    }
    shape
}

/// Get initial shape for a new piece
pub fn get_spawn_shape(kind: PieceKind) -> Shape {
    get_shape(kind, 0)
}

/// Non-zero cells of a shape as `(column, row, value)`
pub fn minos(shape: &Shape) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
    shape.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != EMPTY)
            .map(move |(col, &cell)| (col as i32, row as i32, cell))
    })
}

/// Leftmost and rightmost occupied columns, or `None` for an all-zero shape
pub fn column_span(shape: &Shape) -> Option<(i32, i32)> {
    minos(shape).fold(None, |span, (col, _, _)| match span {
        None => Some((col, col)),
        Some((lo, hi)) => Some((lo.min(col), hi.max(col))),
    })
}
