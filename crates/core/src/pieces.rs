//! Pieces module - piece catalog and the active piece value
//!
//! Every shape is a literal, hand-authored table of four (Δrow, Δcol) offsets.
//! Rotation states are not derived from a rotation matrix; see
//! [`crate::rotation`] for how the tables below are stepped through.

use crate::types::{Cell, Offset, PieceKind, Shape, SPAWN_COL, SPAWN_ROW};

/// T piece spawn shape
const T_SHAPE: Shape = [(2, 1), (0, 1), (1, 1), (1, 2)];
/// O piece shape (never rotates)
const O_SHAPE: Shape = [(0, 0), (0, 1), (1, 0), (1, 1)];
/// J piece spawn shape
const J_SHAPE: Shape = [(2, 0), (0, 1), (1, 1), (2, 1)];
/// L piece spawn shape
const L_SHAPE: Shape = [(2, 2), (0, 1), (1, 1), (2, 1)];
/// I piece spawn shape (vertical)
const I_SHAPE: Shape = [(3, 1), (0, 1), (1, 1), (2, 1)];
/// S piece spawn shape
const S_SHAPE: Shape = [(1, 0), (1, 1), (0, 1), (0, 2)];
/// Z piece spawn shape
const Z_SHAPE: Shape = [(1, 0), (1, 1), (2, 1), (2, 2)];

/// L turns, indexed by the rotation being left (0, 1, 2)
pub const L_TURNS: [Shape; 3] = [
    [(1, 0), (1, 1), (1, 2), (0, 2)],
    [(1, 0), (2, 1), (3, 1), (1, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 0)],
];

/// J turns, indexed by the rotation being left (0, 1, 2)
pub const J_TURNS: [Shape; 3] = [
    [(1, 0), (1, 1), (1, 2), (0, 0)],
    [(1, 2), (3, 1), (2, 1), (1, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
];

/// T turns for rotations 1 and 2 (rotation 0 is derived from the current shape)
pub const T_TURNS: [Shape; 2] = [
    [(1, 0), (1, 1), (0, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

/// Get the catalog (spawn) shape for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => T_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::I => I_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Swap the row and column of every offset, keeping sequence order.
pub fn swap_axes(shape: &Shape) -> Shape {
    shape.map(|(dr, dc)| (dc, dr))
}

/// Swap the row and column of every offset and reverse the sequence.
///
/// This is an involution: `flip(&flip(s)) == s`.
pub fn flip(shape: &Shape) -> Shape {
    let mut out = swap_axes(shape);
    out.reverse();
    out
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Anchor row
    pub row: i8,
    /// Anchor column
    pub col: i8,
    /// Rotation index, 0..=3 (always 0 for O)
    pub rotation: u8,
}

impl Piece {
    /// Create a new piece at the spawn anchor with its catalog shape
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            row: SPAWN_ROW,
            col: SPAWN_COL,
            rotation: 0,
        }
    }

    /// A copy of this piece moved by (Δrow, Δcol)
    pub fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    /// A copy of this piece with a different shape and rotation index
    pub fn with_shape(&self, shape: Shape, rotation: u8) -> Self {
        Self {
            shape,
            rotation,
            ..*self
        }
    }

    /// Absolute positions of the four blocks (may lie off the board)
    pub fn positions(&self) -> [Offset; 4] {
        self.shape.map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Absolute positions that lie on the board
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.positions()
            .into_iter()
            .filter_map(|(r, c)| Cell::from_signed(r, c))
    }
}
