//! Collision validator - decides whether a candidate placement is legal

use crate::board::LockedCells;
use crate::pieces::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check a candidate piece against the board bounds and the locked cells.
///
/// Returns false iff any block lies outside `[0, 20) x [0, 10)` or on a locked
/// cell. The candidate is always a copy; the live piece is never touched.
pub fn is_legal(locked: &LockedCells, candidate: &Piece) -> bool {
    let positions = candidate.positions();

    for &(row, col) in positions.iter() {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return false;
        }
        if locked.contains(row, col) {
            return false;
        }
    }

    // Column extent check over the whole shape.
    let min_col = positions.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let max_col = positions.iter().map(|&(_, c)| c).max().unwrap_or(0);
    min_col >= 0 && max_col < BOARD_WIDTH as i8
}
