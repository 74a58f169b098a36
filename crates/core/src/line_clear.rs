//! Line clearer - detects full rows and compacts the locked cells downward
//!
//! Rows are numbered from the top, so a cell at row `r` ends up at
//! `r + (number of cleared rows below it)`. Several full rows compound.

use arrayvec::ArrayVec;

use crate::board::LockedCells;
use crate::types::BOARD_HEIGHT;

/// Row indices collected during a clear (at most every row)
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// Rows whose occupancy equals the board width, bottom to top
pub fn full_rows(locked: &LockedCells) -> ClearedRows {
    let width = locked.width() as usize;
    (0..BOARD_HEIGHT)
        .rev()
        .filter(|&row| locked.row_count(row) == width)
        .collect()
}

/// Remove all full rows and shift the remaining cells down.
///
/// Returns the cleared row indices, bottom to top.
pub fn clear_full_rows(locked: &mut LockedCells) -> ClearedRows {
    let cleared = full_rows(locked);
    if cleared.is_empty() {
        return cleared;
    }

    // Two-pointer compaction, scanning from the bottom.
    let mut write = BOARD_HEIGHT as usize;
    for read in (0..BOARD_HEIGHT as usize).rev() {
        if cleared.contains(&(read as u8)) {
            continue;
        }
        write -= 1;
        if write != read {
            locked.copy_row(read, write);
        }
    }

    for row in 0..write {
        locked.clear_row(row);
    }

    locked.recount();
    cleared
}
