//! Board module - the locked-cell set
//!
//! Locked cells are stored as a 10x20 occupancy grid in a flat array, so a cell
//! can never be present twice. Coordinates: (row, col) where row ranges 0..19
//! (top to bottom) and col ranges 0..9 (left to right).

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Set of locked cells - flat array, row-major order (row * WIDTH + col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedCells {
    cells: [bool; BOARD_SIZE],
    len: usize,
}

impl LockedCells {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
            len: 0,
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        let cell = Cell::from_signed(row, col)?;
        Some((cell.row as usize) * (BOARD_WIDTH as usize) + (cell.col as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Number of locked cells
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether an absolute position holds a locked cell.
    ///
    /// Off-board positions are never locked.
    pub fn contains(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).map_or(false, |idx| self.cells[idx])
    }

    /// Add a cell. Returns false if it was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let Some(idx) = Self::index(cell.row as i8, cell.col as i8) else {
            return false;
        };
        if self.cells[idx] {
            return false;
        }
        self.cells[idx] = true;
        self.len += 1;
        true
    }

    /// Number of locked cells in a row
    pub fn row_count(&self, row: u8) -> usize {
        if row >= BOARD_HEIGHT {
            return 0;
        }
        self.row_slice(row as usize).iter().filter(|&&c| c).count()
    }

    /// Check if any cell in the row is locked
    pub fn is_row_occupied(&self, row: u8) -> bool {
        self.row_count(row) > 0
    }

    /// Iterate locked cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = BOARD_WIDTH as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(idx, _)| Cell::new((idx / width) as u8, (idx % width) as u8))
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.cells = [false; BOARD_SIZE];
        self.len = 0;
    }

    fn row_slice(&self, row: usize) -> &[bool] {
        let start = row * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Move row `from` onto row `to`, leaving `from` as-is.
    pub(crate) fn copy_row(&mut self, from: usize, to: usize) {
        let width = BOARD_WIDTH as usize;
        self.cells
            .copy_within(from * width..from * width + width, to * width);
    }

    /// Empty a row without touching the others.
    pub(crate) fn clear_row(&mut self, row: usize) {
        let width = BOARD_WIDTH as usize;
        for cell in &mut self.cells[row * width..row * width + width] {
            *cell = false;
        }
    }

    /// Recount after bulk row edits.
    pub(crate) fn recount(&mut self) {
        self.len = self.cells.iter().filter(|&&c| c).count();
    }
}

impl Default for LockedCells {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Cell> for LockedCells {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}
