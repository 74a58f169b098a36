//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the engine, the terminal front-end and the tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: row 0, column 4
//!
//! Coordinates are always `(row, col)`. Row 0 is the top of the well, so
//! gravity increases the row index.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(Cell::from_signed(0, -1), None);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor row for freshly spawned pieces
pub const SPAWN_ROW: i8 = 0;

/// Anchor column for freshly spawned pieces
pub const SPAWN_COL: i8 = 4;

/// Gravity interval in milliseconds (one row per 300ms)
pub const GRAVITY_INTERVAL_MS: u64 = 300;

/// Offset of a single block relative to a piece anchor: (Δrow, Δcol)
pub type Offset = (i8, i8);

/// Shape of a piece - exactly 4 offsets, in authored order
pub type Shape = [Offset; 4];

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Convert to uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// A locked, occupied grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Convert an absolute (possibly off-board) position into a cell.
    ///
    /// Returns None when the position lies outside the board.
    pub fn from_signed(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction
    pub fn delta(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Commands accepted from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    Pause,
    Resume,
    Reset,
}
