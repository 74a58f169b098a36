//! Core game logic - pure, deterministic and testable
//!
//! This crate contains the game-state engine: the piece catalog, rotation
//! tables, collision checks, locking, line clearing and random piece
//! selection. It has no dependency on a terminal or any other front-end; a
//! renderer reads [`GameState::occupied_cells`] and forwards commands.
//!
//! # Module Structure
//!
//! - [`pieces`]: literal piece shapes and the [`Piece`] value
//! - [`rotation`]: per-kind rotation state tables
//! - [`rng`]: random piece factory that never repeats the previous kind
//! - [`board`]: the locked-cell set
//! - [`collision`]: placement legality
//! - [`line_clear`]: full-row detection and compaction
//! - [`gravity`]: cancellable repeating gravity timer
//! - [`game_state`]: moves, gravity ticks, locking, reset and game over
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameEvent, GameState};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // One gravity tick every 300ms.
//! assert_eq!(game.advance(600), 2);
//! assert_eq!(game.active().row, 2);
//! assert!(game.take_events().contains(&GameEvent::StateChanged));
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod gravity;
pub mod line_clear;
pub mod pieces;
pub mod rng;
pub mod rotation;

pub use blockfall_types as types;

pub use board::LockedCells;
pub use collision::is_legal;
pub use game_state::{GameEvent, GameState};
pub use gravity::GravityTimer;
pub use line_clear::{clear_full_rows, full_rows, ClearedRows};
pub use pieces::{base_shape, Piece};
pub use rng::PieceFactory;
pub use rotation::next_rotation;
