//! Terminal rendering collaborator.
//!
//! The engine only reports which grid cells are occupied. This crate turns that
//! into characters: [`GameView`] draws a [`FrameBuffer`] from a
//! [`blockfall_core::GameState`] (pure, unit-testable), and
//! [`TerminalRenderer`] flushes frames to a real terminal through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Overlay, Viewport};
pub use renderer::TerminalRenderer;
