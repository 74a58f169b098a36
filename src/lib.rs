//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under stable paths
//! (`blockfall::{core, input, term, types}`) and hosts the pieces that glue
//! them into a playable binary: environment configuration, log setup and the
//! frame-driven app loop.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::App;
pub use config::Config;
