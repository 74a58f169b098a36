//! App: glues the engine to the terminal collaborator.
//!
//! The app owns the single [`GameState`] for the session, forwards mapped key
//! commands, feeds wall time into gravity and turns engine notifications into
//! front-end state (the game-over banner).

use tracing::info;

use crate::config::Config;
use crate::core::{GameEvent, GameState, PieceFactory};
use crate::term::{FrameBuffer, GameView, Overlay, Viewport};
use crate::types::GameAction;

/// Frame interval for input polling and redraws (~60 FPS)
pub const FRAME_MS: u64 = 16;

pub struct App {
    state: GameState,
    view: GameView,
    overlay: Overlay,
    /// A state change is waiting to be drawn
    dirty: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let factory = match config.seed {
            Some(seed) => PieceFactory::new(seed),
            None => PieceFactory::from_entropy(),
        };
        Self::with_state(GameState::with_factory(factory, config.gravity_ms))
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            view: GameView::default(),
            overlay: Overlay::default(),
            dirty: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Whether a redraw is pending
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forward a player command to the engine
    pub fn handle_action(&mut self, action: GameAction) {
        if matches!(action, GameAction::Resume | GameAction::Reset) {
            self.overlay.game_over = false;
        }
        self.state.apply_action(action);
        self.drain_events();
    }

    /// Feed elapsed wall time into gravity
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.state.advance(elapsed_ms);
        self.drain_events();
    }

    fn drain_events(&mut self) {
        for event in self.state.take_events() {
            match event {
                GameEvent::GameOver => {
                    info!(episode = self.state.episode_id(), "game over shown");
                    self.overlay.game_over = true;
                    self.dirty = true;
                }
                GameEvent::StateChanged
                | GameEvent::Locked { .. }
                | GameEvent::Reset
                | GameEvent::Paused
                | GameEvent::Resumed => self.dirty = true,
            }
        }
    }

    /// Render the current frame and clear the dirty flag
    pub fn render(&mut self, viewport: Viewport) -> FrameBuffer {
        self.dirty = false;
        self.view.render(&self.state, viewport, &self.overlay)
    }
}
