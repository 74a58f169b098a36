//! Game state module - owns the locked cells and the active piece
//!
//! Every command runs to completion before the next one starts. Candidate
//! placements are always validated as copies; the live piece only changes once
//! a candidate is known to be legal.
//!
//! Game over is detected as part of validation: whenever a move, gravity tick
//! or rotation is validated while a locked cell sits in the top row, gravity is
//! stopped, [`GameEvent::GameOver`] is emitted and the board is reset in place.

use tracing::{debug, info, warn};

use crate::board::LockedCells;
use crate::collision::is_legal;
use crate::gravity::GravityTimer;
use crate::line_clear::clear_full_rows;
use crate::pieces::Piece;
use crate::rng::PieceFactory;
use crate::rotation::next_rotation;
use crate::types::*;

/// Notifications for the rendering collaborator, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Emitted after every attempted mutation, successful or not
    StateChanged,
    /// The active piece was locked and `lines_cleared` rows were removed
    Locked { kind: PieceKind, lines_cleared: u32 },
    /// The top row was found occupied; the board is reset right after
    GameOver,
    /// Locked cells cleared and a fresh piece spawned
    Reset,
    Paused,
    Resumed,
}

/// Result of validating a candidate placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Validation {
    Legal,
    Illegal,
    /// Validation tripped game over; the attempted command is abandoned
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    locked: LockedCells,
    active: Piece,
    factory: PieceFactory,
    gravity: GravityTimer,
    events: Vec<GameEvent>,
    /// Monotonic episode id (increments on every board reset).
    episode_id: u32,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl GameState {
    /// Create a new game with the given seed, gravity running at 300ms
    pub fn new(seed: u64) -> Self {
        Self::with_factory(PieceFactory::new(seed), GRAVITY_INTERVAL_MS)
    }

    /// Create a new game from a factory and gravity interval
    pub fn with_factory(mut factory: PieceFactory, gravity_interval_ms: u64) -> Self {
        let active = factory.create_random_piece();
        Self::from_parts(factory, LockedCells::new(), active, gravity_interval_ms)
    }

    /// Assemble a game from explicit parts (scripted setups, replays).
    ///
    /// The caller is responsible for `active` not overlapping `locked`.
    pub fn from_parts(
        factory: PieceFactory,
        locked: LockedCells,
        active: Piece,
        gravity_interval_ms: u64,
    ) -> Self {
        let mut gravity = GravityTimer::new(gravity_interval_ms);
        gravity.start();
        Self {
            locked,
            active,
            factory,
            gravity,
            events: Vec::new(),
            episode_id: 0,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn locked(&self) -> &LockedCells {
        &self.locked
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn is_paused(&self) -> bool {
        !self.gravity.is_running()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Kind that the next spawn is guaranteed not to repeat
    pub fn last_spawned_kind(&self) -> Option<PieceKind> {
        self.factory.last_kind()
    }

    /// Locked cells plus the on-board cells of the active piece, sorted
    pub fn occupied_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.locked.iter().chain(self.active.cells()).collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    /// Pending notifications, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear pending notifications.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Blocks are examined in shape order. The top-row check only runs for a
    /// block that is inside the board, so a placement whose earlier block is
    /// off the board is rejected without ending the game.
    fn validate(&mut self, candidate: &Piece) -> Validation {
        for (row, col) in candidate.positions() {
            if Cell::from_signed(row, col).is_none() {
                return Validation::Illegal;
            }
            if self.locked.is_row_occupied(0) {
                self.game_over();
                return Validation::GameOver;
            }
            if self.locked.contains(row, col) {
                return Validation::Illegal;
            }
        }
        if is_legal(&self.locked, candidate) {
            Validation::Legal
        } else {
            Validation::Illegal
        }
    }

    fn game_over(&mut self) {
        warn!(
            episode = self.episode_id,
            pieces = self.pieces_locked,
            lines = self.lines_cleared,
            "game over"
        );
        self.gravity.cancel();
        self.events.push(GameEvent::GameOver);
        self.reset_board();
    }

    fn reset_board(&mut self) {
        self.locked.clear();
        self.active = self.factory.create_random_piece();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.events.push(GameEvent::Reset);
    }

    /// Try to move the active piece one column left or right
    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        let candidate = self.active.shifted(0, direction.delta());
        let moved = match self.validate(&candidate) {
            Validation::Legal => {
                self.active = candidate;
                true
            }
            Validation::Illegal | Validation::GameOver => false,
        };
        self.events.push(GameEvent::StateChanged);
        moved
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(Direction::Right)
    }

    /// Gravity step: move down one row, or lock in place if that is illegal.
    ///
    /// Returns true if the piece moved.
    pub fn tick(&mut self) -> bool {
        let candidate = self.active.shifted(1, 0);
        let moved = match self.validate(&candidate) {
            Validation::Legal => {
                self.active = candidate;
                true
            }
            Validation::Illegal => {
                self.lock_active();
                false
            }
            Validation::GameOver => false,
        };
        self.events.push(GameEvent::StateChanged);
        moved
    }

    /// Rotate the active piece in place. O pieces never rotate.
    pub fn rotate(&mut self) -> bool {
        let rotated = if self.active.kind == PieceKind::O {
            false
        } else {
            let (shape, rotation) =
                next_rotation(self.active.kind, &self.active.shape, self.active.rotation);
            let candidate = self.active.with_shape(shape, rotation);
            match self.validate(&candidate) {
                Validation::Legal => {
                    self.active = candidate;
                    true
                }
                Validation::Illegal | Validation::GameOver => false,
            }
        };
        self.events.push(GameEvent::StateChanged);
        rotated
    }

    /// Lock the active piece where it stands, clear rows and spawn the next piece
    pub fn lock(&mut self) {
        self.lock_active();
        self.events.push(GameEvent::StateChanged);
    }

    fn lock_active(&mut self) {
        let piece = self.active;
        for cell in piece.cells() {
            self.locked.insert(cell);
        }

        let cleared = clear_full_rows(&mut self.locked);
        let lines = cleared.len() as u32;

        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.lines_cleared = self.lines_cleared.wrapping_add(lines);

        debug!(
            kind = piece.kind.as_str(),
            row = piece.row,
            col = piece.col,
            rotation = piece.rotation,
            "piece locked"
        );
        if lines > 0 {
            info!(lines, rows = ?cleared.as_slice(), total = self.lines_cleared, "rows cleared");
        }

        self.events.push(GameEvent::Locked {
            kind: piece.kind,
            lines_cleared: lines,
        });

        // The factory excludes the kind it produced last, which is this piece.
        self.active = self.factory.create_random_piece();
    }

    /// Stop gravity, clear the locked cells and spawn a fresh piece.
    ///
    /// Gravity stays stopped until [`GameState::resume`].
    pub fn reset(&mut self) {
        debug!(episode = self.episode_id, "reset");
        self.gravity.cancel();
        self.reset_board();
        self.events.push(GameEvent::StateChanged);
    }

    /// Reset the board and start gravity again
    pub fn restart(&mut self) {
        self.reset();
        self.gravity.restart();
        self.events.push(GameEvent::Resumed);
    }

    /// Stop gravity ticks
    pub fn pause(&mut self) {
        debug!("paused");
        self.gravity.cancel();
        self.events.push(GameEvent::Paused);
    }

    /// Restart gravity ticks. Resuming twice never schedules twice.
    pub fn resume(&mut self) {
        debug!("resumed");
        self.gravity.restart();
        self.events.push(GameEvent::Resumed);
    }

    /// Feed elapsed wall time and run every gravity tick that fell due.
    ///
    /// Returns the number of ticks run. Stops early if a tick stopped gravity.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        let due = self.gravity.advance(elapsed_ms);
        let mut fired = 0;
        for _ in 0..due {
            if !self.gravity.is_running() {
                break;
            }
            self.tick();
            fired += 1;
        }
        fired
    }

    /// Apply a collaborator command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => {
                self.pause();
                true
            }
            GameAction::Resume => {
                self.resume();
                true
            }
            GameAction::Reset => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
