//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It only reads `occupied_cells()` and the
//! active piece, so it never mutates the engine.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state layered over the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    /// Show the game-over banner (raised on `GameEvent::GameOver`).
    pub game_over: bool,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED_FG: Rgb = Rgb::new(170, 170, 180);

/// Terminal view of the well.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport, overlay: &Overlay) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).glyph('·');
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                self.fill_cell(&mut fb, start_x, start_y, Cell::new(row, col), empty);
            }
        }

        let active = state.active();
        let active_cells: Vec<Cell> = active.cells().collect();
        let locked = CellStyle::new(LOCKED_FG, WELL_BG).glyph('█');
        let falling = CellStyle::new(piece_color(active.kind), WELL_BG)
            .bold()
            .glyph('█');
        for cell in state.occupied_cells() {
            let glyph = if active_cells.contains(&cell) {
                falling
            } else {
                locked
            };
            self.fill_cell(&mut fb, start_x, start_y, cell, glyph);
        }

        self.draw_side_panel(&mut fb, state, start_x + frame_w + 2, start_y);

        if overlay.game_over {
            self.draw_banner(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "enter: play"],
            );
        } else if state.is_paused() {
            self.draw_banner(&mut fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::default();

        fb.put(x, y, style.glyph('┌'));
        fb.put(x + w - 1, y, style.glyph('┐'));
        fb.put(x, y + h - 1, style.glyph('└'));
        fb.put(x + w - 1, y + h - 1, style.glyph('┘'));

        for dx in 1..w - 1 {
            fb.put(x + dx, y, style.glyph('─'));
            fb.put(x + dx, y + h - 1, style.glyph('─'));
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, style.glyph('│'));
            fb.put(x + w - 1, y + dy, style.glyph('│'));
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        glyph: crate::fb::Glyph,
    ) {
        let px = start_x + 1 + cell.col as u16 * self.cell_w;
        let py = start_y + 1 + cell.row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, glyph);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let rows: [(&str, String); 3] = [
            ("LINES", state.lines_cleared().to_string()),
            ("PIECES", state.pieces_locked().to_string()),
            (
                "STATE",
                if state.is_paused() { "paused" } else { "running" }.to_string(),
            ),
        ];

        let mut cy = y;
        for (name, text) in rows.iter() {
            fb.put_str(x, cy, name, label);
            fb.put_str(x, cy + 1, text, value);
            cy = cy.saturating_add(3);
        }

        for help in ["←/→ move", "space rotate", "p pause", "enter play", "r reset", "q quit"] {
            fb.put_str(x, cy, help, value);
            cy = cy.saturating_add(1);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid = y + h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let tx = x + w.saturating_sub(text_w) / 2;
            fb.put_str(tx, mid + i as u16, text, style);
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
