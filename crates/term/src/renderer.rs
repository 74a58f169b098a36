//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later
//! frames only rewrite runs of glyphs that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: FrameBuffer) -> Result<()> {
        let same_size = self
            .last
            .as_ref()
            .map_or(false, |prev| prev.width() == fb.width() && prev.height() == fb.height());

        if !same_size {
            self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut current: Option<CellStyle> = None;
        let runs = match self.last.as_ref().filter(|_| same_size) {
            Some(prev) => changed_runs(prev, &fb),
            None => (0..fb.height()).map(|y| (0, y, fb.width())).collect(),
        };

        for (x, y, len) in runs {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let glyph = fb.get(x + dx, y).unwrap_or_default();
                if current != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.last = Some(fb);
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of glyphs that differ between two
/// equally-sized frames.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}
