//! Terminal runner (default binary).
//!
//! Single-threaded loop: draw when the engine reported a change, poll input
//! until the next frame, forward commands, then feed elapsed time to gravity.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::app::{App, FRAME_MS};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{TerminalRenderer, Viewport};
use blockfall::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();
    let mut viewport = terminal_viewport();

    loop {
        if app.is_dirty() {
            term.draw(app.render(viewport))?;
        }

        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle_action(action);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.draw(app.render(viewport))?;
                }
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            app.advance(elapsed.as_millis() as u64);
        }
    }
}

fn terminal_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
