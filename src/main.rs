//! Terminal 2048 runner (default binary).
//!
//! crossterm for input and a framebuffer-based renderer. The loop blocks on
//! the next terminal event; nothing happens between key presses.

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_2048::core::{GameSnapshot, GameState, SimpleRng};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;
use tui_2048::{Config, LogRecord, SessionLog};

fn main() -> Result<()> {
    let config = Config::from_env();

    // Reported before raw mode so the message is readable.
    let mut log = match SessionLog::open(config.log_path.as_deref()) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("[2048] session log disabled: {:#}", e);
            SessionLog::disabled()
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, log: &mut SessionLog) -> Result<()> {
    let rng = SimpleRng::new(config.seed);
    let seed = rng.state();
    let mut game = GameState::with_rng(rng);
    log.record(&LogRecord::start(&game, seed));

    let view = GameView::new(config.cell_width, 3);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    log.record(&LogRecord::quit(&game));
                    return Ok(());
                }

                match handle_key_event(key) {
                    Some(GameAction::Restart) => {
                        log.record(&LogRecord::reset(&game));
                        let seed = game.rng().state();
                        game.reset();
                        log.record(&LogRecord::start(&game, seed));
                    }
                    Some(action) => {
                        let dir = action.direction();
                        let score_before = game.score();
                        if let Some(spawn) = game.apply_move(dir) {
                            log.record(&LogRecord::applied_move(&game, dir, spawn, score_before));
                        }
                    }
                    None => {}
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
