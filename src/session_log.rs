//! Session log - one JSON object per line.
//!
//! Enabled by `TUI_2048_LOG_PATH`. Each record carries a `"type"` tag
//! (the `move` record is wrapped here; on disk it is one line):
//!
//! ```text
//! {"type":"start","episode":0,"seed":42}
//! {"type":"move","episode":0,"index":1,"direction":"left",
//!  "spawn_row":0,"spawn_col":3,"score":4,"gained":4}
//! {"type":"reset","episode":0,"score":4,"moves":1,"max_tile":4}
//! {"type":"quit","episode":1,"score":0}
//! ```
//!
//! `seed` in a `start` record is the RNG state right before the episode's
//! opening spawns, so `GameState::with_rng(SimpleRng::from_state(seed))`
//! replays that episode.
//!
//! Logging never interrupts play: the first write error disables the log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameState, RandomSource};
use crate::types::{MoveDirection, TilePos};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        episode: u32,
        seed: u32,
    },
    Move {
        episode: u32,
        index: u32,
        direction: &'static str,
        spawn_row: u8,
        spawn_col: u8,
        score: u32,
        gained: u32,
    },
    Reset {
        episode: u32,
        score: u32,
        moves: u32,
        max_tile: u32,
    },
    Quit {
        episode: u32,
        score: u32,
    },
}

impl LogRecord {
    pub fn start<R: RandomSource>(game: &GameState<R>, seed: u32) -> Self {
        LogRecord::Start {
            episode: game.episode_id(),
            seed,
        }
    }

    /// Record for a move that already succeeded; `score_before` is the score
    /// read just before `apply_move`.
    pub fn applied_move<R: RandomSource>(
        game: &GameState<R>,
        direction: MoveDirection,
        spawn: TilePos,
        score_before: u32,
    ) -> Self {
        LogRecord::Move {
            episode: game.episode_id(),
            index: game.moves(),
            direction: direction.as_str(),
            spawn_row: spawn.row,
            spawn_col: spawn.col,
            score: game.score(),
            gained: game.score() - score_before,
        }
    }

    /// Summary of the episode that is about to end.
    pub fn reset<R: RandomSource>(game: &GameState<R>) -> Self {
        LogRecord::Reset {
            episode: game.episode_id(),
            score: game.score(),
            moves: game.moves(),
            max_tile: game.board().max_tile(),
        }
    }

    pub fn quit<R: RandomSource>(game: &GameState<R>) -> Self {
        LogRecord::Quit {
            episode: game.episode_id(),
            score: game.score(),
        }
    }
}

pub struct SessionLog<W: Write = BufWriter<File>> {
    writer: Option<W>,
    buf: Vec<u8>,
}

impl SessionLog<BufWriter<File>> {
    /// Open (append) the log at `path`; `None` gives a disabled log.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {}", path))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }
}

impl<W: Write> SessionLog<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Append one record. A failed write disables the log.
    pub fn record(&mut self, record: &LogRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if writer.write_all(&self.buf).and_then(|_| writer.flush()).is_err() {
            self.writer = None;
        }
    }

    /// Give back the writer (tests read captured output this way).
    pub fn into_writer(self) -> Option<W> {
        self.writer
    }
}
