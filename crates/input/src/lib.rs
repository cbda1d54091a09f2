//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. A 2048 move is a
//! discrete event, so only key presses are mapped; auto-repeat and release
//! events are left to the caller to ignore.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
