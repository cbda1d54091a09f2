//! TUI 2048 (workspace facade crate).
//!
//! The board engine and the terminal front end live in dedicated crates under
//! `crates/`; this package re-exports them as `tui_2048::{core,input,term,types}`
//! and adds the binary's environment config and session log.

pub mod config;
pub mod session_log;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::Config;
pub use session_log::{LogRecord, SessionLog};
