//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules, state management and spawn logic.
//! It has **zero dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted [`RandomSource`]) produces identical games
//! - **Testable**: Comprehensive unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation move, legality and spawn paths
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with the shared lane traversal, compaction and merging
//! - [`game_state`]: The board engine: reset, apply_move, can_move, score
//! - [`rng`]: Seedable random source used for spawning
//! - [`snapshot`]: Plain copy of the state for rendering and logging
//!
//! # Game Rules
//!
//! - **Move**: Every tile slides toward the chosen edge, closing gaps
//! - **Merge**: Two equal neighbours merge into their sum, at most once per tile per move
//! - **Score**: Each merge adds the merged value
//! - **Spawn**: After every move that changed the board, one 2 (90%) or 4 (10%)
//!   appears in a uniformly chosen empty cell
//! - **Illegal move**: A move that changes nothing is ignored and spawns nothing
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::MoveDirection;
//!
//! // Create a game (already holding its two opening tiles)
//! let mut game = GameState::new(12345);
//! assert_eq!(game.score(), 0);
//!
//! // Try every direction until one is legal
//! let dir = MoveDirection::ALL
//!     .into_iter()
//!     .find(|&d| game.can_move(d))
//!     .unwrap();
//! let spawned = game.apply_move(dir).unwrap();
//! assert_ne!(game.tile(spawned.row as usize, spawned.col as usize), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LaneOutcome, ShiftOutcome};
pub use game_state::GameState;
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
