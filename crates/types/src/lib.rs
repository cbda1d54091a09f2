//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, session logging).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//!
//! # Spawn Odds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_ODDS_TOTAL` | 10 | Denominator of a spawn draw |
//! | `SPAWN_ODDS_TWO` | 9 | Draws below this spawn a 2, the rest a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{GameAction, MoveDirection, TilePos, GRID_SIZE};
//!
//! // Actions carry their direction
//! assert_eq!(GameAction::MoveUp.direction(), MoveDirection::Up);
//! assert_eq!(MoveDirection::Left.as_str(), "left");
//!
//! // Positions are (row, col)
//! let pos = TilePos::new(1, 3);
//! assert_eq!(pos.index(), 7);
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length (4 rows, 4 columns)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value of the common spawned tile
pub const SPAWN_TWO: u32 = 2;

/// Value of the rare spawned tile
pub const SPAWN_FOUR: u32 = 4;

/// Denominator of a spawn value draw
pub const SPAWN_ODDS_TOTAL: u32 = 10;

/// A draw in `[0, SPAWN_ODDS_TWO)` spawns a 2 (90%), otherwise a 4 (10%)
pub const SPAWN_ODDS_TWO: u32 = 9;

/// Number of tiles placed by a reset
pub const INITIAL_TILES: usize = 2;


/// A move intent
///
/// The four compass directions slide every tile toward that edge.
/// `None` is the no-op sentinel: applying it never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
    None,
}

/// Which grid axis a move travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Tiles travel along rows (Left/Right)
    Horizontal,
    /// Tiles travel along columns (Up/Down)
    Vertical,
}

impl MoveDirection {
    /// The four real directions, in a fixed order (Up, Down, Left, Right)
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Up,
        MoveDirection::Down,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Movement axis and whether the target edge is the far end (index 3).
    ///
    /// Returns `None` for the no-op sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Axis, MoveDirection};
    ///
    /// assert_eq!(MoveDirection::Left.traversal(), Some((Axis::Horizontal, false)));
    /// assert_eq!(MoveDirection::Down.traversal(), Some((Axis::Vertical, true)));
    /// assert_eq!(MoveDirection::None.traversal(), None);
    /// ```
    pub fn traversal(&self) -> Option<(Axis, bool)> {
        match self {
            MoveDirection::Up => Some((Axis::Vertical, false)),
            MoveDirection::Down => Some((Axis::Vertical, true)),
            MoveDirection::Left => Some((Axis::Horizontal, false)),
            MoveDirection::Right => Some((Axis::Horizontal, true)),
            MoveDirection::None => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
            MoveDirection::None => "none",
        }
    }

    /// Index into [`MoveDirection::ALL`], `None` for the sentinel
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            MoveDirection::Up => Some(0),
            MoveDirection::Down => Some(1),
            MoveDirection::Left => Some(2),
            MoveDirection::Right => Some(3),
            MoveDirection::None => None,
        }
    }
}

/// Game actions produced by the input layer
///
/// Each action maps to exactly one engine call: the moves to
/// `apply_move`, restart to `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide tiles toward the top edge
    MoveUp,
    /// Slide tiles toward the bottom edge
    MoveDown,
    /// Slide tiles toward the left edge
    MoveLeft,
    /// Slide tiles toward the right edge
    MoveRight,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// Move direction carried by this action (`None` for restart)
    pub fn direction(&self) -> MoveDirection {
        match self {
            GameAction::MoveUp => MoveDirection::Up,
            GameAction::MoveDown => MoveDirection::Down,
            GameAction::MoveLeft => MoveDirection::Left,
            GameAction::MoveRight => MoveDirection::Right,
            GameAction::Restart => MoveDirection::None,
        }
    }
}

/// A grid coordinate, (row, col), both in `[0, GRID_SIZE)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub row: u8,
    pub col: u8,
}

impl TilePos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build from a row-major flat index
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        }
    }

    /// Row-major flat index
    pub const fn index(&self) -> usize {
        (self.row as usize) * GRID_SIZE + (self.col as usize)
    }
}

/// Colour tier used by the terminal view for a tile value
///
/// Tiers follow the value thresholds 4, 16, 64 and 256.
///
/// # Examples
///
/// ```
/// use tui_2048_types::tile_tier;
///
/// assert_eq!(tile_tier(2), 0);
/// assert_eq!(tile_tier(8), 1);
/// assert_eq!(tile_tier(128), 3);
/// assert_eq!(tile_tier(2048), 4);
/// ```
pub fn tile_tier(value: u32) -> u8 {
    match value {
        0..=4 => 0,
        5..=16 => 1,
        17..=64 => 2,
        65..=256 => 3,
        _ => 4,
    }
}
