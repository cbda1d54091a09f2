//! Game state module - the board engine
//!
//! Ties together the board, the score and the spawn RNG. Every mutation goes
//! through [`GameState::reset`] or [`GameState::apply_move`]; a move either
//! runs to completion (shift, merge, score, spawn) or changes nothing.
//!
//! The engine has no game-over state. Callers that need one ask
//! [`GameState::can_move`] for all four directions.

use crate::board::Board;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    MoveDirection, TilePos, GRID_SIZE, INITIAL_TILES, SPAWN_FOUR, SPAWN_ODDS_TOTAL,
    SPAWN_ODDS_TWO, SPAWN_TWO,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    board: Board,
    score: u32,
    rng: R,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Successful moves in the current episode.
    moves: u32,
    /// Tile inserted by the last successful move (None right after reset).
    last_spawn: Option<TilePos>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed, already reset
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing spawns from `rng`, already reset
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            score: 0,
            rng,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
        };
        state.start_episode();
        state
    }

    /// Start from an explicit position with score 0 (no tiles are spawned)
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            score: 0,
            rng,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
        }
    }

    /// Clear the board and score, then spawn the two opening tiles
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start_episode();
    }

    fn start_episode(&mut self) {
        self.score = 0;
        self.moves = 0;
        self.board.clear();
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        self.last_spawn = None;
    }

    /// Apply a move.
    ///
    /// Returns the position of the newly spawned tile, or `None` when the
    /// direction is `MoveDirection::None` or would not change the board. In
    /// that case score and board are untouched.
    pub fn apply_move(&mut self, dir: MoveDirection) -> Option<TilePos> {
        if !self.can_move(dir) {
            return None;
        }

        let outcome = self.board.shift(dir);
        debug_assert!(outcome.changed, "legal move left the board unchanged");

        self.score = self.score.saturating_add(outcome.points);
        self.moves += 1;
        self.spawn_tile()
    }

    /// Whether `dir` would change the board. Always false for `None`.
    pub fn can_move(&self, dir: MoveDirection) -> bool {
        self.board.can_move(dir)
    }

    /// Insert a 2 (90%) or 4 (10%) into a uniformly chosen empty cell
    fn spawn_tile(&mut self) -> Option<TilePos> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        // Cell first, then value: two independent draws.
        let pick = self.rng.next_range(empty.len() as u32) as usize;
        let value = if self.rng.next_range(SPAWN_ODDS_TOTAL) < SPAWN_ODDS_TWO {
            SPAWN_TWO
        } else {
            SPAWN_FOUR
        };

        let pos = TilePos::from_index(empty[pick]);
        self.board.place(pos, value);
        self.last_spawn = Some(pos);
        Some(pos)
    }

    /// Tile value at (row, col); 0 means empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..4`.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        match self.board.get(row, col) {
            Some(v) => v,
            None => panic!(
                "tile ({}, {}) is outside the {}x{} grid",
                row, col, GRID_SIZE, GRID_SIZE
            ),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_spawn(&self) -> Option<TilePos> {
        self.last_spawn
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Fill `out` without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_rows();
        out.score = self.score;
        out.last_spawn = self.last_spawn;
        for (slot, dir) in out.legal.iter_mut().zip(MoveDirection::ALL) {
            *slot = self.can_move(dir);
        }
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays scripted `next_range` results.
    struct Scripted(VecDeque<u32>);

    impl Scripted {
        fn new(draws: &[u32]) -> Self {
            Self(draws.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_range(&mut self, max: u32) -> u32 {
            self.0.pop_front().unwrap_or(0) % max
        }
    }

    fn count_tiles<R: RandomSource>(gs: &GameState<R>) -> usize {
        gs.board().tile_count()
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let gs = GameState::new(12345);
        assert_eq!(count_tiles(&gs), 2);
        assert_eq!(gs.score(), 0);
        assert_eq!(gs.episode_id(), 0);
        assert_eq!(gs.last_spawn(), None);
        for &v in gs.board().cells() {
            assert!(v == 0 || v == 2 || v == 4);
        }
    }

    #[test]
    fn test_scripted_reset_places_exact_tiles() {
        // 16 empty: pick 0 -> (0,0), value draw 0 -> 2.
        // 15 empty: pick 14 -> (3,3), value draw 9 -> 4.
        let gs = GameState::with_rng(Scripted::new(&[0, 0, 14, 9]));
        assert_eq!(gs.tile(0, 0), 2);
        assert_eq!(gs.tile(3, 3), 4);
        assert_eq!(count_tiles(&gs), 2);
    }

    #[test]
    fn test_scripted_move_spawns_at_predicted_cell() {
        let board = Board::from_rows([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let mut gs = GameState::with_board(board, Scripted::new(&[0, 9]));

        // After Left: row 0 = [4,0,0,0]; empty cells start at index 1.
        let spawned = gs.apply_move(MoveDirection::Left);
        assert_eq!(spawned, Some(TilePos::new(0, 1)));
        assert_eq!(gs.tile(0, 0), 4);
        assert_eq!(gs.tile(0, 1), 4);
        assert_eq!(gs.score(), 4);
        assert_eq!(gs.moves(), 1);
        assert_eq!(gs.last_spawn(), spawned);
    }

    #[test]
    fn test_none_direction_is_noop() {
        let mut gs = GameState::new(7);
        let before = *gs.board();
        assert_eq!(gs.apply_move(MoveDirection::None), None);
        assert_eq!(*gs.board(), before);
        assert_eq!(gs.score(), 0);
        assert_eq!(gs.moves(), 0);
    }

    #[test]
    fn test_illegal_move_does_not_spawn() {
        let board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut gs = GameState::with_board(board, SimpleRng::new(3));
        assert!(!gs.can_move(MoveDirection::Left));
        assert!(!gs.can_move(MoveDirection::Up));
        assert_eq!(gs.apply_move(MoveDirection::Left), None);
        assert_eq!(gs.apply_move(MoveDirection::Up), None);
        assert_eq!(*gs.board(), board);
    }

    #[test]
    fn test_reset_bumps_episode_and_clears_score() {
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut gs = GameState::with_board(board, SimpleRng::new(11));
        gs.apply_move(MoveDirection::Left);
        assert_eq!(gs.score(), 4);

        gs.reset();
        assert_eq!(gs.score(), 0);
        assert_eq!(gs.moves(), 0);
        assert_eq!(gs.episode_id(), 1);
        assert_eq!(gs.last_spawn(), None);
        assert_eq!(count_tiles(&gs), 2);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let board = Board::from_rows([
            [2, 4, 8, 16],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ]);
        let gs = GameState::with_board(board, SimpleRng::new(1));
        let snap = gs.snapshot();
        assert_eq!(snap.board, board.to_rows());
        assert_eq!(snap.max_tile, 128);
        assert!(!snap.has_legal_move());
    }

    #[test]
    #[should_panic]
    fn test_tile_out_of_range_panics() {
        let gs = GameState::new(1);
        let _ = gs.tile(4, 0);
    }
}
