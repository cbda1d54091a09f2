//! Board module - manages the 4x4 tile grid
//!
//! The board is a 4x4 grid where each cell is `0` (empty) or a power-of-two tile.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).
//!
//! All four move directions share one traversal: a direction picks an axis and
//! a target edge, and each of the four lanes along that axis is read into a
//! `[u32; 4]` ordered from the target edge outward. Compaction and merging only
//! ever see that normalized lane.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Axis, MoveDirection, TilePos, CELL_COUNT, GRID_SIZE};

/// One row or column, ordered from the target edge outward
pub type Lane = [u32; GRID_SIZE];

/// Result of sliding a single lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaneOutcome {
    /// Sum of the values produced by merges
    pub points: u32,
    /// Number of merges performed
    pub merges: u32,
}

/// Result of shifting the whole board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftOutcome {
    pub points: u32,
    pub merges: u32,
    /// Whether any cell changed
    pub changed: bool,
}

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of tile values, row-major order (row * GRID_SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Create from rows (top to bottom)
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut cells = [0; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            cells[row * GRID_SIZE..(row + 1) * GRID_SIZE].copy_from_slice(values);
        }
        Self { cells }
    }

    /// Convert to rows (top to bottom)
    pub fn to_rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, out) in rows.iter_mut().enumerate() {
            out.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        }
        rows
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get tile value at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile value at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Flat indices of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Place a tile into an empty cell.
    /// Returns false if the cell is occupied.
    pub fn place(&mut self, pos: TilePos, value: u32) -> bool {
        let idx = pos.index();
        if idx >= CELL_COUNT || self.cells[idx] != 0 {
            return false;
        }
        self.cells[idx] = value;
        true
    }

    /// Whether shifting in `dir` would change the board.
    ///
    /// True iff some adjacent pair along the movement axis is either an empty
    /// cell (nearer the target edge) followed by a tile, or two equal tiles.
    pub fn can_move(&self, dir: MoveDirection) -> bool {
        let Some((axis, reversed)) = dir.traversal() else {
            return false;
        };

        (0..GRID_SIZE).any(|lane| {
            let l = self.read_lane(lane_indices(axis, reversed, lane));
            l.windows(2).any(|pair| {
                let (lead, trail) = (pair[0], pair[1]);
                (lead == 0 && trail != 0) || (lead != 0 && lead == trail)
            })
        })
    }

    /// Slide and merge every lane toward the edge named by `dir`.
    ///
    /// `MoveDirection::None` leaves the board untouched.
    pub fn shift(&mut self, dir: MoveDirection) -> ShiftOutcome {
        let mut outcome = ShiftOutcome::default();
        let Some((axis, reversed)) = dir.traversal() else {
            return outcome;
        };

        for lane in 0..GRID_SIZE {
            let indices = lane_indices(axis, reversed, lane);
            let before = self.read_lane(indices);
            let mut after = before;
            let lane_outcome = slide_lane(&mut after);

            if after != before {
                outcome.changed = true;
                self.write_lane(indices, &after);
            }
            outcome.points += lane_outcome.points;
            outcome.merges += lane_outcome.merges;
        }

        outcome
    }

    #[inline(always)]
    fn read_lane(&self, indices: [usize; GRID_SIZE]) -> Lane {
        indices.map(|i| self.cells[i])
    }

    #[inline(always)]
    fn write_lane(&mut self, indices: [usize; GRID_SIZE], lane: &Lane) {
        for (&i, &v) in indices.iter().zip(lane.iter()) {
            self.cells[i] = v;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            for (col, v) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>5}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Flat cell indices of one lane, ordered from the target edge outward.
///
/// `axis` selects rows (horizontal moves) or columns (vertical moves);
/// `reversed` puts the target edge at index 3 instead of index 0.
pub fn lane_indices(axis: Axis, reversed: bool, lane: usize) -> [usize; GRID_SIZE] {
    let mut out = [0; GRID_SIZE];
    for (k, slot) in out.iter_mut().enumerate() {
        let along = if reversed { GRID_SIZE - 1 - k } else { k };
        let (row, col) = match axis {
            Axis::Horizontal => (lane, along),
            Axis::Vertical => (along, lane),
        };
        *slot = row * GRID_SIZE + col;
    }
    out
}

/// Slide tiles toward index 0, closing gaps and preserving order
pub fn compact_lane(lane: &mut Lane) {
    let mut write = 0;
    for read in 0..GRID_SIZE {
        if lane[read] != 0 {
            if write != read {
                lane[write] = lane[read];
                lane[read] = 0;
            }
            write += 1;
        }
    }
}

/// Merge equal neighbours of a compacted lane, scanning from index 0.
///
/// A merged pair is skipped as a whole, so a freshly produced tile never
/// merges again in the same pass. Leaves gaps behind; compact afterwards.
pub fn merge_lane(lane: &mut Lane) -> LaneOutcome {
    let mut outcome = LaneOutcome::default();
    let mut k = 0;
    while k + 1 < GRID_SIZE {
        if lane[k] != 0 && lane[k] == lane[k + 1] {
            lane[k] += lane[k + 1];
            lane[k + 1] = 0;
            outcome.points += lane[k];
            outcome.merges += 1;
            k += 2;
        } else {
            k += 1;
        }
    }
    outcome
}

/// Full move on one lane: compact, merge, compact again
pub fn slide_lane(lane: &mut Lane) -> LaneOutcome {
    compact_lane(lane);
    let outcome = merge_lane(lane);
    compact_lane(lane);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slid(mut lane: Lane) -> (Lane, LaneOutcome) {
        let outcome = slide_lane(&mut lane);
        (lane, outcome)
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 3), Some(3));
        assert_eq!(Board::index(1, 0), Some(4));
        assert_eq!(Board::index(3, 3), Some(15));
        assert_eq!(Board::index(4, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn test_lane_indices_for_each_direction() {
        // Left: row 1, read left to right.
        assert_eq!(lane_indices(Axis::Horizontal, false, 1), [4, 5, 6, 7]);
        // Right: row 1, read right to left.
        assert_eq!(lane_indices(Axis::Horizontal, true, 1), [7, 6, 5, 4]);
        // Up: column 2, read top to bottom.
        assert_eq!(lane_indices(Axis::Vertical, false, 2), [2, 6, 10, 14]);
        // Down: column 2, read bottom to top.
        assert_eq!(lane_indices(Axis::Vertical, true, 2), [14, 10, 6, 2]);
    }

    #[test]
    fn test_compact_lane_closes_gaps_in_order() {
        let mut lane = [0, 2, 0, 4];
        compact_lane(&mut lane);
        assert_eq!(lane, [2, 4, 0, 0]);

        let mut full = [2, 4, 8, 16];
        compact_lane(&mut full);
        assert_eq!(full, [2, 4, 8, 16]);
    }

    #[test]
    fn test_slide_lane_single_merge_per_tile() {
        let (lane, outcome) = slid([2, 2, 2, 2]);
        assert_eq!(lane, [4, 4, 0, 0]);
        assert_eq!(outcome, LaneOutcome { points: 8, merges: 2 });
    }

    #[test]
    fn test_slide_lane_merges_across_gaps() {
        let (lane, outcome) = slid([0, 2, 0, 2]);
        assert_eq!(lane, [4, 0, 0, 0]);
        assert_eq!(outcome.points, 4);
    }

    #[test]
    fn test_slide_lane_leading_pair_wins() {
        // Three equal tiles: the pair nearest the target edge merges.
        let (lane, _) = slid([2, 2, 2, 0]);
        assert_eq!(lane, [4, 2, 0, 0]);

        let (lane, _) = slid([4, 4, 8, 0]);
        assert_eq!(lane, [8, 8, 0, 0]);
    }

    #[test]
    fn test_slide_lane_no_merge_of_unequal() {
        let (lane, outcome) = slid([2, 4, 2, 4]);
        assert_eq!(lane, [2, 4, 2, 4]);
        assert_eq!(outcome, LaneOutcome::default());
    }

    #[test]
    fn test_shift_reports_change() {
        let mut board = Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let outcome = board.shift(MoveDirection::Right);
        assert!(!outcome.changed);

        let outcome = board.shift(MoveDirection::Left);
        assert!(outcome.changed);
        assert_eq!(board.get(0, 0), Some(2));
    }

    #[test]
    fn test_shift_none_is_noop() {
        let mut board = Board::from_rows([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let before = board;
        assert_eq!(board.shift(MoveDirection::None), ShiftOutcome::default());
        assert_eq!(board, before);
        assert!(!board.can_move(MoveDirection::None));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows([[2, 0, 2, 2], [2; 4], [2, 2, 2, 0], [2; 4]]);
        let empty = board.empty_cells();
        assert_eq!(empty.as_slice(), &[1, 11]);
        assert_eq!(board.empty_count(), 2);
        assert_eq!(board.tile_count(), 14);
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        assert!(board.place(TilePos::new(2, 1), 2));
        assert!(!board.place(TilePos::new(2, 1), 4));
        assert_eq!(board.get(2, 1), Some(2));
    }

    #[test]
    fn test_display_lists_rows() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
        let text = board.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().last().unwrap().ends_with(" 2048"));
    }
}
