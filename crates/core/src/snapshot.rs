use crate::types::{MoveDirection, TilePos, GRID_SIZE};

/// Read-only copy of everything a front end needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    /// Most recently spawned tile, for highlighting
    pub last_spawn: Option<TilePos>,
    /// `can_move` results, indexed like [`MoveDirection::ALL`]
    pub legal: [bool; 4],
    pub episode_id: u32,
    pub moves: u32,
    pub max_tile: u32,
}

impl GameSnapshot {
    pub fn is_legal(&self, dir: MoveDirection) -> bool {
        dir.ordinal().map(|i| self.legal[i]).unwrap_or(false)
    }

    /// False once no direction can change the board
    pub fn has_legal_move(&self) -> bool {
        self.legal.iter().any(|&ok| ok)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            last_spawn: None,
            legal: [false; 4],
            episode_id: 0,
            moves: 0,
            max_tile: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_lookup_by_direction() {
        let mut snap = GameSnapshot::default();
        assert!(!snap.has_legal_move());

        snap.legal = [false, false, true, false];
        assert!(snap.has_legal_move());
        assert!(snap.is_legal(MoveDirection::Left));
        assert!(!snap.is_legal(MoveDirection::Right));
        assert!(!snap.is_legal(MoveDirection::None));
    }
}
