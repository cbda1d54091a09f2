//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{tile_tier, TilePos, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Narrowest tile that still fits the largest reachable value bracketed: `[131072]`.
pub const MIN_CELL_WIDTH: u16 = 8;

/// Widest tile accepted; wider requests are narrowed to this.
pub const MAX_CELL_WIDTH: u16 = 32;

/// Tallest tile accepted.
pub const MAX_CELL_HEIGHT: u16 = 16;

/// Values are right-aligned in at least this many columns.
const VALUE_FIELD: u16 = 4;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Text colours per tile tier (<=4, <=16, <=64, <=256, larger).
const TIER_FG: [Rgb; 5] = [
    Rgb::new(230, 80, 80),
    Rgb::new(100, 220, 120),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(80, 220, 220),
];

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: MIN_CELL_WIDTH,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Tile size is clamped to `MIN_CELL_WIDTH..=MAX_CELL_WIDTH` columns
    /// and `1..=MAX_CELL_HEIGHT` rows.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH),
            cell_h: cell_h.clamp(1, MAX_CELL_HEIGHT),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the board frame, grid lines included.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let span = |cell: u16| n.saturating_mul(cell).saturating_add(n + 1);
        (span(self.cell_w), span(self.cell_h))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_grid_lines(fb, start_x, start_y, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = snap.board[row][col];
                let newest = snap.last_spawn == Some(TilePos::new(row as u8, col as u8));
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value, newest);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if !snap.has_legal_move() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", 0);
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "r: restart", 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid_lines(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let (w, h) = self.frame_size();
        let step_x = self.cell_w + 1;
        let step_y = self.cell_h + 1;
        let n = GRID_SIZE as u16;

        for line in 0..=n {
            let ly = y + line * step_y;
            for dx in 0..w {
                fb.put_char(x + dx, ly, '─', style);
            }
            let lx = x + line * step_x;
            for dy in 0..h {
                fb.put_char(lx, y + dy, '│', style);
            }
        }

        for i in 0..=n {
            for j in 0..=n {
                fb.put_char(x + j * step_x, y + i * step_y, junction(i, j, n), style);
            }
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
        newest: bool,
    ) {
        let px = start_x + 1 + col * (self.cell_w + 1);
        let py = start_y + 1 + row * (self.cell_h + 1);
        let mid_y = py + self.cell_h / 2;

        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', empty);

        if value == 0 {
            fb.put_char(px + self.cell_w / 2, mid_y, '·', empty);
            return;
        }

        let style = CellStyle::new(TIER_FG[tile_tier(value) as usize], BOARD_BG).bold();
        // `[` + value field + `]`, centered in the tile.
        let field = decimal_digits(value).max(VALUE_FIELD);
        let field_x = px + self.cell_w.saturating_sub(field + 2) / 2;
        if newest {
            fb.put_char(field_x, mid_y, '[', style);
            fb.put_char(field_x + field + 1, mid_y, ']', style);
        }
        fb.put_u32_right(field_x + 1, mid_y, field, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MAX TILE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        if panel_w >= 14 {
            for line in ["arrows: move", "r: restart", "q: quit"] {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line, hint);
                y = y.saturating_add(1);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
        line: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn decimal_digits(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

/// Box-drawing char where grid line `i` (horizontal) meets line `j` (vertical).
fn junction(i: u16, j: u16, n: u16) -> char {
    match (i == 0, i == n, j == 0, j == n) {
        (true, _, true, _) => '┌',
        (true, _, _, true) => '┐',
        (_, true, true, _) => '└',
        (_, true, _, true) => '┘',
        (true, _, _, _) => '┬',
        (_, true, _, _) => '┴',
        (_, _, true, _) => '├',
        (_, _, _, true) => '┤',
        _ => '┼',
    }
}
