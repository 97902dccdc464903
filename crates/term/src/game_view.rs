//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{u32_width, CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FRAME_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile slot width in terminal columns (the last column is the gap).
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a six-digit value with a one-column gap and roughly
        // compensates for the terminal glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 1 + 2,
            GRID_SIZE as u16 * self.cell_h + (GRID_SIZE as u16 + 1) + 2,
        )
    }

    /// Top-left corner of the tile at `(row, col)` for a frame at `(start_x, start_y)`.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            start_x + 2 + col * self.cell_w,
            start_y + 2 + row * (self.cell_h + 1),
        )
    }

    /// Where the frame's top-left corner lands in `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let bg = CellStyle::new(FRAME_BG, FRAME_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (x, y) = self.tile_origin(start_x, start_y, row as u16, col as u16);
                match snap.cells[row][col] {
                    Some(tile) => self.draw_tile(fb, x, y, tile.value),
                    None => self.draw_empty_cell(fb, x, y),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if !snap.playable() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle::new(EMPTY_BG, EMPTY_BG);
        fb.fill_rect(x, y, self.cell_w - 1, self.cell_h, ' ', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let (bg, fg) = tile_colors(value);
        let style = CellStyle {
            fg,
            bg,
            bold: true,
            dim: false,
        };
        let inner_w = self.cell_w - 1;
        fb.fill_rect(x, y, inner_w, self.cell_h, ' ', style);

        let text_w = u32_width(value);
        let tx = x + inner_w.saturating_sub(text_w) / 2;
        let ty = y + self.cell_h / 2;
        fb.put_u32(tx, ty, value, style);
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
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.turn, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.highest_tile, value);
        y = y.saturating_add(2);

        if snap.won {
            let win = CellStyle {
                fg: Rgb::new(237, 194, 46),
                ..label
            };
            fb.put_str(panel_x, y, "2048!", win);
            y = y.saturating_add(2);
        }

        for help in ["arrows move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let mid_y = start_y.saturating_add(frame_h / 2);
        for (dy, text) in [(0u16, "GAME OVER"), (1, "press r to restart")] {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_sub(1) + dy, text, style);
        }
    }
}

/// Background and text color for a tile value.
fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let bg = match value {
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    (bg, fg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_matches_cell_geometry() {
        let view = GameView::default();
        // 4 tiles of 7 columns + leading gap + border; 4 rows of 3 + 5 gap rows + border.
        assert_eq!(view.frame_size(), (31, 19));
    }

    #[test]
    fn small_tiles_use_dark_text() {
        assert_eq!(tile_colors(2).1, DARK_TEXT);
        assert_eq!(tile_colors(8).1, LIGHT_TEXT);
        assert_eq!(tile_colors(4096).1, LIGHT_TEXT);
    }
}
