//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and renders from the observer-facing snapshot
//! only, so it can be unit-tested and never reaches into live game state.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{CELL_SIZE, GRID_COLS, GRID_ROWS};

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

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

// Colors from the classic look: green snake, red food, black field.
const SNAKE_COLOR: Rgb = Rgb::new(0, 255, 0);
const FOOD_COLOR: Rgb = Rgb::new(255, 0, 0);
const FIELD_BG: Rgb = Rgb::new(0, 0, 0);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = (GRID_COLS as u16) * self.cell_w;
        let field_h = (GRID_ROWS as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        // Center the framed field in the viewport.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field = GlyphStyle {
            fg: Rgb::new(60, 60, 60),
            bg: FIELD_BG,
            bold: false,
        };
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Food first so the head visibly covers it on the eating frame.
        let food_style = GlyphStyle {
            fg: FOOD_COLOR,
            bg: FIELD_BG,
            bold: true,
        };
        let (fx, fy) = grid_pos(snap.food.x, snap.food.y);
        self.fill_cell_rect(&mut fb, start_x, start_y, fx, fy, '●', food_style);

        // Snake, tail to head so the head wins any overlap.
        for (i, cell) in snap.snake.iter().enumerate().rev() {
            let head = i == 0;
            let style = GlyphStyle {
                fg: SNAKE_COLOR,
                bg: FIELD_BG,
                bold: head,
            };
            let (cx, cy) = grid_pos(cell.x, cell.y);
            // An out-of-bounds head (the game-over frame) is simply clipped.
            self.fill_cell_rect(&mut fb, start_x, start_y, cx, cy, '█', style);
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
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

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: GlyphStyle,
    ) {
        if cell_x < 0 || cell_x >= GRID_COLS || cell_y < 0 || cell_y >= GRID_ROWS {
            return;
        }
        let px = start_x + 1 + (cell_x as u16) * self.cell_w;
        let py = start_y + 1 + (cell_y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
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
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.snake.len()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HEADING", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.direction.as_str(), value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle {
            fg: Rgb::new(255, 0, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Convert field coordinates (multiples of `CELL_SIZE`) to grid indices.
fn grid_pos(x: i32, y: i32) -> (i32, i32) {
    (x / CELL_SIZE, y / CELL_SIZE)
}
