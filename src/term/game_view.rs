//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Pos;

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

/// Width of the score panel to the right of the board, in columns.
const PANEL_W: u16 = 16;

/// A lightweight terminal view for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns; 2 compensates for the typical
    /// terminal glyph aspect ratio.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Total columns and rows the view needs for a given board.
    pub fn required_size(&self, snapshot: &SessionSnapshot<'_>) -> (u16, u16) {
        let cols = (snapshot.screen_width / snapshot.grid_size) as u16;
        let rows = (snapshot.screen_height / snapshot.grid_size) as u16;
        // The side panel needs ten rows even when the board is shorter.
        (cols * self.cell_w + 2 + PANEL_W, (rows + 2).max(10))
    }

    /// Render the snapshot into a fresh framebuffer.
    pub fn render(&self, snapshot: &SessionSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snapshot, &mut fb);
        fb
    }

    /// Render the snapshot, reusing the caller's framebuffer.
    pub fn render_into(&self, snapshot: &SessionSnapshot<'_>, fb: &mut FrameBuffer) {
        fb.clear();

        let cols = (snapshot.screen_width / snapshot.grid_size) as u16;
        let rows = (snapshot.screen_height / snapshot.grid_size) as u16;
        let frame_w = cols * self.cell_w + 2;
        let frame_h = rows + 2;
        let (total_w, total_h) = self.required_size(snapshot);

        let start_x = fb.width().saturating_sub(total_w) / 2;
        let start_y = fb.height().saturating_sub(total_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let body_style = CellStyle::new(Rgb::new(0, 200, 0), Rgb::new(0, 0, 0));
        let head_style = CellStyle::new(Rgb::new(80, 255, 80), Rgb::new(0, 0, 0)).bold();
        let food_style = CellStyle::new(Rgb::new(255, 60, 60), Rgb::new(0, 0, 0)).bold();
        let obstacle_style = CellStyle::new(Rgb::new(139, 69, 19), Rgb::new(0, 0, 0));

        for &p in snapshot.obstacles {
            self.draw_cell(fb, snapshot, start_x, start_y, p, '▓', obstacle_style);
        }

        self.draw_cell(fb, snapshot, start_x, start_y, snapshot.food, '●', food_style);

        for (i, &p) in snapshot.body.iter().enumerate() {
            let style = if i == 0 { head_style } else { body_style };
            self.draw_cell(fb, snapshot, start_x, start_y, p, '█', style);
        }

        self.draw_panel(fb, snapshot, start_x + frame_w + 2, start_y + 1);

        if snapshot.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &SessionSnapshot<'_>,
        start_x: u16,
        start_y: u16,
        p: Pos,
        ch: char,
        style: CellStyle,
    ) {
        // Positions outside the board (a head that just left it) are skipped.
        if p.x < 0 || p.x >= snapshot.screen_width || p.y < 0 || p.y >= snapshot.screen_height {
            return;
        }
        let cell_x = (p.x / snapshot.grid_size) as u16;
        let cell_y = (p.y / snapshot.grid_size) as u16;
        let x = start_x + 1 + cell_x * self.cell_w;
        let y = start_y + 1 + cell_y;
        for dx in 0..self.cell_w {
            fb.put_char(x + dx, y, ch, style);
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snapshot: &SessionSnapshot<'_>, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));
        let value = CellStyle::default().bold();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snapshot.score.to_string(), value);
        fb.put_str(x, y + 3, "HIGH SCORE", label);
        fb.put_str(x, y + 4, &snapshot.high_score.to_string(), value);
        fb.put_str(x, y + 6, "LEVEL", label);
        fb.put_str(x, y + 7, &snapshot.difficulty_level.to_string(), value);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let title = CellStyle::new(Rgb::new(255, 60, 60), Rgb::new(0, 0, 0)).bold();
        let hint = CellStyle::default();

        let msg = "GAME OVER";
        let prompt = "R: restart  Q: quit";

        let cy = y + h / 2;
        let msg_x = x + (w.saturating_sub(msg.len() as u16)) / 2;
        let prompt_x = x + (w.saturating_sub(prompt.len() as u16)) / 2;
        fb.put_str(msg_x, cy.saturating_sub(1), msg, title);
        fb.put_str(prompt_x, cy + 1, prompt, hint);
    }
}
