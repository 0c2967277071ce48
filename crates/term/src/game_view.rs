//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);

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

/// Screen rectangle of the framed playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame_for(snap, viewport);
        let playfield = CellStyle::plain(Rgb::new(70, 70, 85), PLAYFIELD_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            playfield,
        );
        self.draw_border(fb, frame);

        for y in 0..snap.rows {
            for x in 0..snap.columns {
                match snap.cell(x, y).flatten() {
                    Some(color) => self.draw_block(fb, frame, x, y, color),
                    None if snap.fail_line == Some(y) => {
                        let line = CellStyle::plain(color_rgb(Color::Red), PLAYFIELD_BG);
                        self.fill_board_cell(fb, frame, x, y, '─', line);
                    }
                    None => {
                        self.fill_board_cell(fb, frame, x, y, '·', playfield.dim());
                    }
                }
            }
        }

        // The falling piece disappears with the end screen.
        if !snap.game_over {
            for &(x, y) in snap.active.iter() {
                if x >= 0 && y >= 0 && x < snap.columns as i16 && y < snap.rows as i16 {
                    self.draw_block(fb, frame, x as u16, y as u16, snap.active_color);
                }
            }
        }

        self.draw_score_title(fb, frame, snap.score);
        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.dim_playfield(fb, frame);
            self.draw_game_over(fb, frame, snap.score);
        } else if snap.paused {
            self.dim_playfield(fb, frame);
            self.draw_paused(fb, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let w = snap.columns.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.rows.saturating_mul(self.cell_h).saturating_add(2);
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);
        let right = f.x + f.w - 1;
        let bottom = f.y + f.h - 1;

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, color: Color) {
        let style = CellStyle::plain(color_rgb(color), PLAYFIELD_BG).bold();
        self.fill_board_cell(fb, f, x, y, '█', style);
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Score lives in the top border so it stays visible on narrow terminals.
    fn draw_score_title(&self, fb: &mut FrameBuffer, f: Frame, score: u32) {
        let style = CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold();
        let x = f.x + 2;
        fb.put_str(x, f.y, " SCORE ", style);
        fb.put_u32(x + 7, f.y, score, style);
        fb.put_char(x + 7 + digit_count(score), f.y, ' ', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 14 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);
        let hint = value.dim();

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "KEYS", label);
        y += 1;
        for line in [
            "←/→  move",
            "↑    rotate left",
            "↓    rotate right",
            "spc  drop",
            "esc  pause",
        ] {
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn dim_playfield(&self, fb: &mut FrameBuffer, f: Frame) {
        for y in f.y + 1..f.y + f.h - 1 {
            for x in f.x + 1..f.x + f.w - 1 {
                if let Some(mut cell) = fb.get(x, y) {
                    cell.style.dim = true;
                    cell.style.bold = false;
                    fb.set(x, y, cell);
                }
            }
        }
    }

    fn draw_paused(&self, fb: &mut FrameBuffer, f: Frame) {
        let mid = f.y + f.h / 2;
        let big = CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold();
        let small = CellStyle::plain(Rgb::new(220, 220, 220), BLACK);
        fb.put_str_centered(f.x, f.w, mid.saturating_sub(1), " PAUSED ", big);
        fb.put_str_centered(f.x, f.w, mid + 1, " ESC to continue ", small);
        fb.put_str_centered(f.x, f.w, mid + 2, " Q to quit ", small);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, f: Frame, score: u32) {
        let mid = f.y + f.h / 2;
        let big = CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold();
        let small = CellStyle::plain(Rgb::new(220, 220, 220), BLACK);
        fb.put_str_centered(f.x, f.w, mid.saturating_sub(1), " GAME OVER ", big);

        let text_w = 13 + digit_count(score) + 1;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid + 1, " FINAL SCORE ", small);
        fb.put_u32(x + 13, mid + 1, score, small);
        fb.put_char(x + 13 + digit_count(score), mid + 1, ' ', small);

        fb.put_str_centered(f.x, f.w, mid + 3, " Q quit / E play again ", small);
    }
}

/// Terminal color of a palette entry
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 60, 60),
        Color::Green => Rgb::new(90, 210, 110),
        Color::Blue => Rgb::new(70, 110, 230),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Magenta => Rgb::new(210, 90, 210),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Orange => Rgb::new(255, 165, 0),
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
