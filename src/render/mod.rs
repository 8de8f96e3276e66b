//! Scene drawing onto the half-block pixel buffer.

pub mod font;
pub mod palette;
pub mod pixel_buf;
pub mod sprites;

use std::io::{self, Write};

use crate::constants::*;
use crate::state::GameState;
use palette::*;
pub use pixel_buf::{Canvas, PixelBuf, Viewport};
use sprites::BirdFrame;

/// A logical-canvas rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

pub const GAME_OVER_PANEL: Rect = Rect {
    x: 90.0,
    y: 190.0,
    w: 300.0,
    h: 250.0,
};

pub const RESTART_BUTTON: Rect = Rect {
    x: 160.0,
    y: 370.0,
    w: 160.0,
    h: 50.0,
};

pub struct Renderer {
    buf: PixelBuf,
}

impl Renderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::for_terminal(cols, rows),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.buf.resize(cols as usize, rows as usize * 2);
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::fit(self.buf.width(), self.buf.height())
    }

    pub fn buffer(&self) -> &PixelBuf {
        &self.buf
    }

    /// Redraw the whole scene. Does nothing on an empty surface.
    pub fn draw(&mut self, s: &GameState) {
        if self.buf.is_empty() {
            return;
        }
        self.buf.clear(LETTERBOX);
        let mut canvas = Canvas::new(&mut self.buf);
        if canvas.vp.scale <= 0.0 {
            return;
        }

        draw_background(&mut canvas);
        // After a game over the last frame stays behind the panel.
        if !s.is_idle() {
            draw_bird(&mut canvas, s);
            draw_pipes(&mut canvas, s);
        }
        draw_ground(&mut canvas, s.ground_x);

        if s.is_idle() {
            draw_message(&mut canvas);
        }
        if s.is_running {
            draw_score(&mut canvas, s.score);
        }
        if s.is_over {
            draw_game_over(&mut canvas, s);
        }
    }

    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        self.buf.render(out)
    }
}

/// Glyph dot size that keeps text readable at any scale.
fn text_size(canvas: &Canvas) -> i32 {
    ((canvas.vp.scale * 4.0).round() as i32).max(1)
}

fn draw_background(canvas: &mut Canvas) {
    canvas.paint(0.0, 0.0, CANVAS_W, GROUND_Y, |x, y| {
        Some(sprites::background_texel(x, y, GROUND_Y))
    });
}

fn draw_ground(canvas: &mut Canvas, ground_x: f64) {
    for tile in 0..2 {
        let tx = ground_x + tile as f64 * GROUND_TILE_W;
        canvas.paint(tx, GROUND_Y, GROUND_TILE_W, GROUND_TILE_H, |x, y| {
            Some(sprites::ground_texel(x - tx, y - GROUND_Y))
        });
    }
}

fn draw_bird(canvas: &mut Canvas, s: &GameState) {
    let frame = BirdFrame::for_velocity(s.velocity);
    let angle = s.velocity / -15.0;
    let centre = (BIRD_X + BIRD_W / 2.0, s.position + BIRD_H / 2.0);
    let r = (BIRD_W * BIRD_W + BIRD_H * BIRD_H).sqrt() / 2.0;
    canvas.paint(centre.0 - r, centre.1 - r, r * 2.0, r * 2.0, |x, y| {
        sprites::rotated_bird_texel(frame, centre, (BIRD_W, BIRD_H), angle, (x, y))
    });
}

/// Screen-space top edge of the bottom pipe for a gap offset.
pub fn bottom_pipe_top(gap: f64) -> f64 {
    PIPE_SCALE * (PIPE_SPRITE_H - 20.0 - gap)
}

/// Screen-space bottom edge of the top pipe for a gap offset.
pub fn top_pipe_bottom(gap: f64) -> f64 {
    PIPE_SCALE * (PIPE_SPRITE_H / 2.0 + 35.0 - gap)
}

fn draw_pipes(canvas: &mut Canvas, s: &GameState) {
    if s.pipe1_visible() {
        draw_pipe_pair(canvas, s.pipe1_x, s.pipe1_gap);
    }
    if s.pipe2_visible() {
        draw_pipe_pair(canvas, s.pipe2_x, s.pipe2_gap);
    }
}

fn draw_pipe_pair(canvas: &mut Canvas, pipe_x: f64, gap: f64) {
    let x = pipe_x * PIPE_SCALE;
    let w = PIPE_SPRITE_W * PIPE_SCALE;
    let h = PIPE_SPRITE_H * PIPE_SCALE;
    let inset = 3.0 * PIPE_SCALE;
    let cap_h = 24.0 * PIPE_SCALE;

    let top_bottom = top_pipe_bottom(gap);
    canvas.fill_with(x + inset, top_bottom - h, w - inset * 2.0, h - cap_h, sprites::pipe_shade);
    draw_pipe_cap(canvas, x, top_bottom - cap_h, w, cap_h);

    let bottom_top = bottom_pipe_top(gap);
    draw_pipe_cap(canvas, x, bottom_top, w, cap_h);
    canvas.fill_with(x + inset, bottom_top + cap_h, w - inset * 2.0, h - cap_h, sprites::pipe_shade);
}

fn draw_pipe_cap(canvas: &mut Canvas, x: f64, y: f64, w: f64, h: f64) {
    canvas.fill_with(x, y, w, h, sprites::pipe_shade);
    let edge = 3.0;
    canvas.fill(x, y, w, edge, CAP_DARK);
    canvas.fill(x, y + h - edge, w, edge, CAP_DARK);
}

fn draw_message(canvas: &mut Canvas) {
    let x = MESSAGE_X * MESSAGE_SCALE;
    let y = MESSAGE_Y * MESSAGE_SCALE;
    let w = MESSAGE_W * MESSAGE_SCALE;
    let h = MESSAGE_H * MESSAGE_SCALE;
    let size = text_size(canvas);
    let (cx, ty) = canvas.px(x + w / 2.0, y);
    font::draw_text(canvas.buf, cx, ty, "GET READY", size, TITLE);

    // Resting bird between the title and the hint
    let bird_y = y + h * 0.4;
    let bird_x = x + (w - BIRD_W) / 2.0;
    canvas.paint(bird_x, bird_y, BIRD_W, BIRD_H, |px, py| {
        sprites::bird_texel(BirdFrame::Mid, (px - bird_x) / BIRD_W, (py - bird_y) / BIRD_H)
    });

    let (_, hy) = canvas.px(0.0, y + h * 0.75);
    font::draw_text(canvas.buf, cx, hy, "TAP", size, WHITE);
}

fn draw_score(canvas: &mut Canvas, score: u32) {
    let size = text_size(canvas) * 2;
    let (cx, y) = canvas.px(CANVAS_W / 2.0, 40.0);
    font::draw_number(canvas.buf, cx, y, score, size, WHITE);
}

fn draw_game_over(canvas: &mut Canvas, s: &GameState) {
    canvas.buf.dim_all();
    let size = text_size(canvas);
    let line = 7 * size;

    let (cx, title_y) = canvas.px(CANVAS_W / 2.0, GAME_OVER_PANEL.y - 60.0);
    font::draw_text(canvas.buf, cx, title_y, "GAME OVER", size * 2, TITLE);

    let p = GAME_OVER_PANEL;
    canvas.fill(p.x - 4.0, p.y - 4.0, p.w + 8.0, p.h + 8.0, PANEL_EDGE);
    canvas.fill(p.x, p.y, p.w, p.h, PANEL);

    let (_, y) = canvas.px(0.0, p.y + 20.0);
    font::draw_text(canvas.buf, cx, y, "SCORE", size, WHITE);
    font::draw_number(canvas.buf, cx, y + line, s.score, size, WHITE);
    font::draw_text(canvas.buf, cx, y + line * 2 + size * 2, "BEST", size, WHITE);
    font::draw_number(canvas.buf, cx, y + line * 3 + size * 2, s.best, size, BIRD_Y);

    let b = RESTART_BUTTON;
    canvas.fill(b.x, b.y, b.w, b.h, BUTTON);
    canvas.fill(b.x, b.y, b.w, 6.0, BUTTON_HI);
    let (_, by) = canvas.px(0.0, b.y + b.h / 2.0);
    font::draw_text(canvas.buf, cx, by - 5 * size / 2, "RESTART", size, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> GameState {
        let mut s = GameState::new(0);
        s.is_running = true;
        s
    }

    #[test]
    fn pipe_edges_line_up_with_collision_thresholds() {
        // Bird is BIRD_H tall and hits when its top passes these lines
        for gap in [0.0, 75.0, 149.0] {
            assert_eq!(bottom_pipe_top(gap) - BIRD_H, crate::collision::lower_threshold(gap));
            assert!((top_pipe_bottom(gap) - crate::collision::upper_threshold(gap)).abs() <= 2.5);
        }
    }

    #[test]
    fn empty_surface_is_a_no_op() {
        let mut r = Renderer::new(0, 0);
        r.draw(&running_state());
        let mut out = Vec::new();
        r.present(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn bird_is_drawn_while_running() {
        let mut r = Renderer::new(96, 64);
        let s = running_state();
        r.draw(&s);
        let vp = r.viewport();
        let (px, py) = vp.to_px(BIRD_X + BIRD_W / 2.0, s.position + BIRD_H * 0.8);
        let c = r.buffer().get(px as usize, py as usize);
        assert!(matches!(c, BIRD_Y | BIRD_HI | BIRD_WING | BIRD_WING_HI));
    }

    #[test]
    fn game_over_dims_the_scene() {
        let mut r = Renderer::new(96, 64);
        let mut s = GameState::new(0);
        r.draw(&s);
        let before = r.buffer().get(0, 0);
        s.is_over = true;
        r.draw(&s);
        let after = r.buffer().get(0, 0);
        assert_eq!(after, before.dim());
    }

    /// 480x640 pixels, so logical and pixel coordinates coincide.
    fn full_size() -> Renderer {
        Renderer::new(480, 320)
    }

    fn is_bird_colour(c: Rgb) -> bool {
        matches!(c, BIRD_Y | BIRD_HI | BIRD_WING | BIRD_WING_HI | BIRD_EYE | BIRD_BEAK | BIRD_BEAK_HI)
    }

    fn count(r: &Renderer, (x0, y0, x1, y1): (usize, usize, usize, usize), pred: impl Fn(Rgb) -> bool) -> usize {
        let mut n = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                if pred(r.buffer().get(x, y)) {
                    n += 1;
                }
            }
        }
        n
    }

    fn whole(r: &Renderer) -> (usize, usize, usize, usize) {
        (0, 0, r.buffer().width(), r.buffer().height())
    }

    #[test]
    fn idle_screen_shows_message_only() {
        let mut r = full_size();
        r.draw(&GameState::new(0));

        // "GET READY": top row of the G at 4px per dot, centred on x = 240
        assert_eq!(r.buffer().get(175, 126), TITLE);
        // Resting bird in the middle of the overlay
        assert_eq!(r.buffer().get(240, 286), BIRD_Y);
        // No playfield bird, no pipes, no score
        let bird_box = (180, 300, 235, 336);
        assert_eq!(count(&r, bird_box, is_bird_colour), 0);
        assert_eq!(count(&r, whole(&r), |c| c == CAP_DARK), 0);
        assert_ne!(r.buffer().get(240, 44), WHITE);
    }

    #[test]
    fn running_screen_shows_score_and_no_message() {
        let mut r = full_size();
        let mut s = running_state();
        s.score = 7;
        r.draw(&s);

        // Top bar of the 7 at 8px per dot, centred on x = 240
        assert_eq!(r.buffer().get(240, 44), WHITE);
        assert_eq!(r.buffer().get(229, 44), WHITE);
        assert_ne!(r.buffer().get(175, 126), TITLE);
        assert!(count(&r, (180, 300, 235, 336), is_bird_colour) > 0);
    }

    #[test]
    fn game_over_hides_score() {
        let mut r = full_size();
        let mut s = GameState::new(0);
        s.score = 7;
        s.is_over = true;
        r.draw(&s);
        assert_ne!(r.buffer().get(240, 44), WHITE);
        assert_eq!(r.buffer().get(200, 380), BUTTON);
    }

    #[test]
    fn visible_pipe_draws_caps_at_the_gap() {
        let mut r = full_size();
        let mut s = running_state();
        s.pipe1_x = 200.0;
        s.pipe1_gap = 0.0;
        r.draw(&s);
        // Bottom cap top edge at y = 450, pipe spans x = 300..378
        assert_eq!(r.buffer().get(330, 451), CAP_DARK);
        // Top pipe's cap ends at y = 292.5
        assert_eq!(r.buffer().get(330, 291), CAP_DARK);
    }

    #[test]
    fn second_pipe_waits_until_first_passes_350() {
        let mut r = full_size();
        let mut s = running_state();
        s.pipe1_x = 400.0;
        s.pipe2_x = 300.0;
        s.pipe2_gap = 0.0;
        assert!(!s.pipe2_visible());
        r.draw(&s);
        assert_eq!(count(&r, whole(&r), |c| c == CAP_DARK), 0);

        s.pipe1_x = 349.0;
        assert!(s.pipe2_visible());
        r.draw(&s);
        // Pipe 2 spans x = 450..528, clipped at the canvas edge
        assert_eq!(r.buffer().get(460, 451), CAP_DARK);
    }

    #[test]
    fn restart_button_sits_inside_panel() {
        let p = GAME_OVER_PANEL;
        let b = RESTART_BUTTON;
        assert!(p.contains(b.x, b.y));
        assert!(p.contains(b.x + b.w - 1.0, b.y + b.h - 1.0));
    }
}
