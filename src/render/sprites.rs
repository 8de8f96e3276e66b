//! Procedural sprite set: background, ground tile, pipe, message overlay and
//! three bird frames. Texel functions take coordinates relative to the sprite.

use super::palette::*;
use crate::constants::BIRD_DOWNFLAP_ABOVE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdFrame {
    Up,
    Mid,
    Down,
}

impl BirdFrame {
    pub fn for_velocity(v: f64) -> Self {
        if v > BIRD_DOWNFLAP_ABOVE {
            BirdFrame::Down
        } else if v > 0.0 && v < BIRD_DOWNFLAP_ABOVE {
            BirdFrame::Mid
        } else {
            BirdFrame::Up
        }
    }

    fn wing_v(self) -> f64 {
        match self {
            BirdFrame::Up => 0.38,
            BirdFrame::Mid => 0.55,
            BirdFrame::Down => 0.72,
        }
    }
}

fn in_ellipse(u: f64, v: f64, cu: f64, cv: f64, ru: f64, rv: f64) -> bool {
    let du = (u - cu) / ru;
    let dv = (v - cv) / rv;
    du * du + dv * dv <= 1.0
}

/// Bird texel at unit coordinates `(u, v)`, both in `0..1`, facing right.
pub fn bird_texel(frame: BirdFrame, u: f64, v: f64) -> Option<Rgb> {
    if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
        return None;
    }
    // Beak
    if (0.72..1.0).contains(&u) && (0.48..0.78).contains(&v) {
        return Some(if v < 0.62 { BIRD_BEAK_HI } else { BIRD_BEAK });
    }
    // Eye
    if in_ellipse(u, v, 0.68, 0.3, 0.13, 0.2) {
        return Some(if in_ellipse(u, v, 0.74, 0.33, 0.045, 0.08) {
            BIRD_PUPIL
        } else {
            BIRD_EYE
        });
    }
    // Wing
    if in_ellipse(u, v, 0.26, frame.wing_v(), 0.2, 0.16) {
        return Some(if v < frame.wing_v() { BIRD_WING_HI } else { BIRD_WING });
    }
    if in_ellipse(u, v, 0.46, 0.54, 0.44, 0.46) {
        return Some(if v < 0.3 { BIRD_HI } else { BIRD_Y });
    }
    None
}

/// Bird texel for a logical point, given the sprite box centre, size and
/// rotation in radians (positive turns clockwise on screen).
pub fn rotated_bird_texel(
    frame: BirdFrame,
    (cx, cy): (f64, f64),
    (w, h): (f64, f64),
    angle: f64,
    (x, y): (f64, f64),
) -> Option<Rgb> {
    let (sin, cos) = angle.sin_cos();
    let dx = x - cx;
    let dy = y - cy;
    let lx = dx * cos + dy * sin;
    let ly = -dx * sin + dy * cos;
    bird_texel(frame, lx / w + 0.5, ly / h + 0.5)
}

pub fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x.clamp(0, total_w - 1) as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

/// Ground tile texel; `u` is measured from the tile's left edge, `v` from its top.
pub fn ground_texel(u: f64, v: f64) -> Rgb {
    if v < 4.0 {
        return GRASS;
    }
    if v < 14.0 {
        return if (u / 12.0).floor() as i64 % 2 == 0 { GRASS_LIGHT } else { GRASS };
    }
    if v < 18.0 {
        return GRASS;
    }
    let stripe = ((u + v * 2.0) as i64).rem_euclid(24) < 12;
    if stripe { DIRT } else { DIRT_DARK }
}

/// Static backdrop texel at a logical canvas point; `horizon` is the ground top.
pub fn background_texel(x: f64, y: f64, horizon: f64) -> Rgb {
    let bush_top = horizon - 30.0 - ((x * 0.09).sin() * 6.0 + (x * 0.23).sin() * 3.0);
    if y >= bush_top {
        return BUSH;
    }
    let city_top = horizon - 90.0 + if (x / 40.0).floor() as i64 % 3 == 0 { -25.0 } else { 0.0 };
    if y >= city_top {
        let window = (x as i64).rem_euclid(12) < 5 && (y as i64).rem_euclid(14) < 6;
        return if window { CITY_WINDOW } else { CITY };
    }
    let cloud_top = horizon - 130.0 - ((x * 0.05).sin() * 12.0 + (x * 0.13).sin() * 6.0);
    if y >= cloud_top {
        return CLOUD;
    }
    let t = ((y / horizon).clamp(0.0, 1.0) * 256.0) as u16;
    Rgb::lerp(SKY_TOP, SKY_BOT, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_follows_velocity() {
        assert_eq!(BirdFrame::for_velocity(10.0), BirdFrame::Down);
        assert_eq!(BirdFrame::for_velocity(3.0), BirdFrame::Mid);
        assert_eq!(BirdFrame::for_velocity(7.0), BirdFrame::Up);
        assert_eq!(BirdFrame::for_velocity(0.0), BirdFrame::Up);
        assert_eq!(BirdFrame::for_velocity(-12.0), BirdFrame::Up);
    }

    #[test]
    fn bird_has_body_eye_and_transparent_corners() {
        assert_eq!(bird_texel(BirdFrame::Mid, 0.5, 0.8), Some(BIRD_Y));
        assert_eq!(bird_texel(BirdFrame::Mid, 0.68, 0.22), Some(BIRD_EYE));
        assert_eq!(bird_texel(BirdFrame::Mid, 0.01, 0.01), None);
        assert_eq!(bird_texel(BirdFrame::Mid, 1.2, 0.5), None);
    }

    #[test]
    fn wing_moves_between_frames() {
        let up = bird_texel(BirdFrame::Up, 0.26, 0.3);
        let down = bird_texel(BirdFrame::Down, 0.26, 0.3);
        assert_ne!(up, down);
    }

    #[test]
    fn unrotated_bird_matches_texel() {
        let t = rotated_bird_texel(BirdFrame::Mid, (50.0, 50.0), (100.0, 100.0), 0.0, (68.0, 22.0));
        assert_eq!(t, bird_texel(BirdFrame::Mid, 0.68, 0.22));
    }

    #[test]
    fn pipe_edges_are_darker_than_highlight() {
        let edge = pipe_shade(0, 20);
        let mid = pipe_shade(7, 20);
        assert_eq!(edge, PIPE_L);
        assert!(mid.1 > edge.1);
    }

    #[test]
    fn ground_starts_with_grass() {
        assert_eq!(ground_texel(5.0, 0.0), GRASS);
        assert!(matches!(ground_texel(5.0, 40.0), DIRT | DIRT_DARK));
    }
}
