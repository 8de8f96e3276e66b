//! Gameplay constants, all in logical canvas units.
//!
//! Collision and scoring windows are tied to the per-tick scroll speed. Changing
//! `GRAVITY`, the pipe speed factors or the tick interval desynchronises them.

/// Logical canvas size.
pub const CANVAS_W: f64 = 480.0;
pub const CANVAS_H: f64 = 640.0;

pub const GRAVITY: f64 = 0.5;
/// Divisor applied to `GRAVITY` for the per-tick velocity decrement.
pub const GRAVITY_DIVISOR: f64 = 0.666;
/// Terminal velocity (most negative velocity the bird can reach).
pub const TERMINAL_VELOCITY: f64 = -15.0;
pub const JUMP_VELOCITY: f64 = GRAVITY * 20.0;
/// Jumps are ignored once the bird is at or above this position.
pub const JUMP_CEILING: f64 = -100.0;

pub const START_POSITION: f64 = 300.0;
/// Positions beyond this end the run.
pub const FLOOR_LIMIT: f64 = 525.0;

// ── Ground ──────────────────────────────────────────────────────────────────

pub const GROUND_SPEED: f64 = GRAVITY * 8.0;
pub const GROUND_WRAP: f64 = -192.0;
pub const GROUND_Y: f64 = 550.0;
pub const GROUND_TILE_W: f64 = 336.0;
pub const GROUND_TILE_H: f64 = 112.0;

// ── Pipes ───────────────────────────────────────────────────────────────────

pub const PIPE1_SPEED: f64 = GRAVITY * 5.3333;
pub const PIPE2_SPEED: f64 = GRAVITY * 5.33333;
pub const PIPE_START_X: f64 = 500.0;
/// A pipe at or left of this X wraps back to `PIPE_WRAP_X`.
pub const PIPE_OFFSCREEN_X: f64 = -100.0;
pub const PIPE_WRAP_X: f64 = 333.0;
/// Pipe 2 starts scrolling once pipe 1 is left of this X ...
pub const PIPE2_RELEASE_PIPE1_X: f64 = 285.0;
/// ... or pipe 2 itself is left of this one.
pub const PIPE2_RELEASE_PIPE2_X: f64 = 300.0;
/// Pipe 2 is drawn once pipe 1 is left of this X.
pub const PIPE2_VISIBLE_PIPE1_X: f64 = 350.0;
/// Gap offsets are drawn from `0..GAP_RANGE`.
pub const GAP_RANGE: u32 = 150;
pub const PIPE1_INITIAL_GAP: f64 = 0.0;
pub const PIPE2_INITIAL_GAP: f64 = 150.0;

/// Pipe sprites are drawn at this scale, so pipe X values are in scaled units.
pub const PIPE_SCALE: f64 = 1.5;
pub const PIPE_SPRITE_W: f64 = 52.0;
pub const PIPE_SPRITE_H: f64 = 320.0;
/// Gap multiplier for collision thresholds.
pub const GAP_FACTOR: f64 = 1.5;
pub const GAP_LOWER_EDGE: f64 = 415.0;
pub const GAP_UPPER_EDGE: f64 = 295.0;

// ── Scoring / collision windows (rounded pipe X) ────────────────────────────

pub const SCORE_XS: [i64; 2] = [129, 130];
/// Exclusive bounds of the rounded pipe X in which the bird overlaps a pipe.
pub const HIT_X_MIN: i64 = 71;
pub const HIT_X_MAX: i64 = 156;

// ── Bird sprite ─────────────────────────────────────────────────────────────

pub const BIRD_X: f64 = 180.0;
pub const BIRD_H: f64 = 35.0;
pub const BIRD_W: f64 = BIRD_H * (14.0 / 9.0);
/// Velocities above this use the down-flap frame.
pub const BIRD_DOWNFLAP_ABOVE: f64 = 7.0;

// ── Message overlay ─────────────────────────────────────────────────────────

pub const MESSAGE_SCALE: f64 = 1.25;
pub const MESSAGE_X: f64 = 100.0;
pub const MESSAGE_Y: f64 = 100.0;
pub const MESSAGE_W: f64 = 184.0;
pub const MESSAGE_H: f64 = 267.0;

/// Default loop interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 16;

pub const BEST_SCORE_FILE: &str = "best-score.json";
