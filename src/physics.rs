use rand::Rng;

use crate::constants::*;
use crate::state::GameState;

/// Advance bird, ground and pipes by one tick.
///
/// Pipe wrap-around draws a new gap offset from `rng`.
pub fn step<R: Rng + ?Sized>(s: &mut GameState, rng: &mut R) {
    if s.ground_x <= GROUND_WRAP {
        s.ground_x = 0.0;
    }
    s.ground_x -= GROUND_SPEED;

    s.position -= s.velocity;
    if s.velocity > TERMINAL_VELOCITY {
        s.velocity = (s.velocity - GRAVITY / GRAVITY_DIVISOR).max(TERMINAL_VELOCITY);
    }

    // Pipe 2 release is decided on pipe 1's position before this tick's move.
    let release_pipe2 = s.pipe1_x < PIPE2_RELEASE_PIPE1_X || s.pipe2_x < PIPE2_RELEASE_PIPE2_X;

    scroll_pipe(&mut s.pipe1_x, &mut s.pipe1_gap, PIPE1_SPEED, rng);
    if release_pipe2 {
        scroll_pipe(&mut s.pipe2_x, &mut s.pipe2_gap, PIPE2_SPEED, rng);
    }
}

fn scroll_pipe<R: Rng + ?Sized>(x: &mut f64, gap: &mut f64, speed: f64, rng: &mut R) {
    if *x > PIPE_OFFSCREEN_X {
        *x -= speed;
    } else {
        *x = PIPE_WRAP_X;
        *gap = rng.gen_range(0..GAP_RANGE) as f64;
    }
}

/// Apply a jump if the bird is below the jump ceiling. Returns whether it did.
pub fn jump(s: &mut GameState) -> bool {
    if s.position <= JUMP_CEILING {
        return false;
    }
    s.velocity = JUMP_VELOCITY;
    s.position += s.velocity;
    true
}
