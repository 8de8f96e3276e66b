use crate::constants::*;
use crate::state::GameState;

/// Result of checking one tick's snapshot against both pipes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Check {
    /// A pipe is centred on the bird: award one point.
    pub scored: bool,
    /// The bird overlaps a pipe body.
    pub hit: bool,
}

/// Half-up rounding, so `x.5` always rounds towards +inf.
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Smallest bird Y that still clears the top pipe.
pub fn upper_threshold(gap: f64) -> f64 {
    GAP_UPPER_EDGE - gap * GAP_FACTOR
}

/// Largest bird Y that still clears the bottom pipe.
pub fn lower_threshold(gap: f64) -> f64 {
    GAP_LOWER_EDGE - gap * GAP_FACTOR
}

pub fn in_score_window(pipe_x: f64) -> bool {
    SCORE_XS.contains(&round_half_up(pipe_x))
}

pub fn in_hit_window(pipe_x: f64) -> bool {
    let x = round_half_up(pipe_x);
    x > HIT_X_MIN && x < HIT_X_MAX
}

/// Both checks use discrete rounded X matching, not range overlap.
pub fn check(s: &GameState) -> Check {
    let pipes = s.pipes();
    let scored = pipes.iter().any(|&(x, _)| in_score_window(x));
    let hit = pipes.iter().any(|&(x, gap)| {
        in_hit_window(x) && (s.position > lower_threshold(gap) || s.position < upper_threshold(gap))
    });
    Check { scored, hit }
}
