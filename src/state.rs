use crate::constants::*;

/// Everything the loop mutates, one instance per session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Bird Y, top of sprite, growing downwards.
    pub position: f64,
    /// Positive values move the bird up.
    pub velocity: f64,
    pub ground_x: f64,
    pub pipe1_x: f64,
    pub pipe2_x: f64,
    pub pipe1_gap: f64,
    pub pipe2_gap: f64,
    pub score: u32,
    pub best: u32,
    pub is_running: bool,
    pub is_over: bool,
}

impl GameState {
    pub fn new(best: u32) -> Self {
        Self {
            position: START_POSITION,
            velocity: GRAVITY,
            ground_x: 0.0,
            pipe1_x: PIPE_START_X,
            pipe2_x: PIPE_START_X,
            pipe1_gap: PIPE1_INITIAL_GAP,
            pipe2_gap: PIPE2_INITIAL_GAP,
            score: 0,
            best,
            is_running: false,
            is_over: false,
        }
    }

    /// Idle screen: before the first activation.
    pub fn is_idle(&self) -> bool {
        !self.is_running && !self.is_over
    }

    pub fn in_bounds(&self) -> bool {
        self.position <= FLOOR_LIMIT
    }

    pub fn pipes(&self) -> [(f64, f64); 2] {
        [(self.pipe1_x, self.pipe1_gap), (self.pipe2_x, self.pipe2_gap)]
    }

    pub fn pipe1_visible(&self) -> bool {
        self.pipe1_x > PIPE_OFFSCREEN_X
    }

    pub fn pipe2_visible(&self) -> bool {
        (self.pipe1_x < PIPE2_VISIBLE_PIPE1_X || self.pipe2_x < PIPE2_RELEASE_PIPE2_X)
            && self.pipe2_x > PIPE_OFFSCREEN_X
    }
}
