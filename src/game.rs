use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::collision;
use crate::constants::*;
use crate::physics;
use crate::state::GameState;
use crate::store::ScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing happened.
    Idle,
    /// Physics advanced; `scored` is set when a point was awarded.
    Advanced { scored: bool },
    GameOver {
        score: u32,
        best: u32,
        new_best: bool,
    },
}

/// The game loop's step function and input handlers around one `GameState`.
pub struct Game<S: ScoreStore> {
    state: GameState,
    store: S,
    rng: StdRng,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(store: S, rng: StdRng) -> Self {
        let best = store.load_or_zero();
        debug!(best, "loaded best score");
        Self {
            state: GameState::new(best),
            store,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Combined start/jump action for any key press or click.
    pub fn activate(&mut self) {
        if self.state.is_idle() {
            info!("run started");
            self.state.is_running = true;
            self.state.score = 0;
        }
        physics::jump(&mut self.state);
    }

    /// One loop tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Idle;
        }
        if !self.state.in_bounds() || self.state.is_over {
            return self.game_over();
        }

        let check = collision::check(&self.state);
        physics::step(&mut self.state, &mut self.rng);
        if check.scored {
            self.state.score += 1;
            debug!(score = self.state.score, "scored");
        }
        if check.hit {
            return self.game_over();
        }
        TickOutcome::Advanced {
            scored: check.scored,
        }
    }

    fn game_over(&mut self) -> TickOutcome {
        let score = self.state.score;
        let new_best = score > self.state.best;
        if new_best {
            self.state.best = score;
            if let Err(e) = self.store.save(score) {
                warn!("could not persist best score: {}", e);
            }
        }
        self.state.is_running = false;
        self.state.is_over = true;
        self.state.pipe1_x = PIPE_START_X;
        self.state.pipe2_x = PIPE_START_X;
        info!(score, best = self.state.best, new_best, "game over");
        TickOutcome::GameOver {
            score,
            best: self.state.best,
            new_best,
        }
    }

    /// Restart from the game-over panel.
    ///
    /// Velocity, ground offset and gap offsets carry over from the last run.
    pub fn restart(&mut self) {
        if !self.state.is_over {
            return;
        }
        info!("run restarted");
        self.state.is_over = false;
        self.state.is_running = true;
        self.state.score = 0;
        self.state.position = START_POSITION;
    }
}
