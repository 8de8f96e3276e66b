//! Tap-to-flap bird game on a fixed 480x640 logical canvas.
//!
//! `Game` owns the `GameState` and exposes the loop's step function (`tick`)
//! and input handlers; `Ticker` supplies the fixed-interval timer and
//! `Renderer` draws the canvas into a terminal.

pub mod clock;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod physics;
pub mod render;
pub mod state;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock, Ticker};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Game, TickOutcome};
pub use state::GameState;
pub use store::{FileScoreStore, MemoryScoreStore, ScoreStore};
