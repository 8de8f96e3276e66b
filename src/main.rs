use std::fs::File;
use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use flappy_tap::input::{self, Action};
use flappy_tap::render::Renderer;
use flappy_tap::{FileScoreStore, Game, GameConfig, MemoryScoreStore, ScoreStore, SystemClock, Ticker};

/// Input is still polled at this rate while no run is active.
const IDLE_POLL: Duration = Duration::from_millis(100);

fn init_logging(config: &GameConfig) -> anyhow::Result<()> {
    // The screen belongs to the game, so logs only go to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn open_store(config: &GameConfig) -> Box<dyn ScoreStore> {
    if let Some(path) = &config.best_score_path {
        return Box::new(FileScoreStore::new(path.clone()));
    }
    match FileScoreStore::in_data_dir() {
        Ok(store) => {
            info!(path = %store.path().display(), "best score file");
            Box::new(store)
        }
        Err(e) => {
            warn!("{}; best score will not be kept", e);
            Box::new(MemoryScoreStore::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let (config, warnings) = GameConfig::load_or_default();
    init_logging(&config)?;
    info!("flappy-tap v{}", env!("CARGO_PKG_VERSION"));
    for warning in &warnings {
        warn!("{}", warning);
    }
    if let Err(e) = config.validate() {
        error!("{}", e);
        return Err(e.into());
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(open_store(&config), rng);

    let result = play(&mut game, &config);
    match &result {
        Ok(()) => info!("bye"),
        Err(e) => error!("{:#}", e),
    }
    result
}

/// Take over the terminal, run the game, and always try to give it back.
fn play<S: ScoreStore>(game: &mut Game<S>, config: &GameConfig) -> anyhow::Result<()> {
    terminal::enable_raw_mode().context("enabling raw mode")?;
    let mut out = stdout();
    let result = execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
        EnableMouseCapture,
    )
    .context("preparing the screen")
    .and_then(|()| run(game, config, &mut out));

    let restored = execute!(
        out,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )
    .and_then(|()| terminal::disable_raw_mode());
    first_error(result, restored)
}

/// A failed run wins over a failed terminal restore; the latter is still logged.
fn first_error(run: anyhow::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    match (run, restored) {
        (Err(e), Err(restore)) => {
            warn!("restoring the terminal: {}", restore);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored.context("restoring the terminal"),
    }
}

fn run<S: ScoreStore>(game: &mut Game<S>, config: &GameConfig, out: &mut io::Stdout) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut renderer = Renderer::new(cols, rows);
    let clock = SystemClock::new();
    let mut ticker = Ticker::new(config.tick_interval);

    renderer.draw(game.state());
    renderer.present(out)?;

    loop {
        let timeout = ticker.until_next(&clock).unwrap_or(IDLE_POLL);
        let mut redraw = false;

        if event::poll(timeout)? {
            // Drain everything queued so a burst of input doesn't lag frames
            loop {
                let ev = event::read()?;
                let action = input::map_event(&ev, &renderer.viewport(), game.state().is_over);
                match action {
                    Some(Action::Quit) => return Ok(()),
                    Some(Action::Activate) => game.activate(),
                    Some(Action::Restart) => game.restart(),
                    Some(Action::Resize(c, r)) => renderer.resize(c, r),
                    None => {}
                }
                redraw |= action.is_some();
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        ticker.sync(game.state().is_running, &clock);
        if ticker.poll(&clock) {
            game.tick();
            ticker.sync(game.state().is_running, &clock);
            redraw = true;
        }

        if redraw {
            renderer.draw(game.state());
            renderer.present(out)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err(msg: &str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, msg.to_string())
    }

    #[test]
    fn run_error_survives_failed_restore() {
        let result = first_error(Err(anyhow::anyhow!("no tty")), Err(io_err("restore failed")));
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn restore_error_reported_after_clean_run() {
        let result = first_error(Ok(()), Err(io_err("restore failed")));
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("restoring the terminal"));
        assert!(msg.contains("restore failed"));
    }

    #[test]
    fn clean_run_and_restore_is_ok() {
        assert!(first_error(Ok(()), Ok(())).is_ok());
        assert!(first_error(Err(anyhow::anyhow!("x")), Ok(())).is_err());
    }
}
