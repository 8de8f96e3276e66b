//! Best-score persistence.
//!
//! One integer is stored as a bare JSON number. Missing or unreadable data
//! counts as a best of zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::BEST_SCORE_FILE;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct BestScore(u32);

pub trait ScoreStore {
    fn load(&self) -> Result<Option<u32>>;
    fn save(&mut self, best: u32) -> Result<()>;

    /// Stored best, or zero when absent or unreadable.
    fn load_or_zero(&self) -> u32 {
        match self.load() {
            Ok(Some(best)) => best,
            Ok(None) => 0,
            Err(e) => {
                warn!("ignoring stored best score: {}", e);
                0
            }
        }
    }
}

/// JSON file under the platform data directory.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `best-score.json` in the user's data directory for this game.
    pub fn in_data_dir() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "flappy-tap").ok_or(Error::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join(BEST_SCORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored best score");
                return Ok(None);
            }
            Err(e) => return Err(self.io_err(e)),
        };
        let BestScore(best) = serde_json::from_str(&text).map_err(|source| Error::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(best))
    }

    fn save(&mut self, best: u32) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }
        let json = serde_json::to_string(&BestScore(best)).map_err(|source| Error::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_err(e))?;
        debug!(path = %self.path.display(), best, "stored best score");
        Ok(())
    }
}

/// Volatile store, also used when no data directory is available.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    pub best: Option<u32>,
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Option<u32>> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<()> {
        self.best = Some(best);
        self.saves += 1;
        Ok(())
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> Result<Option<u32>> {
        (**self).load()
    }

    fn save(&mut self, best: u32) -> Result<()> {
        (**self).save(best)
    }
}
