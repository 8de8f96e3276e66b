use std::path::PathBuf;
use std::time::Duration;

use crate::constants::TICK_INTERVAL_MS;
use crate::error::{Error, Result};

/// Slowest accepted loop interval.
pub const MAX_TICK_MS: u64 = 1000;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Loop interval. Scoring and collision windows assume the default.
    pub tick_interval: Duration,
    /// Best-score file; defaults to the platform data directory
    pub best_score_path: Option<PathBuf>,
    /// Seed for gap offsets; random when unset
    pub seed: Option<u64>,
    /// File to write logs to; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            best_score_path: None,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Load config from environment or use defaults.
    ///
    /// Values that can't be parsed are reported in the returned warnings
    /// rather than logged, since logging is configured from the result.
    pub fn load_or_default() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(ms) = lookup("FLAPPY_TICK_MS") {
            match ms.parse::<u64>() {
                Ok(parsed) => config.tick_interval = Duration::from_millis(parsed),
                Err(_) => warnings.push(format!("Invalid FLAPPY_TICK_MS '{}', using default", ms)),
            }
        }

        if let Some(path) = lookup("FLAPPY_BEST_PATH") {
            if !path.is_empty() {
                config.best_score_path = Some(PathBuf::from(path));
            }
        }

        if let Some(seed) = lookup("FLAPPY_SEED") {
            if let Ok(parsed) = seed.parse::<u64>() {
                config.seed = Some(parsed);
            } else {
                warnings.push(format!("Invalid FLAPPY_SEED '{}', using a random seed", seed));
            }
        }

        if let Some(path) = lookup("FLAPPY_LOG") {
            if !path.is_empty() {
                config.log_path = Some(PathBuf::from(path));
            }
        }

        (config, warnings)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<()> {
        let ms = self.tick_interval.as_millis();
        if !(1..=MAX_TICK_MS as u128).contains(&ms) {
            return Err(Error::Config(format!(
                "tick interval must be 1-{} ms, got {} ms",
                MAX_TICK_MS, ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> (GameConfig, Vec<String>) {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(16));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_all_keys() {
        let (config, warnings) = from_pairs(&[
            ("FLAPPY_TICK_MS", "20"),
            ("FLAPPY_BEST_PATH", "/tmp/best.json"),
            ("FLAPPY_SEED", "99"),
            ("FLAPPY_LOG", "/tmp/flappy.log"),
        ]);
        assert!(warnings.is_empty());
        assert_eq!(config.tick_interval, Duration::from_millis(20));
        assert_eq!(config.best_score_path, Some(PathBuf::from("/tmp/best.json")));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/flappy.log")));
    }

    #[test]
    fn test_unparsable_values_warn_and_fall_back() {
        let (config, warnings) = from_pairs(&[
            ("FLAPPY_TICK_MS", "fast"),
            ("FLAPPY_SEED", "abc"),
            ("FLAPPY_LOG", "/tmp/flappy.log"),
        ]);
        assert_eq!(config.tick_interval, Duration::from_millis(16));
        assert!(config.seed.is_none());
        // The log path still comes through so the warnings can be logged
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/flappy.log")));
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("FLAPPY_TICK_MS 'fast'"));
        assert!(warnings[1].contains("FLAPPY_SEED 'abc'"));
    }

    #[test]
    fn test_out_of_range_tick_rejected() {
        for ms in ["0", "1001"] {
            let (config, warnings) = from_pairs(&[("FLAPPY_TICK_MS", ms)]);
            assert!(warnings.is_empty());
            assert!(matches!(config.validate(), Err(Error::Config(_))), "{ms}");
        }
        let (config, _) = from_pairs(&[("FLAPPY_TICK_MS", "1000")]);
        assert!(config.validate().is_ok());
    }
}
