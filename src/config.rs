use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ai::HeuristicAgent;
use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// Largest board edge accepted from configuration.
pub const MAX_BOARD_EDGE: usize = 32;
/// Longest computer delay accepted from configuration.
pub const MAX_DELAY_MS: u64 = 10_000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub computer: ComputerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Pause before the computer replies, in milliseconds.
    pub delay_ms: u64,
    /// Pick uniformly among legal columns instead of the most central one.
    pub randomize_ties: bool,
    /// Fixed RNG seed for reproducible games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig {
            delay_ms: 800,
            randomize_ties: false,
            seed: None,
        }
    }
}

impl ComputerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn selector(&self) -> HeuristicAgent {
        match self.seed {
            Some(seed) => HeuristicAgent::with_seed(seed, self.randomize_ties),
            None => HeuristicAgent::new(self.randomize_ties),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    /// Log file. Logging is off when unset, since the terminal belongs to
    /// the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("board.rows", self.board.rows), ("board.cols", self.board.cols)] {
            if value < crate::game::CONNECT {
                return Err(ConfigError::Validation(format!(
                    "{name} must be >= {}",
                    crate::game::CONNECT
                )));
            }
            if value > MAX_BOARD_EDGE {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_BOARD_EDGE}"
                )));
            }
        }
        if self.computer.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "computer.delay_ms must be <= {MAX_DELAY_MS}"
            )));
        }
        if !LOG_LEVELS.contains(&self.log.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "log.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
