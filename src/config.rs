//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_engine::Mode;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Pause before the computer plays, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Mode of the first game.
    #[serde(default)]
    mode: Mode,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Seed for the computer's move picks. Random when unset.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_computer_delay_ms() -> u64 {
    480
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            mode: Mode::default(),
            log_file: default_log_file(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, delay_ms = config.computer_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn apply(self, overrides: ConfigOverrides) -> Self {
        let mut config = self;
        if let Some(mode) = overrides.mode {
            config = config.with_mode(mode);
        }
        if let Some(delay_ms) = overrides.computer_delay_ms {
            config = config.with_computer_delay_ms(delay_ms);
        }
        if let Some(seed) = overrides.seed {
            config = config.with_seed(Some(seed));
        }
        if let Some(log_file) = overrides.log_file {
            config = config.with_log_file(log_file);
        }
        config
    }

    /// Computer delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Mode override.
    pub mode: Option<Mode>,
    /// Delay override in milliseconds.
    pub computer_delay_ms: Option<u64>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Log file override.
    pub log_file: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
