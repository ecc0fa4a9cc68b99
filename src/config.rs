use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Guess budget used when none is configured.
pub const DEFAULT_GUESS_BUDGET: u32 = 10;

/// Game tuning knobs.
///
/// Usually read from a TOML file:
///
/// ```toml
/// guess_budget = 5
/// idle_timeout_secs = 3600
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game is lost.
    pub guess_budget: u32,
    /// Sessions untouched for this many seconds may be evicted.
    pub idle_timeout_secs: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            guess_budget: DEFAULT_GUESS_BUDGET,
            idle_timeout_secs: None,
        }
    }
}

/// Errors raised while loading a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("guess_budget must be at least 1")]
    ZeroGuessBudget,
}

impl GameConfig {
    /// Parse and validate a TOML config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML, unknown keys, or a zero
    /// guess budget.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`GuessworkError`](crate::GuessworkError) on I/O or config failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::GuessworkError> {
        let input = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&input)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGuessBudget`] if no guesses are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guess_budget == 0 {
            return Err(ConfigError::ZeroGuessBudget);
        }
        Ok(())
    }

    #[must_use]
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_secs.map(Duration::from_secs)
    }
}
