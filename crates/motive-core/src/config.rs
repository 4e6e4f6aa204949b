//! Configuration loading for the engine.
//!
//! Simulation, selection and logging settings are loaded from a TOML file.
//! Every section and field is optional and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::actor::{Actor, DEFAULT_FORESIGHT, DEFAULT_TIE_BREAK_JITTER};

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Turn loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Number of turns to run
    pub turns: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            turns: 100,
        }
    }
}

/// Defaults applied to every actor the simulation spawns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Upper bound of the random amount subtracted from candidate scores
    pub tie_break_jitter: f64,
    /// How strongly multi-turn actions are discounted
    pub default_foresight: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tie_break_jitter: DEFAULT_TIE_BREAK_JITTER,
            default_foresight: DEFAULT_FORESIGHT,
        }
    }
}

impl SelectionConfig {
    pub fn apply(&self, actor: &mut Actor) {
        actor.set_tie_break_jitter(self.tie_break_jitter);
        actor.set_foresight(self.default_foresight);
    }
}

/// Action logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit an INFO record for every completed action
    pub trace_actions: bool,
    /// Append completed actions to this JSONL file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_path: Option<PathBuf>,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
