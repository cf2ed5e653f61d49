use crate::TeamColor;
use crate::timer::{MAX_MINUTES, MAX_SECONDS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub name: String,
    pub color: TeamColor,
}

/// Startup values for a fresh board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub home: TeamConfig,
    pub guest: TeamConfig,
    pub countdown_minutes: u32,
    pub countdown_seconds: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            home: TeamConfig {
                name: "HOME".to_string(),
                color: TeamColor::Red,
            },
            guest: TeamConfig {
                name: "GUEST".to_string(),
                color: TeamColor::Blue,
            },
            countdown_minutes: 20,
            countdown_seconds: 0,
        }
    }
}

impl Default for TeamConfig {
    fn default() -> Self {
        BoardConfig::default().home
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_minutes > MAX_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "countdown_minutes must be at most {MAX_MINUTES}, got {}",
                self.countdown_minutes
            )));
        }
        if self.countdown_seconds > MAX_SECONDS {
            return Err(ConfigError::Invalid(format!(
                "countdown_seconds must be at most {MAX_SECONDS}, got {}",
                self.countdown_seconds
            )));
        }
        for (side, team) in [("home", &self.home), ("guest", &self.guest)] {
            if team.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{side} team name is empty")));
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "could not read config: {msg}"),
            ConfigError::Parse(msg) => write!(f, "invalid config json: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
