//! Runtime configuration read from the environment (and `.env`, when present).
//!
//! | Variable               | Default        |
//! |------------------------|----------------|
//! | `ROOTDOWN_BIND_ADDR`   | `0.0.0.0:8080` |
//! | `ROOTDOWN_MODE`        | `garden`       |
//! | `ROOTDOWN_GRID_WIDTH`  | 3 (garden), 5 (lawn) |
//! | `ROOTDOWN_GRID_HEIGHT` | 3 (garden), 5 (lawn) |
//! | `ROOTDOWN_SEED`        | unset: weather seeded from OS entropy |
//! | `ROOTDOWN_MAX_SESSIONS` | 1024 |

use std::{env, str::FromStr};

use thiserror::Error;

use crate::{models::game::GameMode, store::DEFAULT_MAX_SESSIONS};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be one of: garden, lawn (got '{value}')")]
    InvalidMode { var: &'static str, value: String },
    #[error("{var} must be a positive integer (got '{value}')")]
    InvalidNumber { var: &'static str, value: String },
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "garden" => Ok(GameMode::Garden),
            "lawn" => Ok(GameMode::Lawn),
            _ => Err(ConfigError::InvalidMode {
                var: "ROOTDOWN_MODE",
                value: s.to_string(),
            }),
        }
    }
}

/// Rules a new game is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Seed for the weather generator; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn garden() -> Self {
        Self {
            mode: GameMode::Garden,
            grid_width: 3,
            grid_height: 3,
            seed: None,
        }
    }

    pub fn lawn() -> Self {
        Self {
            mode: GameMode::Lawn,
            grid_width: 5,
            grid_height: 5,
            seed: None,
        }
    }

    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Garden => Self::garden(),
            GameMode::Lawn => Self::lawn(),
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match env::var("ROOTDOWN_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => GameMode::Garden,
        };
        let defaults = Self::for_mode(mode);
        Ok(Self {
            mode,
            grid_width: positive_var("ROOTDOWN_GRID_WIDTH")?.unwrap_or(defaults.grid_width),
            grid_height: positive_var("ROOTDOWN_GRID_HEIGHT")?.unwrap_or(defaults.grid_height),
            seed: parse_var("ROOTDOWN_SEED")?,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::garden()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub game: GameConfig,
    /// Games kept in memory before the least recently used one is dropped.
    pub max_sessions: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env::var("ROOTDOWN_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            game: GameConfig::from_env()?,
            max_sessions: positive_var("ROOTDOWN_MAX_SESSIONS")?.unwrap_or(DEFAULT_MAX_SESSIONS),
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => {
            let parsed = value.trim().parse();
            parsed
                .map(Some)
                .map_err(|_| ConfigError::InvalidNumber { var, value })
        }
        Err(_) => Ok(None),
    }
}

fn positive_var(var: &'static str) -> Result<Option<usize>, ConfigError> {
    match parse_var::<usize>(var)? {
        Some(0) => Err(ConfigError::InvalidNumber {
            var,
            value: "0".into(),
        }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing_is_case_insensitive() {
        assert_eq!("Lawn".parse::<GameMode>(), Ok(GameMode::Lawn));
        assert_eq!(" garden ".parse::<GameMode>(), Ok(GameMode::Garden));
        assert!("desert".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_mode_defaults() {
        assert_eq!(GameConfig::default(), GameConfig::garden());
        let lawn = GameConfig::for_mode(GameMode::Lawn);
        assert_eq!((lawn.grid_width, lawn.grid_height), (5, 5));
    }

    #[test]
    fn test_with_seed_keeps_dimensions() {
        let config = GameConfig::lawn().with_seed(7);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.grid_width, 5);
    }
}
