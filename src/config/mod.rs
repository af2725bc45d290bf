//! Tournament configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::models::{PairId, Player, Position};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// How sides are formed during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairingMode {
    /// Sides are re-formed every round from individual players
    Free,
    /// Pre-declared pairs stay together for the whole tournament
    FixedPairs,
}

impl Default for PairingMode {
    fn default() -> Self {
        PairingMode::Free
    }
}

/// One player entry in the config file. Ids are assigned by roster order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerEntry {
    name: String,

    #[serde(default = "default_position")]
    position: Position,

    /// Fixed pair membership (fixed-pairs mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pair: Option<PairId>,
}

fn default_position() -> Position {
    Position::Either
}

/// Raw on-disk form of a tournament config.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TournamentFile {
    #[serde(default = "default_rounds")]
    rounds: u32,

    #[serde(default)]
    mode: PairingMode,

    players: Vec<PlayerEntry>,
}

fn default_rounds() -> u32 {
    1
}

/// Validated input to one scheduler invocation.
///
/// Owns the full roster; immutable once passed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of rounds to generate
    pub rounds: u32,

    /// Side-forming mode
    pub mode: PairingMode,

    /// Full roster, ids unique within the tournament
    pub players: Vec<Player>,
}

impl TournamentConfig {
    /// Build a config from an in-memory roster.
    pub fn new(rounds: u32, mode: PairingMode, players: Vec<Player>) -> Result<Self, ConfigError> {
        let config = Self {
            rounds,
            mode,
            players,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    ///
    /// Player ids are assigned from roster order, starting at 1.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: TournamentFile = toml::from_str(contents)?;

        let players = file
            .players
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Player {
                id: i as u32 + 1,
                name: entry.name,
                position: entry.position,
                pair_id: entry.pair,
            })
            .collect();

        let config = Self {
            rounds: file.rounds,
            mode: file.mode,
            players,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds < 1 {
            return Err(ConfigError::ValidationError(
                "There must be at least 1 round".to_string(),
            ));
        }

        if self.players.len() < 8 || self.players.len() % 4 != 0 {
            return Err(ConfigError::ValidationError(format!(
                "Player count must be a multiple of 4 and at least 8, got {}",
                self.players.len()
            )));
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for player in &self.players {
            if player.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "Player {} has an empty name",
                    player.id
                )));
            }
            if !ids.insert(player.id) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate player id {}",
                    player.id
                )));
            }
            if !names.insert(player.name.trim().to_lowercase()) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate player name '{}'",
                    player.name
                )));
            }
        }

        if self.mode == PairingMode::FixedPairs {
            self.validate_pairs()?;
        }

        Ok(())
    }

    /// Every declared pair id must bind exactly two players.
    fn validate_pairs(&self) -> Result<(), ConfigError> {
        let mut members: std::collections::HashMap<PairId, u32> = std::collections::HashMap::new();
        for player in &self.players {
            if let Some(pair_id) = player.pair_id {
                *members.entry(pair_id).or_insert(0) += 1;
            }
        }

        for (pair_id, count) in members {
            if count != 2 {
                return Err(ConfigError::ValidationError(format!(
                    "Pair {} has {} member(s), expected exactly 2",
                    pair_id, count
                )));
            }
        }

        Ok(())
    }
}
