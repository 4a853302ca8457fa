//! World configuration, loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, WorldError};

/// Game rules and map generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square map, border walls included
    #[serde(default = "default_size")]
    pub size: i32,

    /// The game is lost once more steps than this have been taken
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,

    /// The game is lost once the score drops below this
    #[serde(default = "default_min_score")]
    pub min_score: i32,

    /// Arrows the player starts with
    #[serde(default = "default_arrows")]
    pub arrows: u32,

    /// Upper bound on pits, as a fraction of all squares
    #[serde(default = "default_pit_ratio")]
    pub pit_ratio: f64,

    /// Upper bound on interior walls, as a fraction of all squares
    #[serde(default = "default_wall_ratio")]
    pub wall_ratio: f64,

    #[serde(default)]
    pub scoring: ScoreTable,

    /// Fixed map rows (`#.PWGS@`). Overrides random generation and `size`.
    #[serde(default)]
    pub layout: Option<Vec<String>>,
}

/// Smallest generated map: a 3x3 interior.
pub const MIN_SIZE: i32 = 5;
/// Largest generated map.
pub const MAX_SIZE: i32 = 256;

fn default_size() -> i32 {
    14
}
fn default_max_steps() -> u32 {
    500
}
fn default_min_score() -> i32 {
    -1000
}
fn default_arrows() -> u32 {
    1
}
fn default_pit_ratio() -> f64 {
    0.15
}
fn default_wall_ratio() -> f64 {
    0.10
}

/// Points for each scoring event. Costs are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    #[serde(rename = "move")]
    pub movement: i32,
    pub death: i32,
    pub shoot: i32,
    pub kill: i32,
    pub gold: i32,
    pub food: i32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            movement: -1,
            death: -1000,
            shoot: -10,
            kill: 500,
            gold: 1000,
            food: 100,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            max_steps: default_max_steps(),
            min_score: default_min_score(),
            arrows: default_arrows(),
            pit_ratio: default_pit_ratio(),
            wall_ratio: default_wall_ratio(),
            scoring: ScoreTable::default(),
            layout: None,
        }
    }
}

impl WorldConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| WorldError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.is_none() && !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(WorldError::InvalidConfig(format!(
                "size must be between {MIN_SIZE} and {MAX_SIZE}, got {}",
                self.size
            )));
        }
        for (name, ratio) in [("pit_ratio", self.pit_ratio), ("wall_ratio", self.wall_ratio)] {
            if !(0.0..1.0).contains(&ratio) {
                return Err(WorldError::InvalidConfig(format!(
                    "{name} must be in [0, 1), got {ratio}"
                )));
            }
        }
        Ok(())
    }
}
