use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{Board, DarkParity, Game, Rules, Side};

/// Who plays a side in the bundled binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Human,
    Random,
}

/// Board layout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub dark_parity: DarkParity,
}

/// Settings for driving games.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Move legs after which a game is abandoned.
    pub max_plies: usize,
    /// Seed for random agents; fresh entropy when absent.
    pub seed: Option<u64>,
    pub first: AgentKind,
    pub second: AgentKind,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            max_plies: 400,
            seed: None,
            first: AgentKind::Human,
            second: AgentKind::Random,
        }
    }
}

impl PlayConfig {
    pub fn agent_for(&self, side: Side) -> AgentKind {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Seeds for the two random agents of game `index`, derived from `seed`.
    pub fn seeds_for_game(&self, index: usize) -> Option<(u64, u64)> {
        let base = self.seed?.wrapping_add((index as u64).wrapping_mul(2));
        Some((base, base.wrapping_add(1)))
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: Rules,
    pub board: BoardConfig,
    pub play: PlayConfig,
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
        if self.play.max_plies == 0 {
            return Err(ConfigError::Validation(
                "play.max_plies must be > 0".into(),
            ));
        }
        if self.rules.quiet_turn_limit == Some(0) {
            return Err(ConfigError::Validation(
                "rules.quiet_turn_limit must be > 0 when set".into(),
            ));
        }
        Ok(())
    }

    /// A fresh game with the configured rules and board layout.
    pub fn new_game(&self) -> Game {
        Game::from_position(
            Board::initial_with(self.board.dark_parity),
            Side::First,
            self.rules,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
