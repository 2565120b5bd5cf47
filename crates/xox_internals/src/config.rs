//! Engine configuration.

use crate::error::ConfigError;
use crate::model::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a [`crate::XoxManager`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct XoxConfig {
    /// Demonstration game created with the manager.
    #[serde(default)]
    sample_game: SampleGameConfig,
}

/// The game a manager seeds at a well-known id.
///
/// The two players must have distinct names, since the manager addresses
/// players by name. Deserialization runs the same check as
/// [`SampleGameConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawSampleGameConfig")]
pub struct SampleGameConfig {
    /// Whether to seed the game at all.
    enabled: bool,

    /// Fixed id of the sample game.
    id: u64,

    /// First and second player of the sample game.
    players: [Player; 2],
}

#[derive(Deserialize)]
struct RawSampleGameConfig {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default = "default_sample_id")]
    id: u64,
    #[serde(default = "default_sample_players")]
    players: [Player; 2],
}

impl TryFrom<RawSampleGameConfig> for SampleGameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSampleGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.enabled, raw.id, raw.players)
    }
}

impl SampleGameConfig {
    /// Validates the sample game description.
    #[instrument(skip(players))]
    pub fn new(enabled: bool, id: u64, players: [Player; 2]) -> Result<Self, ConfigError> {
        if players[0].name() == players[1].name() {
            return Err(ConfigError::new(format!(
                "Sample game players are both named {}",
                players[0].name()
            )));
        }
        Ok(Self {
            enabled,
            id,
            players,
        })
    }
}

fn default_enabled() -> bool {
    true
}

fn default_sample_id() -> u64 {
    42
}

fn default_sample_players() -> [Player; 2] {
    [Player::new("Max", "#CAFFEE"), Player::new("Moritz", "#1CE7EA")]
}

impl Default for SampleGameConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            id: default_sample_id(),
            players: default_sample_players(),
        }
    }
}

impl XoxConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(sample_game = config.sample_game.enabled, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_seed_max_and_moritz() {
        let config = XoxConfig::default();
        assert!(*config.sample_game().enabled());
        assert_eq!(*config.sample_game().id(), 42);
        assert_eq!(config.sample_game().players()[1].name(), "Moritz");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = XoxConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, XoxConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r##"
[sample_game]
id = 7
players = [
  {{ name = "Ada", preferredColour = "#000000" }},
  {{ name = "Bob", preferredColour = "#FFFFFF" }},
]
"##
        )
        .expect("write config");

        let config = XoxConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.sample_game().id(), 7);
        assert!(*config.sample_game().enabled());
        assert_eq!(config.sample_game().players()[0].name(), "Ada");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(XoxConfig::from_file("/nonexistent/xox.toml").is_err());
    }

    #[test]
    fn test_duplicate_sample_players_are_rejected() {
        let content = r##"
[sample_game]
players = [
  { name = "A", preferredColour = "#000000" },
  { name = "A", preferredColour = "#FFFFFF" },
]
"##;
        let err = XoxConfig::from_toml(content).expect_err("duplicate names");
        assert!(err.message.contains("both named A"));
    }

    #[test]
    fn test_sample_game_new_validates_names() {
        let players = [Player::new("A", "#000000"), Player::new("A", "#FFFFFF")];
        assert!(SampleGameConfig::new(true, 42, players).is_err());

        let players = [Player::new("A", "#000000"), Player::new("B", "#FFFFFF")];
        let sample = SampleGameConfig::new(false, 5, players).expect("distinct names");
        assert!(!*sample.enabled());
        assert_eq!(*sample.id(), 5);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(XoxConfig::from_toml("sample_game = 3").is_err());
    }
}
