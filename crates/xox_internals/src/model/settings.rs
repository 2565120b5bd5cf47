//! Creation payload for new games.

use super::player::Player;
use crate::error::LogicError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Players and creator of a game to be created.
///
/// Always holds exactly two players with distinct names, one of which is
/// the creator. Deserialization runs the same checks as [`XoxInitSettings::new`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawInitSettings")]
pub struct XoxInitSettings {
    /// Participants, in the order the hosting framework listed them.
    players: Vec<Player>,
    /// Name of the player who created the game.
    creator: String,
}

#[derive(Deserialize)]
struct RawInitSettings {
    players: Vec<Player>,
    creator: String,
}

impl TryFrom<RawInitSettings> for XoxInitSettings {
    type Error = LogicError;

    fn try_from(raw: RawInitSettings) -> Result<Self, Self::Error> {
        Self::new(raw.players, raw.creator)
    }
}

impl XoxInitSettings {
    /// Validates and bundles the creation parameters.
    #[instrument(skip_all, fields(player_count = players.len()))]
    pub fn new(players: Vec<Player>, creator: impl Into<String>) -> Result<Self, LogicError> {
        let creator = creator.into();
        if players.len() != 2 {
            warn!("Xox requires exactly two players");
            return Err(LogicError::InvalidSettings(format!(
                "expected 2 players, got {}",
                players.len()
            )));
        }
        if players[0].name() == players[1].name() {
            return Err(LogicError::InvalidSettings(format!(
                "both players are named {}",
                players[0].name()
            )));
        }
        if !players.iter().any(|p| p.name() == &creator) {
            return Err(LogicError::InvalidSettings(format!(
                "creator {} is not among the players",
                creator
            )));
        }
        Ok(Self { players, creator })
    }

    /// Players in seat order: the creator first.
    pub fn seated_players(&self) -> (Player, Player) {
        let (a, b) = (self.players[0].clone(), self.players[1].clone());
        if a.name() == &self.creator {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max() -> Player {
        Player::new("Max", "#CAFFEE")
    }

    fn moritz() -> Player {
        Player::new("Moritz", "#1CE7EA")
    }

    #[test]
    fn test_creator_is_seated_first() {
        let settings = XoxInitSettings::new(vec![max(), moritz()], "Moritz").expect("valid");
        assert_eq!(settings.creator(), "Moritz");
        assert_eq!(settings.seated_players(), (moritz(), max()));

        let settings = XoxInitSettings::new(vec![max(), moritz()], "Max").expect("valid");
        assert_eq!(settings.seated_players(), (max(), moritz()));
    }

    #[test]
    fn test_rejects_wrong_player_count() {
        assert!(XoxInitSettings::new(vec![max()], "Max").is_err());
        assert!(XoxInitSettings::new(vec![max(), moritz(), max()], "Max").is_err());
    }

    #[test]
    fn test_rejects_unknown_creator() {
        assert!(matches!(
            XoxInitSettings::new(vec![max(), moritz()], "Lisa"),
            Err(LogicError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let twin = Player::new("Max", "#000000");
        assert!(XoxInitSettings::new(vec![max(), twin], "Max").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r##"{"players":[{"name":"Max","preferredColour":"#CAFFEE"},{"name":"Moritz","preferredColour":"#1CE7EA"}],"creator":"Moritz"}"##;
        let settings: XoxInitSettings = serde_json::from_str(json).expect("valid settings");
        assert_eq!(settings.players().len(), 2);

        let bad = r##"{"players":[{"name":"Max","preferredColour":"#CAFFEE"}],"creator":"Max"}"##;
        assert!(serde_json::from_str::<XoxInitSettings>(bad).is_err());
    }
}
