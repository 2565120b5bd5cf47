//! Player identity records.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Name and preferred colour of a participant.
///
/// Immutable once created. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Human-readable player name, unique within a game.
    #[new(into)]
    name: String,
    /// Preferred colour, a hex string prefixed by `#`.
    #[new(into)]
    preferred_colour: String,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{name:{},preferredColour:{}}}",
            self.name, self.preferred_colour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_value() {
        let a = Player::new("Max", "#CAFFEE");
        let b = Player::new(String::from("Max"), String::from("#CAFFEE"));
        assert_eq!(a, b);
        assert_ne!(a, Player::new("Max", "#1CE7EA"));
    }

    #[test]
    fn test_json_shape() {
        let player = Player::new("Moritz", "#1CE7EA");
        let json = serde_json::to_string(&player).expect("serializable");
        assert_eq!(json, r##"{"name":"Moritz","preferredColour":"#1CE7EA"}"##);
        assert_eq!(player.to_string(), "{name:Moritz,preferredColour:#1CE7EA}");
    }
}
