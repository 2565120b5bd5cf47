//! Validation and application of actions.

use super::action::ClaimFieldAction;
use super::ending::{EndingAnalyzer, XoxEndingAnalyzer};
use super::generator::{ActionGenerator, XoxActionGenerator};
use crate::error::{LogicError, ModelAccessError, XoxError};
use crate::model::XoxGame;
use tracing::{info, instrument, warn};

/// Applies a player's action to a game.
pub trait ActionInterpreter {
    /// Validates `action` against `game` and applies it.
    ///
    /// On any error the game is left exactly as it was.
    fn interpret_and_apply(
        &self,
        action: &ClaimFieldAction,
        game: &mut XoxGame,
    ) -> Result<(), XoxError>;
}

/// Action interpreter for Xox games.
///
/// An action is accepted only if it equals one of the actions the
/// generator currently offers its player. Client-supplied indices are
/// never trusted on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct XoxActionInterpreter {
    generator: XoxActionGenerator,
    ending: XoxEndingAnalyzer,
}

impl XoxActionInterpreter {
    /// Creates an interpreter from its collaborators.
    pub fn new(generator: XoxActionGenerator, ending: XoxEndingAnalyzer) -> Self {
        Self { generator, ending }
    }

    fn is_valid_action(
        &self,
        game: &XoxGame,
        action: &ClaimFieldAction,
    ) -> Result<bool, LogicError> {
        let offered = self.generator.generate_actions(game, action.player())?;
        Ok(offered.contains(action))
    }
}

impl ActionInterpreter for XoxActionInterpreter {
    #[instrument(skip(self, action, game), fields(action = %action))]
    fn interpret_and_apply(
        &self,
        action: &ClaimFieldAction,
        game: &mut XoxGame,
    ) -> Result<(), XoxError> {
        if game.is_finished() {
            warn!("Action submitted for a finished game");
            return Err(LogicError::GameFinished.into());
        }
        if !self.is_valid_action(game, action)? {
            warn!("Rejected action that is not currently offered");
            return Err(LogicError::InvalidAction.into());
        }

        let seat = game
            .seat_of(action.player())
            .ok_or_else(|| ModelAccessError::new("Validated action lost its player"))?;
        game.board_mut().occupy(action.x(), action.y(), seat)?;
        game.set_current_player(1 - game.current_player_index())?;
        self.ending.analyze_and_update(game);

        info!(
            x = action.x(),
            y = action.y(),
            ?seat,
            finished = game.is_finished(),
            "Action applied"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Player, Seat};

    fn setup() -> (XoxGame, Player, Player) {
        let x = Player::new("X", "#000000");
        let o = Player::new("O", "#FFFFFF");
        (XoxGame::new(x.clone(), o.clone()), x, o)
    }

    #[test]
    fn test_apply_claims_cell_and_flips_turn() {
        let (mut game, x, _) = setup();
        let action = ClaimFieldAction::new(2, 1, x).expect("in bounds");
        XoxActionInterpreter::default()
            .interpret_and_apply(&action, &mut game)
            .expect("legal action");
        assert_eq!(game.board().get(2, 1), Some(Cell::Occupied(Seat::First)));
        assert_eq!(game.current_player_index(), 1);
    }

    #[test]
    fn test_out_of_turn_action_is_rejected() {
        let (mut game, _, o) = setup();
        let before = game.clone();
        let action = ClaimFieldAction::new(0, 0, o).expect("in bounds");
        assert_eq!(
            XoxActionInterpreter::default().interpret_and_apply(&action, &mut game),
            Err(XoxError::Logic(LogicError::InvalidAction))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_taken_cell_is_rejected() {
        let (mut game, x, o) = setup();
        let interpreter = XoxActionInterpreter::default();
        let first = ClaimFieldAction::new(1, 1, x).expect("in bounds");
        interpreter.interpret_and_apply(&first, &mut game).expect("legal action");

        let before = game.clone();
        let second = ClaimFieldAction::new(1, 1, o).expect("in bounds");
        assert!(interpreter.interpret_and_apply(&second, &mut game).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_unknown_player_is_rejected() {
        let (mut game, _, _) = setup();
        let action = ClaimFieldAction::new(0, 0, Player::new("Z", "#123456")).expect("in bounds");
        assert!(matches!(
            XoxActionInterpreter::default().interpret_and_apply(&action, &mut game),
            Err(XoxError::Logic(LogicError::UnknownPlayer(_)))
        ));
    }

    #[test]
    fn test_finished_game_is_rejected() {
        let (mut game, x, _) = setup();
        game.mark_as_finished();
        let action = ClaimFieldAction::new(0, 0, x).expect("in bounds");
        assert_eq!(
            XoxActionInterpreter::default().interpret_and_apply(&action, &mut game),
            Err(XoxError::Logic(LogicError::GameFinished))
        );
        assert!(game.board().is_empty());
    }
}
