//! Legal-move generation.

use super::action::ClaimFieldAction;
use crate::error::LogicError;
use crate::model::{Cell, Player, XoxGame};
use tracing::{debug, instrument, warn};

/// Derives the actions a player may currently choose from.
pub trait ActionGenerator {
    /// Lists the legal actions for `player` in a stable order.
    ///
    /// The result is empty when it is not the player's turn or the game is
    /// over. Fails only for a player who does not take part in the game.
    fn generate_actions(
        &self,
        game: &XoxGame,
        player: &Player,
    ) -> Result<Vec<ClaimFieldAction>, LogicError>;
}

/// Action generator for Xox games.
///
/// Offers one claim per empty cell, row-major (`y` outer, `x` inner). The
/// manager resolves client indices against this order, so it must not
/// change between calls on an unchanged board.
#[derive(Debug, Clone, Copy, Default)]
pub struct XoxActionGenerator;

impl ActionGenerator for XoxActionGenerator {
    #[instrument(skip(self, game, player), fields(player = %player.name()))]
    fn generate_actions(
        &self,
        game: &XoxGame,
        player: &Player,
    ) -> Result<Vec<ClaimFieldAction>, LogicError> {
        let Some(seat) = game.seat_of(player) else {
            warn!("Actions requested for a player outside the game");
            return Err(LogicError::UnknownPlayer(player.name().clone()));
        };

        if game.is_finished() || seat != game.current_seat() {
            debug!(finished = game.is_finished(), ?seat, "No actions offered");
            return Ok(Vec::new());
        }

        let actions = game
            .board()
            .iter()
            .filter(|(_, _, cell)| *cell == Cell::Empty)
            .map(|(x, y, _)| ClaimFieldAction::new(x, y, player.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = actions.len(), "Generated actions");
        Ok(actions)
    }
}
