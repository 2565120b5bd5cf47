//! Scores and player order of a game.

use crate::model::{Player, Seat, XoxGame};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Players ordered by rank with their scores.
///
/// Derived on demand, never stored with the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    /// Players, best ranked first.
    players_descending: [Player; 2],
    /// Scores, parallel to `players_descending`.
    scores_descending: [u32; 2],
    #[getter(skip)]
    game_over: bool,
}

impl Ranking {
    /// True if the ranking is final.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

/// Computes the ranking of a game.
pub trait RankingGenerator {
    /// Ranks the players of `game` in its current state.
    fn compute_ranking(&self, game: &XoxGame) -> Ranking;
}

/// Ranking generator for Xox.
///
/// The owner of the completed line scores 1 and is listed first; every
/// other outcome, including a running game, scores 0 for both players in
/// seat order.
#[derive(Debug, Clone, Copy, Default)]
pub struct XoxRankingGenerator;

impl RankingGenerator for XoxRankingGenerator {
    #[instrument(skip_all, fields(finished = game.is_finished()))]
    fn compute_ranking(&self, game: &XoxGame) -> Ranking {
        if !game.is_finished() {
            return Ranking::new(game.players(), [0, 0], false);
        }
        let Some(winner) = game.board().line_owner() else {
            debug!("Game ended in a draw");
            return Ranking::new(game.players(), [0, 0], true);
        };

        debug!(?winner, "Game has a winner");
        let players = match winner {
            Seat::First => game.players(),
            Seat::Second => {
                let [first, second] = game.players();
                [second, first]
            }
        };
        Ranking::new(players, [1, 0], true)
    }
}
