//! Game-end detection.

use crate::model::XoxGame;
use tracing::{debug, instrument};

/// Decides whether a game reached its end and flags it.
pub trait EndingAnalyzer {
    /// Marks the game finished if it is over. Calling it again is a no-op.
    fn analyze_and_update(&self, game: &mut XoxGame);
}

/// Ending analyzer for Xox: a game is over on a completed line or a full
/// board.
#[derive(Debug, Clone, Copy, Default)]
pub struct XoxEndingAnalyzer;

impl EndingAnalyzer for XoxEndingAnalyzer {
    #[instrument(skip_all, fields(finished = game.is_finished()))]
    fn analyze_and_update(&self, game: &mut XoxGame) {
        if game.is_finished() {
            return;
        }
        let board = game.board();
        if board.is_three_in_a_line() || board.is_full() {
            game.mark_as_finished();
        } else {
            debug!("Game continues");
        }
    }
}
