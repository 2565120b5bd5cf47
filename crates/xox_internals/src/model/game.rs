//! Session state of a running Xox game.

use super::board::{Board, Seat};
use super::player::Player;
use crate::error::ModelAccessError;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Authoritative state of one game.
///
/// Owns the board, the two players in fixed seats, the seat whose turn it
/// is and the finished flag. The flag only ever goes from `false` to
/// `true`. Mutating accessors are crate-private so the interpreter and the
/// ending analyzer stay the only writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XoxGame {
    players: [Player; 2],
    board: Board,
    current: Seat,
    finished: bool,
}

impl XoxGame {
    /// Creates a game on an empty board. `first` moves first.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
            board: Board::new(),
            current: Seat::First,
            finished: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Copy of both players, seat order.
    pub fn players(&self) -> [Player; 2] {
        self.players.clone()
    }

    /// Player on the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Looks up a participant by name.
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Seat of the given player, `None` if they do not take part.
    pub fn seat_of(&self, player: &Player) -> Option<Seat> {
        Seat::iter().find(|seat| self.player(*seat) == player)
    }

    /// True if the player holds the first seat.
    pub fn is_first_player(&self, player: &Player) -> bool {
        self.players[0] == *player
    }

    /// Seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Index (0 or 1) of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        self.current.index()
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Name of the player whose turn it is.
    pub fn current_player_name(&self) -> &str {
        self.current_player().name()
    }

    /// Hands the turn to the seat with the given index.
    #[instrument(skip(self))]
    pub(crate) fn set_current_player(&mut self, index: usize) -> Result<(), ModelAccessError> {
        let seat = Seat::from_index(index).ok_or_else(|| {
            ModelAccessError::new(format!(
                "Current player can not be set to {}, only 0 or 1",
                index
            ))
        })?;
        self.current = seat;
        Ok(())
    }

    /// True once the game ended by a completed line or a full board.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn mark_as_finished(&mut self) {
        if !self.finished {
            info!(winner = ?self.board.line_owner(), "Game finished");
        }
        self.finished = true;
    }
}
