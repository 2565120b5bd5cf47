//! The claim-field action, the only kind of action in Xox.

use crate::error::LogicError;
use crate::model::{BOARD_SIZE, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's request to claim the cell at `(x, y)`.
///
/// Actions are value objects. Two actions are equal when coordinates and
/// player are equal, which is how the interpreter recognises an offered
/// action. Deserialization runs the same bounds check as
/// [`ClaimFieldAction::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawClaimFieldAction")]
pub struct ClaimFieldAction {
    x: usize,
    y: usize,
    player: Player,
}

#[derive(Deserialize)]
struct RawClaimFieldAction {
    x: usize,
    y: usize,
    player: Player,
}

impl TryFrom<RawClaimFieldAction> for ClaimFieldAction {
    type Error = LogicError;

    fn try_from(raw: RawClaimFieldAction) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y, raw.player)
    }
}

impl ClaimFieldAction {
    /// Creates an action, rejecting coordinates outside of `[0, 2]`.
    #[instrument(skip(player), fields(player = %player.name()))]
    pub fn new(x: usize, y: usize, player: Player) -> Result<Self, LogicError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(LogicError::CoordinateOutOfBounds { x, y });
        }
        Ok(Self { x, y, player })
    }

    /// Column of the targeted cell.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row of the targeted cell.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Player claiming the cell.
    pub fn player(&self) -> &Player {
        &self.player
    }
}

impl std::fmt::Display for ClaimFieldAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{x:{},y:{},player:{}}}", self.x, self.y, self.player)
    }
}
