//! Shared helpers for Xox integration tests.

#![allow(dead_code)]

use xox_internals::{ActionGenerator, ClaimFieldAction, Player, XoxActionGenerator, XoxGame};

pub fn x() -> Player {
    Player::new("X", "#000000")
}

pub fn o() -> Player {
    Player::new("O", "#FFFFFF")
}

pub fn new_game() -> XoxGame {
    XoxGame::new(x(), o())
}

/// Retrieves the offered actions for `player`, asserts their count, and
/// picks the one targeting `(x, y)`.
pub fn pick(
    game: &XoxGame,
    player: &Player,
    expected_count: usize,
    x: usize,
    y: usize,
) -> ClaimFieldAction {
    let actions = XoxActionGenerator
        .generate_actions(game, player)
        .expect("player takes part");
    assert_eq!(actions.len(), expected_count);
    actions
        .into_iter()
        .find(|a| a.x() == x && a.y() == y)
        .expect("cell is offered")
}
