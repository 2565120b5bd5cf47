//! Game state model: board, players and the game aggregate.

mod board;
mod game;
mod player;
mod settings;

pub use board::{BOARD_SIZE, Board, Cell, Seat};
pub use game::XoxGame;
pub use player::Player;
pub use settings::XoxInitSettings;
