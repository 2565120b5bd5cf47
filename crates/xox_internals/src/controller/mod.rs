//! Blackboard controller: action generation, interpretation, game-end
//! detection, ranking, and the game registry.

mod action;
mod ending;
mod generator;
mod interpreter;
mod manager;
mod ranking;

pub use action::ClaimFieldAction;
pub use ending::{EndingAnalyzer, XoxEndingAnalyzer};
pub use generator::{ActionGenerator, XoxActionGenerator};
pub use interpreter::{ActionInterpreter, XoxActionInterpreter};
pub use manager::{GameId, XoxManager};
pub use ranking::{Ranking, RankingGenerator, XoxRankingGenerator};
