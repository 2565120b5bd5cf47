//! Registry of running games and the external-facing contract.
//!
//! The manager deliberately never returns errors: unknown ids, unknown
//! players, stale action indices and illegal moves all come back as
//! `None`, an empty list, or a silent no-op. Failures are logged.

use super::action::ClaimFieldAction;
use super::ending::XoxEndingAnalyzer;
use super::generator::{ActionGenerator, XoxActionGenerator};
use super::interpreter::{ActionInterpreter, XoxActionInterpreter};
use super::ranking::{Ranking, RankingGenerator, XoxRankingGenerator};
use crate::config::XoxConfig;
use crate::model::{Board, Player, XoxGame, XoxInitSettings};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Opaque 64-bit game handle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct GameId(u64);

impl GameId {
    /// Raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

type SharedGame = Arc<Mutex<XoxGame>>;

/// Keyed registry of concurrent Xox games.
///
/// Cloning yields another handle to the same registry. The map is guarded
/// by one lock and every game by its own, so actions on different games
/// never wait on each other while actions on the same game are applied one
/// at a time.
#[derive(Debug, Clone)]
pub struct XoxManager {
    games: Arc<Mutex<HashMap<GameId, SharedGame>>>,
    generator: XoxActionGenerator,
    interpreter: XoxActionInterpreter,
    ranking: XoxRankingGenerator,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Moves are validated before anything is written; a poisoned game is
    // still consistent.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl XoxManager {
    /// Creates a manager with the default sample game.
    pub fn new() -> Self {
        Self::from_config(&XoxConfig::default())
    }

    /// Creates a manager, seeding the sample game described by `config`.
    #[instrument(skip_all)]
    pub fn from_config(config: &XoxConfig) -> Self {
        let generator = XoxActionGenerator;
        let manager = Self {
            games: Arc::new(Mutex::new(HashMap::new())),
            generator,
            interpreter: XoxActionInterpreter::new(generator, XoxEndingAnalyzer),
            ranking: XoxRankingGenerator,
        };

        let sample = config.sample_game();
        if *sample.enabled() {
            let [first, second] = sample.players().clone();
            let id = GameId(*sample.id());
            lock(&manager.games).insert(id, Arc::new(Mutex::new(XoxGame::new(first, second))));
            info!(game_id = %id, "Seeded sample game");
        }
        manager
    }

    /// Ids of all registered games, ascending.
    #[instrument(skip(self))]
    pub fn games(&self) -> Vec<GameId> {
        let mut ids: Vec<_> = lock(&self.games).keys().copied().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed games");
        ids
    }

    /// Registers a new game for the given settings, creator on the first
    /// seat, and returns its freshly drawn id.
    #[instrument(skip(self, settings), fields(creator = %settings.creator()))]
    pub fn add_game(&self, settings: &XoxInitSettings) -> GameId {
        let (first, second) = settings.seated_players();
        let mut games = lock(&self.games);
        let id = loop {
            let candidate = GameId(rand::random());
            if !games.contains_key(&candidate) {
                break candidate;
            }
        };
        games.insert(id, Arc::new(Mutex::new(XoxGame::new(first, second))));
        info!(game_id = %id, "Created game");
        id
    }

    /// Removes a game in whatever state it is. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn remove_game(&self, id: GameId) {
        if lock(&self.games).remove(&id).is_some() {
            info!(game_id = %id, "Removed game");
        } else {
            debug!(game_id = %id, "Nothing to remove");
        }
    }

    fn game(&self, id: GameId) -> Option<SharedGame> {
        let game = lock(&self.games).get(&id).cloned();
        if game.is_none() {
            debug!(game_id = %id, "Game not found");
        }
        game
    }

    /// Snapshot of the board, `None` for an unknown game.
    #[instrument(skip(self))]
    pub fn board(&self, id: GameId) -> Option<Board> {
        let game = self.game(id)?;
        let game = lock(&game);
        Some(game.board().clone())
    }

    /// Both players in seat order, `None` for an unknown game.
    #[instrument(skip(self))]
    pub fn players(&self, id: GameId) -> Option<[Player; 2]> {
        let game = self.game(id)?;
        let players = lock(&game).players();
        Some(players)
    }

    /// Actions currently offered to the named player.
    ///
    /// Empty for an unknown game, an unknown player, a player who is not on
    /// turn, or a finished game. Clients refer to an action by its position
    /// in this list, which is only meaningful until the next move.
    #[instrument(skip(self))]
    pub fn actions(&self, id: GameId, player: &str) -> Vec<ClaimFieldAction> {
        let Some(game) = self.game(id) else {
            return Vec::new();
        };
        let game = lock(&game);
        self.actions_locked(&game, player)
    }

    fn actions_locked(&self, game: &XoxGame, player: &str) -> Vec<ClaimFieldAction> {
        let Some(player) = game.player_by_name(player) else {
            debug!(player, "Player not found in game");
            return Vec::new();
        };
        self.generator
            .generate_actions(game, player)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Action generation failed");
                Vec::new()
            })
    }

    /// Applies the action at `index` of the named player's action list.
    ///
    /// Listing and applying happen under the game's lock, so concurrent
    /// calls for one game are serialized. Any failure is a no-op.
    #[instrument(skip(self))]
    pub fn perform_action(&self, id: GameId, player: &str, index: usize) {
        let Some(game) = self.game(id) else {
            return;
        };
        let mut game = lock(&game);
        let offered = self.actions_locked(&game, player);
        let Some(action) = offered.get(index) else {
            warn!(index, offered = offered.len(), "Action index not offered");
            return;
        };
        if let Err(e) = self.interpreter.interpret_and_apply(action, &mut game) {
            warn!(error = %e, "Action ignored");
        }
    }

    /// Current ranking, `None` for an unknown game.
    #[instrument(skip(self))]
    pub fn ranking(&self, id: GameId) -> Option<Ranking> {
        let game = self.game(id)?;
        let game = lock(&game);
        Some(self.ranking.compute_ranking(&game))
    }
}

impl Default for XoxManager {
    fn default() -> Self {
        Self::new()
    }
}
