//! Line-oriented adapter between a terminal and the [`XoxManager`].
//!
//! Requests that the manager ignores print nothing beyond an empty result,
//! mirroring the manager's own contract.

use crate::cli::Scenario;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use xox_internals::{GameId, Player, XoxInitSettings, XoxManager};

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Games,
    New { creator: String, other: String },
    Board(GameId),
    Players(GameId),
    Actions { id: GameId, player: String },
    Act { id: GameId, player: String, index: usize },
    Ranking(GameId),
    Remove(GameId),
    Help,
    Quit,
}

const HELP: &str = "\
games                      list game ids
new <creator> <other>      create a game, creator moves first
board <id>                 show the board
players <id>               show both players
actions <id> <name>        list actions offered to a player
act <id> <name> <index>    perform the action at index
ranking <id>               show scores
remove <id>                delete a game
quit                       leave";

impl Request {
    #[instrument]
    fn parse(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let id = |i: usize| -> Result<GameId> {
            let raw = words.get(i).context("missing game id")?;
            let value: u64 = raw.parse().with_context(|| format!("bad game id {}", raw))?;
            Ok(GameId::from(value))
        };
        let word = |i: usize| -> Result<String> {
            words
                .get(i)
                .map(|w| w.to_string())
                .context("missing player name")
        };

        let request = match words.first().copied() {
            Some("games") => Request::Games,
            Some("new") => Request::New {
                creator: word(1)?,
                other: word(2)?,
            },
            Some("board") => Request::Board(id(1)?),
            Some("players") => Request::Players(id(1)?),
            Some("actions") => Request::Actions {
                id: id(1)?,
                player: word(2)?,
            },
            Some("act") => Request::Act {
                id: id(1)?,
                player: word(2)?,
                index: words
                    .get(3)
                    .context("missing action index")?
                    .parse::<usize>()
                    .context("bad action index")?,
            },
            Some("ranking") => Request::Ranking(id(1)?),
            Some("remove") => Request::Remove(id(1)?),
            Some("help") => Request::Help,
            Some("quit") | Some("exit") => Request::Quit,
            Some(other) => anyhow::bail!("unknown command {}", other),
            None => Request::Help,
        };
        Ok(request)
    }
}

/// Colours handed out to players created from the terminal.
const COLOURS: [&str; 2] = ["#CAFFEE", "#1CE7EA"];

fn handle(manager: &XoxManager, request: Request, out: &mut impl Write) -> Result<()> {
    match request {
        Request::Games => {
            for id in manager.games() {
                writeln!(out, "{}", id)?;
            }
        }
        Request::New { creator, other } => {
            let players = vec![
                Player::new(creator.as_str(), COLOURS[0]),
                Player::new(other, COLOURS[1]),
            ];
            let settings = XoxInitSettings::new(players, creator)?;
            writeln!(out, "{}", manager.add_game(&settings))?;
        }
        Request::Board(id) => {
            if let Some(board) = manager.board(id) {
                writeln!(out, "{}", board)?;
            }
        }
        Request::Players(id) => {
            if let Some(players) = manager.players(id) {
                writeln!(out, "{}", serde_json::to_string(&players)?)?;
            }
        }
        Request::Actions { id, player } => {
            for (index, action) in manager.actions(id, &player).iter().enumerate() {
                writeln!(out, "{}: ({}, {})", index, action.x(), action.y())?;
            }
        }
        Request::Act { id, player, index } => manager.perform_action(id, &player, index),
        Request::Ranking(id) => {
            if let Some(ranking) = manager.ranking(id) {
                writeln!(out, "{}", serde_json::to_string(&ranking)?)?;
            }
        }
        Request::Remove(id) => manager.remove_game(id),
        Request::Help => writeln!(out, "{}", HELP)?,
        Request::Quit => {}
    }
    Ok(())
}

/// Serves requests from `input` until it ends or `quit` is read.
#[instrument(skip_all)]
pub fn run_session(manager: &XoxManager, input: impl BufRead, mut out: impl Write) -> Result<()> {
    info!("Session started");
    for line in input.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }
        match Request::parse(&line) {
            Ok(Request::Quit) => break,
            Ok(request) => {
                debug!(?request, "Handling request");
                if let Err(e) = handle(manager, request, &mut out) {
                    warn!(error = %e, "Request failed");
                    writeln!(out, "error: {}", e)?;
                }
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        out.flush()?;
    }
    info!("Session ended");
    Ok(())
}

/// Cells claimed in turn, first player first.
fn script(scenario: Scenario) -> &'static [(usize, usize)] {
    match scenario {
        Scenario::Draw => &[
            (0, 0),
            (2, 2),
            (1, 2),
            (0, 2),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 0),
            (2, 0),
        ],
        Scenario::Vertical => &[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)],
    }
}

/// Plays a scripted game through the manager and prints the outcome.
#[instrument(skip(manager))]
pub fn run_demo(manager: &XoxManager, scenario: Scenario) -> Result<()> {
    let settings = XoxInitSettings::new(
        vec![Player::new("X", "#000000"), Player::new("O", "#FFFFFF")],
        "X",
    )?;
    let id = manager.add_game(&settings);
    let mut out = std::io::stdout().lock();

    for (turn, &(x, y)) in script(scenario).iter().enumerate() {
        let name = if turn % 2 == 0 { "X" } else { "O" };
        let index = manager
            .actions(id, name)
            .iter()
            .position(|a| a.x() == x && a.y() == y)
            .with_context(|| format!("({}, {}) is not offered to {}", x, y, name))?;
        manager.perform_action(id, name, index);
    }

    let board = manager.board(id).context("demo game vanished")?;
    let ranking = manager.ranking(id).context("demo game vanished")?;
    writeln!(out, "{}\n", board)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&ranking)?)?;
    manager.remove_game(id);
    Ok(())
}
