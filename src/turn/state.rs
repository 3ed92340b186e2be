//! The externally visible units of state.
//!
//! A [`TurnState`] is created at the start of every turn (fresh roll, fresh
//! legal-move set) and is immutable from then on; resolving it produces a
//! brand-new `TurnState` or a [`Terminal`]. Both serialize as the plain
//! nested shape a rendering or transport layer consumes: the board as 16
//! `{w, b}` records, dice as an array of 0/1, possible moves as a
//! source-to-destination mapping.

use serde::{Deserialize, Serialize};

use crate::core::{Board, DiceRoll, Player};
use crate::rules::Moves;

/// State awaiting the current player's move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnState {
    pub current_player: Player,
    pub dice: DiceRoll,
    pub dice_result: u8,
    pub possible_moves: Moves,
    pub board: Board,
}

/// State of a finished game. Accepts no further transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    pub winner: Player,
    pub board: Board,
}

/// Either side of the state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameState {
    AwaitingMove(TurnState),
    GameOver(Terminal),
}

impl GameState {
    /// The board, in either state.
    #[must_use]
    pub fn board(&self) -> &Board {
        match self {
            GameState::AwaitingMove(turn) => &turn.board,
            GameState::GameOver(terminal) => &terminal.board,
        }
    }

    /// The pending turn, if the game is still running.
    #[must_use]
    pub fn turn(&self) -> Option<&TurnState> {
        match self {
            GameState::AwaitingMove(turn) => Some(turn),
            GameState::GameOver(_) => None,
        }
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::AwaitingMove(_) => None,
            GameState::GameOver(terminal) => Some(terminal.winner),
        }
    }
}
