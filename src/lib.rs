//! # ur-engine
//!
//! A rules engine for the Royal Game of Ur: a two-player race-and-capture
//! board game played with binary dice.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every operation is a pure computation over its
//!    inputs. Applying a move produces a brand-new state value; previously
//!    observed states are never mutated.
//!
//! 2. **Persistent Data Structures**: The board is backed by `im-rs`, so
//!    each transition shares structure with its predecessor.
//!
//! 3. **Randomness Is Injected**: Dice rolls draw from a caller-supplied
//!    [`GameRng`]. Seeding it is the reproducibility extension point; the
//!    engine itself holds no hidden randomness.
//!
//! ## Architecture
//!
//! Data flows one direction per call: caller -> turn resolver ->
//! {legality, application, win detection} -> new immutable state -> caller.
//! No component retains hidden state between calls.
//!
//! ## Modules
//!
//! - `core`: Players, fields, the board, dice, RNG
//! - `rules`: Move legality, move application, win detection
//! - `turn`: Turn states and the turn-resolution state machine
//! - `game`: Configuration and a thin stateful wrapper over the latest state
//! - `view`: Presentation reshaping of the board onto visual lanes

pub mod core;
pub mod rules;
pub mod turn;
pub mod game;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Board, DiceRoll, Field, FieldInfo, GameRng, Player, Stones};

pub use crate::rules::{is_legal, make_move, possible_moves, winner, Moves};

pub use crate::turn::{
    start_turn, take_turn, void_turn, GameState, Rejection, Terminal, TurnState,
};

pub use crate::game::{Game, GameSetup};

pub use crate::view::{BoardView, PlayerLane};
