//! Turn states and the turn-resolution state machine.

pub mod resolver;
pub mod state;

pub use resolver::{start_turn, take_turn, void_turn, Rejection};
pub use state::{GameState, Terminal, TurnState};
