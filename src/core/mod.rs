//! Core engine types: players, fields, the board, dice, RNG.
//!
//! Everything here is rules-agnostic bookkeeping; the legality and
//! turn-resolution logic lives in `rules` and `turn`.

pub mod board;
pub mod dice;
pub mod field;
pub mod player;
pub mod rng;

pub use board::Board;
pub use dice::DiceRoll;
pub use field::{Field, FieldInfo};
pub use player::{Player, Stones};
pub use rng::GameRng;
