//! The rules proper: move legality, move application, win detection.

pub mod apply;
pub mod legality;

pub use apply::{make_move, winner};
pub use legality::{is_legal, possible_moves, Moves};
