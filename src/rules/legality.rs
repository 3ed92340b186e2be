//! Move legality and legal-move enumeration.
//!
//! A destination is legal when it exists (no wraparound past the finish),
//! is not stacked on by the mover outside a multi field, and is not a
//! safe shared field the opponent holds.
//!
//! When a destination fails only on the last rule, the bump rule applies:
//! the mover may land one field past the blocked safe field instead, if
//! that field is itself legal. The bump never applies when the mover
//! already holds the safe field.

use rustc_hash::FxHashMap;

use crate::core::{Board, Field, Player};

/// The legal moves for one turn: source field to resolved destination.
///
/// At most one destination per source, since the destination is determined
/// by the dice result (plus at most the one-field bump).
pub type Moves = FxHashMap<Field, Field>;

/// Whether `player` may land on `dest`.
///
/// Implements the occupancy rules; destination existence is enforced by the
/// `Field` type itself.
#[must_use]
pub fn is_legal(player: Player, dest: Field, board: &Board) -> bool {
    if !dest.is_multi() && board.stones(dest, player) > 0 {
        return false;
    }
    if dest.is_safe_shared() && board.stones(dest, player.opponent()) > 0 {
        return false;
    }
    true
}

/// All legal moves for `player` given `dice_result` on `board`.
///
/// A dice result of 0 yields no moves. Source fields without the player's
/// stones are skipped.
#[must_use]
pub fn possible_moves(player: Player, dice_result: u8, board: &Board) -> Moves {
    let mut moves = Moves::default();
    if dice_result == 0 {
        return moves;
    }

    for source in Field::all() {
        if board.stones(source, player) == 0 {
            continue;
        }
        let Some(dest) = source.advanced(dice_result) else {
            continue;
        };

        if is_legal(player, dest, board) {
            moves.insert(source, dest);
        } else if dest.is_safe_shared()
            && board.stones(dest, player) == 0
            && board.stones(dest, player.opponent()) > 0
        {
            // blocked safe field: try one field further
            if let Some(bumped) = dest.advanced(1) {
                if is_legal(player, bumped, board) {
                    moves.insert(source, bumped);
                }
            }
        }
    }

    moves
}
