//! Move application and win detection.

use crate::core::{Board, Field, Player};

/// Apply a resolved move, capturing on shared fields.
///
/// Moves one of `player`'s stones from `from` to `to`. If `to` is a shared
/// field the opponent occupies, the opponent's whole count there returns to
/// their start. Safe shared fields never reach this point occupied, because
/// they are never legal destinations in that case.
#[must_use]
pub fn make_move(player: Player, from: Field, to: Field, board: &Board) -> Board {
    let mut board = board.move_stone(player, from, to);
    let opponent = player.opponent();
    if to.is_shared() {
        while board.stones(to, opponent) > 0 {
            board = board.move_stone(opponent, to, Field::START);
        }
    }
    board
}

/// The winner, if any.
///
/// A player has won when exactly one field holds any of their stones and
/// that field is the finish. The finish is a multi field, so this is
/// equivalent to "all stones on the finish" without consulting the
/// configured allotment.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    Player::both().into_iter().find(|&player| {
        board.occupied_field_count(player) == 1
            && board.stones(Field::FINISH, player) > 0
    })
}
