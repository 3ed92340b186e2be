//! Presentation reshaping of the board.
//!
//! A rendering layer usually draws the board as three lanes: one private
//! lane per player (their on-ramp before the middle and off-ramp after it,
//! with the start and finish stacks at the ends) and the shared middle
//! lane. [`BoardView`] is that layout as plain data, with an exact inverse
//! back to [`Board`]. No rule logic lives here.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Field, Player, Stones};

/// One player's private lane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLane {
    /// Stack on the start field (field 0).
    pub start: u8,
    /// Fields 1-4, in path order.
    pub on_ramp: [u8; 4],
    /// Fields 13-14, in path order.
    pub off_ramp: [u8; 2],
    /// Stack on the finish field (field 15).
    pub finish: u8,
}

/// The board laid out on the two player lanes plus the shared middle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub white: PlayerLane,
    pub black: PlayerLane,
    /// Shared fields 5-12 with both players' counts, in path order.
    pub middle: [Stones; 8],
}

impl BoardView {
    /// Lay a board out for display.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let lane = |player: Player| PlayerLane {
            start: board.stones(Field::START, player),
            on_ramp: std::array::from_fn(|i| board.stones(Field::new(i as u8 + 1), player)),
            off_ramp: std::array::from_fn(|i| board.stones(Field::new(i as u8 + 13), player)),
            finish: board.stones(Field::FINISH, player),
        };
        Self {
            white: lane(Player::White),
            black: lane(Player::Black),
            middle: std::array::from_fn(|i| board.field(Field::new(i as u8 + 5))),
        }
    }

    /// The inverse: reassemble the 16 index-addressed field records.
    #[must_use]
    pub fn to_board(&self) -> Board {
        let mut fields = [Stones::default(); 16];
        fields[0] = Stones::new(self.white.start, self.black.start);
        for i in 0..4 {
            fields[i + 1] = Stones::new(self.white.on_ramp[i], self.black.on_ramp[i]);
        }
        for (i, &record) in self.middle.iter().enumerate() {
            fields[i + 5] = record;
        }
        for i in 0..2 {
            fields[i + 13] = Stones::new(self.white.off_ramp[i], self.black.off_ramp[i]);
        }
        fields[15] = Stones::new(self.white.finish, self.black.finish);
        Board::from_fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scattered_board() -> Board {
        Board::new(7)
            .move_stone(Player::White, Field::START, Field::new(3))
            .move_stone(Player::White, Field::START, Field::new(8))
            .move_stone(Player::White, Field::START, Field::FINISH)
            .move_stone(Player::Black, Field::START, Field::new(1))
            .move_stone(Player::Black, Field::START, Field::new(12))
            .move_stone(Player::Black, Field::START, Field::new(14))
    }

    #[test]
    fn test_lane_layout() {
        let view = BoardView::from_board(&scattered_board());

        assert_eq!(view.white.start, 4);
        assert_eq!(view.white.on_ramp, [0, 0, 1, 0]);
        assert_eq!(view.white.finish, 1);

        assert_eq!(view.black.start, 4);
        assert_eq!(view.black.on_ramp, [1, 0, 0, 0]);
        assert_eq!(view.black.off_ramp, [0, 1]);

        // middle carries both players' counts
        assert_eq!(view.middle[3], Stones::new(1, 0)); // field 8
        assert_eq!(view.middle[7], Stones::new(0, 1)); // field 12
    }

    #[test]
    fn test_round_trip_is_exact() {
        let board = scattered_board();
        assert_eq!(BoardView::from_board(&board).to_board(), board);

        let fresh = Board::new(7);
        assert_eq!(BoardView::from_board(&fresh).to_board(), fresh);
    }

    #[test]
    fn test_view_carries_no_rule_state() {
        // reshaping conserves totals, like any pure relabeling
        let board = scattered_board();
        let back = BoardView::from_board(&board).to_board();
        for player in Player::both() {
            assert_eq!(back.total(player), 7);
        }
    }

    #[test]
    fn test_serde_shape() {
        let view = BoardView::from_board(&Board::new(2));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["white"]["start"], 2);
        assert_eq!(json["white"]["onRamp"], serde_json::json!([0, 0, 0, 0]));
        assert_eq!(json["middle"].as_array().unwrap().len(), 8);

        let back: BoardView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }
}
