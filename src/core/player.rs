//! Player identity and per-player stone counts.
//!
//! ## Player
//!
//! One of two symmetric tokens, white or black. Every rule is symmetric
//! under a player swap, so the engine never special-cases either side.
//!
//! ## Stones
//!
//! A per-player stone count for a single field. This is the unit the board
//! is made of, and the record shape consumers see when the board is
//! serialized.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// Serializes as `"w"` / `"b"`, the engine's documented wire tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Player {
    /// The opposing player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Both players, white first.
    #[must_use]
    pub const fn both() -> [Player; 2] {
        [Player::White, Player::Black]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "w"),
            Player::Black => write!(f, "b"),
        }
    }
}

/// Stone counts for a single field, one per player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stones {
    pub w: u8,
    pub b: u8,
}

impl Stones {
    /// A field record with the given counts.
    #[must_use]
    pub const fn new(w: u8, b: u8) -> Self {
        Self { w, b }
    }

    /// Count for one player.
    #[must_use]
    pub const fn get(self, player: Player) -> u8 {
        match player {
            Player::White => self.w,
            Player::Black => self.b,
        }
    }

    /// Copy with one player's count replaced.
    #[must_use]
    pub const fn with(self, player: Player, count: u8) -> Self {
        match player {
            Player::White => Self { w: count, b: self.b },
            Player::Black => Self { w: self.w, b: count },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::both() {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::White), "w");
        assert_eq!(format!("{}", Player::Black), "b");
    }

    #[test]
    fn test_stones_get_with() {
        let stones = Stones::new(3, 1);
        assert_eq!(stones.get(Player::White), 3);
        assert_eq!(stones.get(Player::Black), 1);

        let updated = stones.with(Player::Black, 5);
        assert_eq!(updated.get(Player::Black), 5);
        assert_eq!(updated.get(Player::White), 3);
        // original untouched
        assert_eq!(stones.get(Player::Black), 1);
    }

    #[test]
    fn test_player_serde_tokens() {
        assert_eq!(serde_json::to_string(&Player::White).unwrap(), "\"w\"");
        assert_eq!(serde_json::to_string(&Player::Black).unwrap(), "\"b\"");

        let back: Player = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(back, Player::Black);
    }

    #[test]
    fn test_stones_serde_shape() {
        let json = serde_json::to_string(&Stones::new(7, 0)).unwrap();
        assert_eq!(json, "{\"w\":7,\"b\":0}");
    }
}
