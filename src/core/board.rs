//! The board: 16 per-field stone-count records.
//!
//! Backed by `im::Vector`, so every update is persistent: the primitives
//! return a new `Board` that shares structure with its predecessor, and a
//! previously observed board is never mutated.
//!
//! Invariant: a player's total stone count across all fields never changes.
//! Stones only move between fields; the only field-0 traffic is the initial
//! placement and capture-to-start. Decrementing a zero count would break the
//! invariant and is a contract violation, asserted here.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::field::{Field, FIELD_COUNT};
use super::player::{Player, Stones};

/// Field-occupancy records for all 16 fields, index-addressed.
///
/// Serializes as an array of 16 `{w, b}` records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    fields: Vector<Stones>,
}

impl Board {
    /// A fresh board with each player's whole allotment on the start field.
    #[must_use]
    pub fn new(stones_per_player: u8) -> Self {
        let fields = Field::all()
            .map(|field| {
                if field == Field::START {
                    Stones::new(stones_per_player, stones_per_player)
                } else {
                    Stones::default()
                }
            })
            .collect();
        Self { fields }
    }

    /// A board from 16 explicit field records.
    ///
    /// Used by the view inverse and by tests; the rules themselves only ever
    /// build boards through [`Board::new`] and the transfer primitives.
    #[must_use]
    pub fn from_fields(fields: [Stones; FIELD_COUNT as usize]) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Stone count for one player at one field.
    #[must_use]
    pub fn stones(&self, field: Field, player: Player) -> u8 {
        self.fields[field.index() as usize].get(player)
    }

    /// The full record at one field.
    #[must_use]
    pub fn field(&self, field: Field) -> Stones {
        self.fields[field.index() as usize]
    }

    /// A player's total stone count across the whole board.
    #[must_use]
    pub fn total(&self, player: Player) -> u16 {
        self.fields.iter().map(|s| s.get(player) as u16).sum()
    }

    /// Number of distinct fields where the player holds at least one stone.
    #[must_use]
    pub fn occupied_field_count(&self, player: Player) -> usize {
        self.fields.iter().filter(|s| s.get(player) > 0).count()
    }

    /// A board with one more of `player`'s stones at `field`.
    #[must_use]
    pub fn increment(&self, field: Field, player: Player) -> Self {
        let record = self.field(field);
        self.with_field(field, record.with(player, record.get(player) + 1))
    }

    /// A board with one fewer of `player`'s stones at `field`.
    ///
    /// Panics if the count is already zero; the caller must only decrement
    /// fields it knows to be occupied.
    #[must_use]
    pub fn decrement(&self, field: Field, player: Player) -> Self {
        let record = self.field(field);
        let count = record.get(player);
        assert!(count > 0, "decrement of empty field {field} for {player}");
        self.with_field(field, record.with(player, count - 1))
    }

    /// A board with one of `player`'s stones moved from `from` to `to`.
    #[must_use]
    pub fn move_stone(&self, player: Player, from: Field, to: Field) -> Self {
        self.decrement(from, player).increment(to, player)
    }

    fn with_field(&self, field: Field, record: Stones) -> Self {
        Self {
            fields: self.fields.update(field.index() as usize, record),
        }
    }
}
