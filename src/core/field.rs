//! Board field indices and their static classification.
//!
//! The board has 16 fields. Field 0 is the start, field 15 the finish;
//! both players traverse the same index sequence, overlapping on the
//! shared middle segment.
//!
//! Classification is static and computed from the index alone:
//!
//! - `shared`: fields 5-12, on both players' paths; captures happen here.
//! - `reroll`: fields 4, 8 and 14; landing grants another turn.
//! - `safe_shared`: shared AND reroll (field 8); a resident stone there
//!   cannot be captured.
//! - `multi`: fields 0 and 15; a player may stack any number of own stones.

use serde::{Deserialize, Serialize};

/// Number of fields on the board.
pub const FIELD_COUNT: u8 = 16;

/// A board field index in `0..16`.
///
/// The range restriction lives in the constructor, so any `Field` held by
/// the engine is a valid board index. An out-of-range index is a
/// programming-contract violation, not a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Field(u8);

impl Field {
    /// The start field, where all stones begin (and captured stones return).
    pub const START: Field = Field(0);

    /// The finish field. All of a player's stones converging here wins.
    pub const FINISH: Field = Field(15);

    /// Create a field index.
    ///
    /// Panics if `index` is not in `0..16`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < FIELD_COUNT, "field index out of range");
        Self(index)
    }

    /// The raw index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The field `by` steps ahead, or `None` past the finish.
    ///
    /// There is no wraparound: a destination beyond field 15 does not exist.
    #[must_use]
    pub fn advanced(self, by: u8) -> Option<Field> {
        let index = self.0 as u16 + by as u16;
        (index < FIELD_COUNT as u16).then(|| Field(index as u8))
    }

    /// Iterate over all 16 fields in order.
    pub fn all() -> impl Iterator<Item = Field> {
        (0..FIELD_COUNT).map(Field)
    }

    /// On the overlapping segment of both players' paths.
    #[must_use]
    pub const fn is_shared(self) -> bool {
        self.0 >= 5 && self.0 <= 12
    }

    /// Landing here grants the mover another turn.
    #[must_use]
    pub const fn is_reroll(self) -> bool {
        matches!(self.0, 4 | 8 | 14)
    }

    /// Shared and reroll: a resident stone here cannot be captured.
    #[must_use]
    pub const fn is_safe_shared(self) -> bool {
        self.is_shared() && self.is_reroll()
    }

    /// Start or finish: own stones may stack without limit.
    #[must_use]
    pub const fn is_multi(self) -> bool {
        matches!(self.0, 0 | 15)
    }

    /// The full classification record for this field.
    #[must_use]
    pub const fn info(self) -> FieldInfo {
        FieldInfo {
            shared: self.is_shared(),
            reroll: self.is_reroll(),
            safe_shared: self.is_safe_shared(),
            multi: self.is_multi(),
        }
    }

    /// Classification for all 16 fields, indexed by field.
    #[must_use]
    pub fn classify_all() -> [FieldInfo; FIELD_COUNT as usize] {
        std::array::from_fn(|i| Field(i as u8).info())
    }
}

impl From<Field> for u8 {
    fn from(field: Field) -> u8 {
        field.0
    }
}

// Fields appear both as plain integers and as map keys in the serialized
// move mapping, and map keys reach us as strings from self-describing
// formats, so the visitor accepts both.
impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FieldVisitor;

        impl serde::de::Visitor<'_> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "a field index in 0..16")
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Field, E> {
                if value < FIELD_COUNT as u64 {
                    Ok(Field(value as u8))
                } else {
                    Err(E::custom(format!("field index {value} out of range")))
                }
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Field, E> {
                u64::try_from(value)
                    .map_err(|_| E::custom(format!("field index {value} out of range")))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Field, E> {
                let index: u64 = value
                    .parse()
                    .map_err(|_| E::custom(format!("invalid field index {value:?}")))?;
                self.visit_u64(index)
            }
        }

        deserializer.deserialize_any(FieldVisitor)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static classification of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub shared: bool,
    pub reroll: bool,
    pub safe_shared: bool,
    pub multi: bool,
}
