//! Binary dice.
//!
//! A roll is an ordered sequence of independent binary outcomes; the move
//! distance is their sum. Four dice is the standard configuration, so the
//! sequence lives inline in a `SmallVec`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// One roll of the binary dice.
///
/// Serializes as a plain array of 0/1 values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiceRoll {
    values: SmallVec<[u8; 4]>,
}

impl DiceRoll {
    /// Roll `count` dice.
    #[must_use]
    pub fn cast(count: usize, rng: &mut GameRng) -> Self {
        Self {
            values: (0..count).map(|_| rng.flip()).collect(),
        }
    }

    /// A roll from explicit outcomes, for tests and replays.
    ///
    /// Panics if any value is not 0 or 1.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Self {
        assert!(
            values.iter().all(|&v| v <= 1),
            "dice values must be 0 or 1"
        );
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    /// The dice result: sum of the outcomes, in `0..=count`.
    #[must_use]
    pub fn result(&self) -> u8 {
        self.values.iter().sum()
    }

    /// Number of dice in the roll.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// The individual outcomes, in roll order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}
