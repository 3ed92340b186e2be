//! Random number generation for dice rolls.
//!
//! The base contract only needs uniform binary outcomes. The engine draws
//! them from a `GameRng` the caller owns and passes in, so reproducibility
//! is an injection decision, not an engine one: seed it for deterministic
//! replays, or construct it from entropy for live play.
//!
//! ```
//! use ur_engine::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! for _ in 0..32 {
//!     assert_eq!(a.flip(), b.flip());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG over ChaCha8.
///
/// ChaCha8 is fast and produces identical sequences from identical seeds on
/// every platform, which is what replay tests rely on.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a seeded RNG. Same seed, same sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// A single uniform binary outcome: 0 or 1.
    pub fn flip(&mut self) -> u8 {
        self.inner.gen_range(0..=1)
    }
}
