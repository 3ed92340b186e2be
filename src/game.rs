//! Game configuration and the stateful convenience wrapper.
//!
//! The engine proper is the pure transition functions in [`crate::turn`];
//! [`Game`] is the thin layer that holds "the latest state" for callers who
//! want one, replacing it wholesale on every accepted action.

use crate::core::{Board, Field, GameRng, Player};
use crate::turn::{start_turn, take_turn, void_turn, GameState, Rejection};

/// Configuration recognized at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSetup {
    stones_per_player: u8,
    dice_count: usize,
    starting_player: Player,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            stones_per_player: 7,
            dice_count: 4,
            starting_player: Player::White,
        }
    }
}

impl GameSetup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stones in each player's allotment. Default 7.
    #[must_use]
    pub fn stones_per_player(mut self, count: u8) -> Self {
        self.stones_per_player = count;
        self
    }

    /// Number of binary dice rolled per turn. Default 4; must be at least 1.
    #[must_use]
    pub fn dice_count(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    /// Which player rolls first. Default white.
    #[must_use]
    pub fn starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Produce the first turn state with the given RNG.
    ///
    /// Panics on a zero dice count.
    #[must_use]
    pub fn start(self, rng: &mut GameRng) -> GameState {
        assert!(self.dice_count > 0, "dice count must be at least 1");
        GameState::AwaitingMove(start_turn(
            self.starting_player,
            self.dice_count,
            Board::new(self.stones_per_player),
            rng,
        ))
    }
}

/// A running game: the latest state plus the dice RNG.
///
/// Each accepted action replaces the state wholesale; nothing is mutated in
/// place, so a caller may keep any state it has observed.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    rng: GameRng,
}

impl Game {
    /// Start a game with entropy-seeded dice.
    #[must_use]
    pub fn new(setup: GameSetup) -> Self {
        Self::with_rng(setup, GameRng::from_entropy())
    }

    /// Start a game with a fixed seed. Reproducibility extension: the same
    /// seed and action sequence replay identically.
    #[must_use]
    pub fn with_seed(setup: GameSetup, seed: u64) -> Self {
        Self::with_rng(setup, GameRng::new(seed))
    }

    fn with_rng(setup: GameSetup, mut rng: GameRng) -> Self {
        let state = setup.start(&mut rng);
        Self { state, rng }
    }

    /// The latest state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Resolve the current turn. On success the new latest state is
    /// returned; on rejection the state is unchanged.
    pub fn take_turn(
        &mut self,
        acting: Player,
        source: Option<Field>,
    ) -> Result<&GameState, Rejection> {
        let next = match &self.state {
            GameState::AwaitingMove(turn) => take_turn(turn, acting, source, &mut self.rng)?,
            GameState::GameOver(_) => return Err(Rejection::GameFinished),
        };
        self.state = next;
        Ok(&self.state)
    }

    /// Forfeit the current turn.
    pub fn void_turn(&mut self, acting: Player) -> Result<&GameState, Rejection> {
        let next = match &self.state {
            GameState::AwaitingMove(turn) => void_turn(turn, acting, &mut self.rng)?,
            GameState::GameOver(_) => return Err(Rejection::GameFinished),
        };
        self.state = GameState::AwaitingMove(next);
        Ok(&self.state)
    }
}
