//! Deterministic dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Injectable**: The engine rolls through `DiceSource`, so tests can
//!   script exact sequences with `LoadedDice`
//!
//! ## Usage
//!
//! ```
//! use monopoly_sim::core::{DiceSource, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same rolls
//! assert_eq!(rng1.roll(), rng2.roll());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// The result of throwing two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    /// Create a roll from two face values.
    ///
    /// Panics if either value is not a valid face.
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        assert!(
            (1..=DIE_FACES).contains(&first) && (1..=DIE_FACES).contains(&second),
            "Die faces must be in 1..={DIE_FACES}, got ({first}, {second})"
        );
        Self { first, second }
    }

    /// Both dice show the same face.
    #[must_use]
    pub fn is_doubles(self) -> bool {
        self.first == self.second
    }

    /// Sum of both dice.
    #[must_use]
    pub fn total(self) -> i32 {
        i32::from(self.first) + i32::from(self.second)
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Anything that can throw a pair of dice for the turn engine.
pub trait DiceSource {
    /// Throw both dice.
    fn roll(&mut self) -> DiceRoll;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> DiceRoll {
        (**self).roll()
    }
}

/// Seeded dice backed by ChaCha8.
///
/// One `GameRng` is owned per simulation run; every roll of every player is
/// drawn from it in round-major, then player-major order.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn OS seed.
    ///
    /// The seed is kept so the run can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Throw a single die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll { first, second }
    }
}

/// Dice that replay a fixed script of rolls.
///
/// ```
/// use monopoly_sim::core::{DiceRoll, DiceSource, LoadedDice};
///
/// let mut dice = LoadedDice::new([(3, 4), (6, 6)]);
/// assert_eq!(dice.roll(), DiceRoll::new(3, 4));
/// assert_eq!(dice.roll(), DiceRoll::new(6, 6));
/// assert!(dice.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoadedDice {
    script: VecDeque<DiceRoll>,
}

impl LoadedDice {
    /// Script the given rolls, thrown in order.
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            script: rolls
                .into_iter()
                .map(|(first, second)| DiceRoll::new(first, second))
                .collect(),
        }
    }

    /// Append another roll to the script.
    pub fn push(&mut self, first: u8, second: u8) {
        self.script.push_back(DiceRoll::new(first, second));
    }

    /// Rolls not yet thrown.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl DiceSource for LoadedDice {
    /// Panics when the script runs out; a scenario that rolls more often
    /// than it scripted is a broken scenario.
    fn roll(&mut self) -> DiceRoll {
        match self.script.pop_front() {
            Some(roll) => roll,
            None => panic!("LoadedDice exhausted: scenario rolled more than scripted"),
        }
    }
}
