//! # monopoly-sim
//!
//! A Monopoly movement simulator that measures how often each space is
//! landed on.
//!
//! ## Design Principles
//!
//! 1. **Movement Only**: Dice, doubles, jail and card movement are modeled.
//!    There is no money, ownership, rent or bankruptcy.
//!
//! 2. **Deterministic**: One seeded dice stream per run, consumed in
//!    round-major, player-major order. The same seed replays the same run.
//!
//! 3. **N-Player**: Any number of players from 1 to 255.
//!
//! ## Modules
//!
//! - `core`: Players, dice, configuration, state, narrative, errors
//! - `board`: The 40-space ring and its landing counters
//! - `cards`: Chance and Community Chest decks
//! - `effects`: Card actions and how they resolve
//! - `rules`: The turn engine
//! - `simulation`: The round driver and its report
//!
//! ## Example
//!
//! ```
//! use monopoly_sim::{SimulationConfig, Simulator};
//!
//! let config = SimulationConfig::new(4, 1000).with_seed(42);
//! let report = Simulator::new(config)
//!     .and_then(|mut sim| sim.run(&mut std::io::sink()))
//!     .unwrap();
//!
//! assert_eq!(report.landings.len(), 40);
//! assert!(report.total_landings() > 0);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    ArrestReason, DiceRoll, DiceSource, GameRng, GameState, LoadedDice, Narrative,
    NarrativeRecord, Player, PlayerId, PlayerMap, ReleaseReason, RuleSet, SimError,
    SimulationConfig, TurnEvent,
};

pub use crate::board::{Board, Space, SpaceId, SpaceKind, BOARD_SIZE};

pub use crate::cards::{Card, CardId, Deck, DeckKind};

pub use crate::effects::{CardAction, CardResolver};

pub use crate::rules::{TurnEngine, TurnOutcome};

pub use crate::simulation::{PlayerSummary, SimulationReport, SpaceStats, Simulator};
