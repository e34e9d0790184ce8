//! Core engine types: players, dice, configuration, state, narrative, errors.
//!
//! This module contains the building blocks every other module leans on.
//! Rule constants are configured via `RuleSet` rather than hardcoded in
//! the engine.

pub mod config;
pub mod error;
pub mod narrative;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{RuleSet, SimulationConfig, MAXIMUM_CONSECUTIVE_DOUBLES, MAXIMUM_JAIL_SENTENCE};
pub use error::SimError;
pub use narrative::{ArrestReason, Narrative, NarrativeRecord, ReleaseReason, TurnEvent};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{DiceRoll, DiceSource, GameRng, LoadedDice, DIE_FACES};
pub use state::GameState;
