//! Turn rules.
//!
//! `TurnEngine` decides what a roll means: moves, extra rolls for doubles,
//! arrests, jail releases, and card draws on Chance and Community Chest.
//! The bookkeeping for each of those transitions lives on `GameState`.

pub mod engine;

pub use engine::{TurnEngine, TurnOutcome};
