//! Narrative log: one typed event per engine action.
//!
//! The engine records what happened (dice rolled, space landed on, card
//! drawn, arrest, release) as `TurnEvent`s. Each is stamped with its round
//! and a sequence number within the round so replays can be compared event
//! by event. `Display` renders the human-readable line.
//!
//! Recording can be switched off; every event is still passed to
//! `log::trace!` for diagnostics.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::rng::DiceRoll;
use crate::board::SpaceId;
use crate::cards::DeckKind;

/// Why a player was sent to jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrestReason {
    /// Landed on the "Go To Jail" space.
    GoToJailSpace,
    /// Drew a "Go to Jail" card.
    Card,
    /// Rolled too many doubles in a row.
    ConsecutiveDoubles,
}

/// Why a prisoner walked free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseReason {
    /// Played a held "Get Out of Jail Free" card.
    JailCard,
    /// Rolled doubles.
    RolledDoubles,
    /// Served the maximum sentence.
    ServedSentence,
}

/// A single observable engine action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    RoundStarted { round: u32 },
    TurnStarted { player: PlayerId },
    Rolled { player: PlayerId, roll: DiceRoll },
    UsedJailCard { player: PlayerId, deck: DeckKind },
    Released { player: PlayerId, reason: ReleaseReason },
    /// Moved by a dice roll and landed.
    Moved { player: PlayerId, space: SpaceId, name: String },
    DrewCard { player: PlayerId, deck: DeckKind, description: String },
    KeptJailCard { player: PlayerId, deck: DeckKind },
    /// Moved by a card.
    CardMoved { player: PlayerId, space: SpaceId, name: String },
    Arrested { player: PlayerId, reason: ArrestReason },
    StayedInJail { player: PlayerId, turns_in_jail: u32 },
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::RoundStarted { round } => write!(f, "Starting round {round}"),
            TurnEvent::TurnStarted { player } => write!(f, "{player}'s turn ..."),
            TurnEvent::Rolled { player, roll } => write!(f, "{player} rolled {roll}"),
            TurnEvent::UsedJailCard { player, deck } => {
                write!(f, "{player} plays a {deck} 'Get Out of Jail Free' card")
            }
            TurnEvent::Released { player, .. } => write!(f, "{player} was released from Jail!"),
            TurnEvent::Moved { player, name, .. } => write!(f, "{player} moves to {name}"),
            TurnEvent::DrewCard {
                player,
                deck,
                description,
            } => write!(f, "{player} draws a {deck} card: '{description}'"),
            TurnEvent::KeptJailCard { player, deck } => {
                write!(f, "{player} keeps the {deck} 'Get Out of Jail Free' card")
            }
            TurnEvent::CardMoved { player, name, .. } => write!(f, "{player} advances to {name}"),
            TurnEvent::Arrested { player, reason } => match reason {
                ArrestReason::ConsecutiveDoubles => {
                    write!(f, "{player} has rolled doubles once too often! Hauled off to Jail!")
                }
                _ => write!(f, "{player} is hauled off to Jail!"),
            },
            TurnEvent::StayedInJail { player, .. } => {
                write!(f, "{player} spends another lonely night in Jail.")
            }
        }
    }
}

/// An event with its position in the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRecord {
    pub round: u32,
    /// Position within the round, starting at 0.
    pub sequence: u32,
    pub event: TurnEvent,
}

/// Ordered event history for the current simulation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Narrative {
    enabled: bool,
    round: u32,
    sequence: u32,
    records: Vector<NarrativeRecord>,
}

impl Narrative {
    /// Create a narrative; a disabled one only forwards to the logger.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The round currently being recorded.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Open a new round and record its start.
    pub fn begin_round(&mut self, round: u32) {
        self.round = round;
        self.sequence = 0;
        self.record(TurnEvent::RoundStarted { round });
    }

    /// Record an event in the current round.
    pub fn record(&mut self, event: TurnEvent) {
        log::trace!("round {} #{}: {}", self.round, self.sequence, event);
        if self.enabled {
            self.records.push_back(NarrativeRecord {
                round: self.round,
                sequence: self.sequence,
                event,
            });
        }
        self.sequence += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NarrativeRecord> {
        self.records.iter()
    }

    /// Iterate over the recorded events only.
    pub fn events(&self) -> impl Iterator<Item = &TurnEvent> {
        self.records.iter().map(|r| &r.event)
    }

    /// Take every recorded event, leaving the narrative empty.
    pub fn drain(&mut self) -> Vector<NarrativeRecord> {
        std::mem::take(&mut self.records)
    }
}
