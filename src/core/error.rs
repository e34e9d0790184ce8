//! Error types.
//!
//! Game outcomes (arrests, releases, card draws) are state transitions and
//! never show up here. A `SimError` raised mid-turn means an invariant broke
//! and the run aborts; `SimError::Turn` carries the player, round and space
//! where that happened.

use crate::cards::DeckKind;
use crate::core::PlayerId;

/// Errors raised while configuring or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The configuration cannot describe a simulation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A lookup by identity found nothing.
    #[error("{what} `{name}` does not belong to this {owner}")]
    NotFound {
        what: &'static str,
        name: String,
        owner: &'static str,
    },

    /// A draw was attempted on a deck with no cards.
    #[error("cannot draw from the empty {deck} deck")]
    EmptyDeck { deck: DeckKind },

    /// An in-turn failure, with the context it happened in.
    #[error("{player} failed in round {round} on {space}: {source}")]
    Turn {
        player: PlayerId,
        round: u32,
        space: String,
        #[source]
        source: Box<SimError>,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// A space looked up on a board it does not belong to.
    pub(crate) fn space_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            what: "space",
            name: name.into(),
            owner: "board",
        }
    }

    /// Wrap an in-turn failure with its context.
    pub(crate) fn in_turn(self, player: PlayerId, round: u32, space: impl Into<String>) -> Self {
        Self::Turn {
            player,
            round,
            space: space.into(),
            source: Box::new(self),
        }
    }
}
