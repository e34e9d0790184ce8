//! Board spaces.
//!
//! A `Space` is identified by its position, not its name: "Chance" and
//! "Community Chest" each appear three times. Behavior is driven by the
//! `SpaceKind` tag set at construction, never by the display name.

use serde::{Deserialize, Serialize};

/// Position of a space on the board, `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub u8);

impl SpaceId {
    pub const GO: SpaceId = SpaceId(0);
    pub const READING_RAILROAD: SpaceId = SpaceId(5);
    pub const JAIL: SpaceId = SpaceId(10);
    pub const ST_CHARLES_PLACE: SpaceId = SpaceId(11);
    pub const ELECTRIC_COMPANY: SpaceId = SpaceId(12);
    pub const ILLINOIS_AVENUE: SpaceId = SpaceId(24);
    pub const WATER_WORKS: SpaceId = SpaceId(28);
    pub const GO_TO_JAIL: SpaceId = SpaceId(30);
    pub const BOARDWALK: SpaceId = SpaceId(39);

    /// Create a new space ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// What happens when a player lands on a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Go,
    /// A colored street.
    Property,
    Railroad,
    Utility,
    Tax,
    /// Draw from the Chance deck.
    Chance,
    /// Draw from the Community Chest deck.
    CommunityChest,
    /// In Jail / Just Visiting.
    Jail,
    FreeParking,
    /// Arrest the player.
    GoToJail,
}

/// A single board position and its landing counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    id: SpaceId,
    name: String,
    kind: SpaceKind,
    landed_count: u64,
}

impl Space {
    pub(crate) fn new(id: SpaceId, name: impl Into<String>, kind: SpaceKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            landed_count: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    /// Times any player has landed here.
    #[must_use]
    pub fn landed_count(&self) -> u64 {
        self.landed_count
    }

    pub(super) fn record_landing(&mut self) -> u64 {
        self.landed_count += 1;
        self.landed_count
    }
}
