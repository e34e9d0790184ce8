//! Card definitions.
//!
//! A `Card` is an immutable description plus the `CardAction` it triggers.
//! Each physical card carries a `CardId` allocated by its deck, so two cards
//! with the same text are still distinguishable.

use serde::{Deserialize, Serialize};

use crate::effects::CardAction;

/// Identity of one physical card within its deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The two decks on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl DeckKind {
    /// Display name, as printed on the board.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeckKind::Chance => "Chance",
            DeckKind::CommunityChest => "Community Chest",
        }
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
///
/// ```
/// use monopoly_sim::cards::{Card, CardId};
/// use monopoly_sim::effects::CardAction;
///
/// let card = Card::new(CardId::new(0), "Go to Jail", CardAction::GoToJail);
/// assert_eq!(card.description(), "Go to Jail");
/// assert!(!card.is_jail_card());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    description: String,
    action: CardAction,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, description: impl Into<String>, action: CardAction) -> Self {
        Self {
            id,
            description: description.into(),
            action,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn action(&self) -> CardAction {
        self.action
    }

    /// Is this a "Get Out of Jail Free" card, kept by whoever draws it?
    #[must_use]
    pub fn is_jail_card(&self) -> bool {
        self.action == CardAction::GetOutOfJailFree
    }
}
