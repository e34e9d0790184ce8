//! Card decks.
//!
//! A `Deck` is a strict FIFO: draws come off the front, returns go on the
//! back, and nothing is ever shuffled. Its size never changes over a
//! simulation: every drawn card is either returned or, for a kept
//! "Get Out of Jail Free" card, replaced by a fresh copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::catalog::{CHANCE_CARDS, COMMUNITY_CHEST_CARDS};
use super::definition::{Card, CardId, DeckKind};
use crate::core::SimError;
use crate::effects::CardAction;

/// An ordered deck of cards.
///
/// ```
/// use monopoly_sim::cards::{Deck, DeckKind};
///
/// let mut deck = Deck::chance();
/// let size = deck.len();
///
/// let card = deck.draw().unwrap();
/// assert_eq!(card.description(), "Advance to Go");
/// deck.return_to_back(card);
///
/// assert_eq!(deck.len(), size);
/// assert_eq!(deck.kind(), DeckKind::Chance);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    kind: DeckKind,
    cards: Vector<Card>,
    next_id: u32,
}

impl Deck {
    /// Build a deck from `(description, action)` pairs, front first.
    pub fn new<S: Into<String>>(
        kind: DeckKind,
        cards: impl IntoIterator<Item = (S, CardAction)>,
    ) -> Self {
        let mut deck = Self {
            kind,
            cards: Vector::new(),
            next_id: 0,
        };
        for (description, action) in cards {
            let card = deck.mint(description, action);
            deck.cards.push_back(card);
        }
        deck
    }

    /// The classic Chance deck.
    #[must_use]
    pub fn chance() -> Self {
        Self::new(DeckKind::Chance, CHANCE_CARDS)
    }

    /// The classic Community Chest deck.
    #[must_use]
    pub fn community_chest() -> Self {
        Self::new(DeckKind::CommunityChest, COMMUNITY_CHEST_CARDS)
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Result<Card, SimError> {
        self.cards
            .pop_front()
            .ok_or(SimError::EmptyDeck { deck: self.kind })
    }

    /// Put a card on the back of the deck.
    pub fn return_to_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Put a fresh copy of `card` on the back, with a new identity.
    ///
    /// Used when the drawn card itself leaves the deck.
    pub fn replace(&mut self, card: &Card) -> CardId {
        let copy = self.mint(card.description(), card.action());
        let id = copy.id();
        self.cards.push_back(copy);
        id
    }

    /// The card the next draw would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Is this exact physical card in the deck?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    fn mint(&mut self, description: impl Into<String>, action: CardAction) -> Card {
        let card = Card::new(CardId::new(self.next_id), description, action);
        self.next_id += 1;
        card
    }
}
