//! Card system: definitions, decks and the classic card lists.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of one physical card
//! - `DeckKind`: Chance or Community Chest
//! - `Card`: Description plus `CardAction`
//! - `Deck`: Fixed-size FIFO of cards

pub mod catalog;
pub mod deck;
pub mod definition;

pub use catalog::{CHANCE_CARDS, COMMUNITY_CHEST_CARDS, JAIL_CARD_DESCRIPTION};
pub use deck::Deck;
pub use definition::{Card, CardId, DeckKind};
