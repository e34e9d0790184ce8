//! Classic card lists.
//!
//! Decks are built from these in order; there is no shuffling, so the draw
//! order is exactly the order below.

use crate::board::SpaceId;
use crate::effects::CardAction;

/// Text of the card a player keeps instead of returning.
pub const JAIL_CARD_DESCRIPTION: &str = "Get Out of Jail Free";

/// The 16 Chance cards.
pub const CHANCE_CARDS: [(&str, CardAction); 16] = [
    ("Advance to Go", CardAction::AdvanceTo(SpaceId::GO)),
    ("Advance to Illinois Ave.", CardAction::AdvanceTo(SpaceId::ILLINOIS_AVENUE)),
    ("Advance to St. Charles Place", CardAction::AdvanceTo(SpaceId::ST_CHARLES_PLACE)),
    ("Advance token to nearest Utility", CardAction::AdvanceToNearestUtility),
    ("Advance to nearest Railroad", CardAction::AdvanceToNearestRailroad),
    ("Bank pays you dividend of $50", CardAction::NoEffect),
    (JAIL_CARD_DESCRIPTION, CardAction::GetOutOfJailFree),
    ("Go back 3 spaces", CardAction::GoBack { spaces: 3 }),
    ("Go to Jail", CardAction::GoToJail),
    ("Make general repairs on all your property", CardAction::NoEffect),
    ("Pay poor tax of $15", CardAction::NoEffect),
    ("Take a ride on the Reading Railroad", CardAction::AdvanceTo(SpaceId::READING_RAILROAD)),
    ("Advance token to Boardwalk", CardAction::AdvanceTo(SpaceId::BOARDWALK)),
    ("You have been elected Chairman of the Board", CardAction::NoEffect),
    ("Your building and loan matures", CardAction::NoEffect),
    ("You have won a crossword competition", CardAction::NoEffect),
];

/// The 17 Community Chest cards.
pub const COMMUNITY_CHEST_CARDS: [(&str, CardAction); 17] = [
    ("Advance to Go", CardAction::AdvanceTo(SpaceId::GO)),
    ("Bank error in your favor", CardAction::NoEffect),
    ("Doctor's fees", CardAction::NoEffect),
    ("From sale of stock you get $50", CardAction::NoEffect),
    (JAIL_CARD_DESCRIPTION, CardAction::GetOutOfJailFree),
    ("Go to Jail", CardAction::GoToJail),
    ("Grand Opera Night", CardAction::NoEffect),
    ("Holiday Fund matures", CardAction::NoEffect),
    ("Income tax refund", CardAction::NoEffect),
    ("It is your birthday", CardAction::NoEffect),
    ("Life insurance matures", CardAction::NoEffect),
    ("Pay hospital fees of $100", CardAction::NoEffect),
    ("Pay school fees of $150", CardAction::NoEffect),
    ("Receive $25 consultancy fee", CardAction::NoEffect),
    ("You are assessed for street repairs", CardAction::NoEffect),
    ("You have won second prize in a beauty contest", CardAction::NoEffect),
    ("You inherit $100", CardAction::NoEffect),
];
