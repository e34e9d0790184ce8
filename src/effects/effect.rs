//! Card actions.
//!
//! Every card is bound to one `CardAction`. The set is closed, so the
//! resolver can match it exhaustively and tests can cover each variant.

use serde::{Deserialize, Serialize};

use crate::board::SpaceId;

/// What a card does to the player who draws it.
///
/// ## Movement
///
/// - `AdvanceTo`: Move to a fixed space (Go, Illinois Ave., Boardwalk, ...)
/// - `AdvanceToNearestUtility`: Water Works or Electric Company
/// - `AdvanceToNearestRailroad`: The next railroad going forward
/// - `GoBack`: Move backwards, wrapping past Go
///
/// ## Jail
///
/// - `GoToJail`: Arrest the player
/// - `GetOutOfJailFree`: The player keeps the card for later
///
/// ## Flavor
///
/// - `NoEffect`: Money cards; no money is modeled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardAction {
    AdvanceTo(SpaceId),
    AdvanceToNearestUtility,
    AdvanceToNearestRailroad,
    GoBack { spaces: u8 },
    GoToJail,
    GetOutOfJailFree,
    NoEffect,
}
