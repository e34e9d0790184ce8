//! Card resolution - applying a drawn card's action to the game state.
//!
//! Card movement places the player directly on the target and counts the
//! landing there; it does not trigger the target space's own effect, so a
//! card never chains into another card draw.

use crate::board::{Board, SpaceId, SpaceKind};
use crate::cards::DeckKind;
use crate::core::{ArrestReason, GameState, PlayerId, SimError, TurnEvent};

use super::CardAction;

/// The utility a "nearest Utility" card sends a player to.
///
/// Water Works for anyone strictly between the two utilities, Electric
/// Company otherwise.
#[must_use]
pub fn nearest_utility(location: SpaceId) -> SpaceId {
    if location > SpaceId::ELECTRIC_COMPANY && location < SpaceId::WATER_WORKS {
        SpaceId::WATER_WORKS
    } else {
        SpaceId::ELECTRIC_COMPANY
    }
}

/// The first railroad strictly ahead of `location`, wrapping past Go.
///
/// On the classic board this partitions the ring into `[5,15) -> 15`,
/// `[15,25) -> 25`, `[25,35) -> 35` and `[35,5) -> 5`.
pub fn nearest_railroad(board: &Board, location: SpaceId) -> Result<SpaceId, SimError> {
    board
        .next_of_kind(location, SpaceKind::Railroad)
        .ok_or_else(|| SimError::NotFound {
            what: "space kind",
            name: "Railroad".to_string(),
            owner: "board",
        })
}

/// Resolves card actions on game state.
pub struct CardResolver;

impl CardResolver {
    /// Apply `action`, drawn from `deck`, to `player`.
    ///
    /// Returning or replacing the card is left to the caller.
    pub fn apply(
        state: &mut GameState,
        player: PlayerId,
        deck: DeckKind,
        action: CardAction,
    ) -> Result<(), SimError> {
        let location = state.player(player).location();

        match action {
            CardAction::AdvanceTo(target) => {
                state.move_to(player, target);
            }

            CardAction::AdvanceToNearestUtility => {
                state.move_to(player, nearest_utility(location));
            }

            CardAction::AdvanceToNearestRailroad => {
                let target = nearest_railroad(&state.board, location)?;
                state.move_to(player, target);
            }

            CardAction::GoBack { spaces } => {
                let current = state.board.space(location);
                let target = state
                    .board
                    .space_relative_to(current, -i64::from(spaces))?
                    .id();
                state.move_to(player, target);
            }

            CardAction::GoToJail => {
                state.arrest(player, ArrestReason::Card);
            }

            CardAction::GetOutOfJailFree => {
                state.player_mut(player).set_jail_card(deck, true);
                state.narrative.record(TurnEvent::KeptJailCard { player, deck });
            }

            CardAction::NoEffect => {}
        }

        Ok(())
    }
}
