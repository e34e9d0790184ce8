//! Turn resolution engine.
//!
//! A turn is one or more rolls by the same player:
//!
//! 1. A prisoner holding a "Get Out of Jail Free" card plays it before
//!    rolling (Chance before Community Chest).
//! 2. Two dice are thrown.
//! 3. A free player moves by the total. Doubles earn another roll, unless
//!    the move ended in jail, and the doubles that complete
//!    `max_consecutive_doubles` in a row are an arrest instead of a move.
//! 4. A prisoner walks out on doubles (and rolls again), is released after
//!    serving `max_jail_sentence` failed attempts, or serves another turn.
//!
//! Landing on "Go To Jail" arrests; landing on Chance or Community Chest
//! draws from that deck and applies the card.
//!
//! Re-rolls run as a loop rather than recursion; the doubles limit bounds
//! the number of iterations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{SpaceId, SpaceKind};
use crate::cards::DeckKind;
use crate::core::{
    ArrestReason, DiceRoll, DiceSource, GameState, PlayerId, ReleaseReason, RuleSet, SimError,
    TurnEvent,
};
use crate::effects::CardResolver;

/// What one call to `resolve_turn` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// Every roll thrown this turn, in order.
    /// SmallVec covers the usual limit of three rolls without allocating.
    pub rolls: SmallVec<[DiceRoll; 3]>,

    /// Where the player ended the turn.
    pub location: SpaceId,

    /// Whether the player ended the turn in jail.
    pub detained: bool,
}

impl TurnOutcome {
    /// Rolls granted beyond the first.
    #[must_use]
    pub fn extra_rolls(&self) -> usize {
        self.rolls.len().saturating_sub(1)
    }
}

/// Resolves player turns under a `RuleSet`.
///
/// ## Example
///
/// ```
/// use monopoly_sim::core::{GameState, LoadedDice, PlayerId};
/// use monopoly_sim::board::SpaceId;
/// use monopoly_sim::rules::TurnEngine;
///
/// let mut state = GameState::new(1, false);
/// let mut dice = LoadedDice::new([(2, 4)]);
///
/// let outcome = TurnEngine::default()
///     .resolve_turn(&mut state, &mut dice, PlayerId::new(0))
///     .unwrap();
///
/// assert_eq!(outcome.location, SpaceId::new(6));
/// assert_eq!(outcome.rolls.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnEngine {
    rules: RuleSet,
}

impl TurnEngine {
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Play one full turn for `player`, rolling from `dice`.
    ///
    /// Any error means an invariant broke; it is returned wrapped with the
    /// player, round and space it happened on.
    pub fn resolve_turn<D: DiceSource>(
        &self,
        state: &mut GameState,
        dice: &mut D,
        player: PlayerId,
    ) -> Result<TurnOutcome, SimError> {
        self.play_turn(state, dice, player).map_err(|err| {
            let round = state.round();
            err.in_turn(player, round, state.location_name(player))
        })
    }

    fn play_turn<D: DiceSource>(
        &self,
        state: &mut GameState,
        dice: &mut D,
        player: PlayerId,
    ) -> Result<TurnOutcome, SimError> {
        state.narrative.record(TurnEvent::TurnStarted { player });

        let mut rolls = SmallVec::new();
        let mut depth: u8 = 0;

        loop {
            self.play_held_jail_card(state, player);

            let roll = dice.roll();
            state.narrative.record(TurnEvent::Rolled { player, roll });
            rolls.push(roll);

            let roll_again = if state.player(player).is_detained() {
                self.roll_from_jail(state, player, roll)?
            } else {
                self.roll_free(state, player, roll, depth)?
            };

            if !roll_again {
                break;
            }
            depth += 1;
        }

        let current = state.player(player);
        Ok(TurnOutcome {
            player,
            rolls,
            location: current.location(),
            detained: current.is_detained(),
        })
    }

    /// A prisoner holding a jail card uses one before rolling.
    fn play_held_jail_card(&self, state: &mut GameState, player: PlayerId) {
        let current = state.player(player);
        if !current.is_detained() {
            return;
        }
        let Some(deck) = current.held_jail_card() else {
            return;
        };

        state.player_mut(player).set_jail_card(deck, false);
        state.narrative.record(TurnEvent::UsedJailCard { player, deck });
        state.release(player, ReleaseReason::JailCard);
    }

    /// Resolve a roll by a free player. Returns whether to roll again.
    fn roll_free(
        &self,
        state: &mut GameState,
        player: PlayerId,
        roll: DiceRoll,
        depth: u8,
    ) -> Result<bool, SimError> {
        if !roll.is_doubles() {
            self.advance_by(state, player, roll.total())?;
            return Ok(false);
        }

        if depth + 1 >= self.rules.max_consecutive_doubles {
            state.arrest(player, ArrestReason::ConsecutiveDoubles);
            return Ok(false);
        }

        self.advance_by(state, player, roll.total())?;
        // Rolling into jail forfeits the extra roll
        Ok(!state.player(player).is_detained())
    }

    /// Resolve a roll by a prisoner. Returns whether to roll again.
    fn roll_from_jail(
        &self,
        state: &mut GameState,
        player: PlayerId,
        roll: DiceRoll,
    ) -> Result<bool, SimError> {
        if roll.is_doubles() {
            state.release(player, ReleaseReason::RolledDoubles);
            self.advance_by(state, player, roll.total())?;
            return Ok(!state.player(player).is_detained());
        }

        if state.player(player).turns_in_jail() >= self.rules.max_jail_sentence {
            state.release(player, ReleaseReason::ServedSentence);
            self.advance_by(state, player, roll.total())?;
            return Ok(false);
        }

        let prisoner = state.player_mut(player);
        prisoner.increment_turns_in_jail();
        let turns_in_jail = prisoner.turns_in_jail();
        state.narrative.record(TurnEvent::StayedInJail {
            player,
            turns_in_jail,
        });
        Ok(false)
    }

    /// Move a player by a roll and apply the landing effect.
    fn advance_by(
        &self,
        state: &mut GameState,
        player: PlayerId,
        steps: i32,
    ) -> Result<(), SimError> {
        let destination = state.advance_by(player, steps);

        match state.board.space(destination).kind() {
            SpaceKind::GoToJail => state.arrest(player, ArrestReason::GoToJailSpace),
            SpaceKind::Chance => self.draw_and_apply(state, player, DeckKind::Chance)?,
            SpaceKind::CommunityChest => {
                self.draw_and_apply(state, player, DeckKind::CommunityChest)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Draw the front card of `deck` and apply it.
    ///
    /// The card goes to the back of the deck, except a "Get Out of Jail
    /// Free" card, which the player keeps; a fresh copy takes its place so
    /// the deck size never changes.
    fn draw_and_apply(
        &self,
        state: &mut GameState,
        player: PlayerId,
        deck: DeckKind,
    ) -> Result<(), SimError> {
        let card = state.deck_mut(deck).draw()?;
        state.narrative.record(TurnEvent::DrewCard {
            player,
            deck,
            description: card.description().to_string(),
        });

        CardResolver::apply(state, player, deck, card.action())?;

        if card.is_jail_card() {
            state.deck_mut(deck).replace(&card);
        } else {
            state.deck_mut(deck).return_to_back(card);
        }
        Ok(())
    }
}
