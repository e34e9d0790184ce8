//! Turn engine scenarios driven by scripted dice.
//!
//! Every test loads exactly the rolls the turn should consume and checks
//! that all of them were used.

use monopoly_sim::board::{SpaceId, SpaceKind};
use monopoly_sim::cards::{Deck, DeckKind};
use monopoly_sim::core::{
    ArrestReason, GameState, LoadedDice, PlayerId, ReleaseReason, RuleSet, TurnEvent,
};
use monopoly_sim::effects::CardAction;
use monopoly_sim::rules::{TurnEngine, TurnOutcome};

const P0: PlayerId = PlayerId(0);

/// Decks whose cards do nothing, so landings stay where the dice put them.
fn flavor_decks() -> (Deck, Deck) {
    let chance = Deck::new(DeckKind::Chance, [("Bank pays you dividend", CardAction::NoEffect)]);
    let chest = Deck::new(DeckKind::CommunityChest, [("You inherit $100", CardAction::NoEffect)]);
    (chance, chest)
}

fn quiet_state(player_count: usize) -> GameState {
    let (chance, chest) = flavor_decks();
    GameState::new(player_count, true).with_decks(chance, chest)
}

fn play(
    engine: &TurnEngine,
    state: &mut GameState,
    player: PlayerId,
    rolls: &[(u8, u8)],
) -> TurnOutcome {
    let mut dice = LoadedDice::new(rolls.iter().copied());
    let outcome = engine.resolve_turn(state, &mut dice, player).unwrap();
    assert!(dice.is_exhausted(), "{} rolls left unused", dice.remaining());
    outcome
}

/// A plain roll from Go.
#[test]
fn test_scenario_plain_roll() {
    let mut state = quiet_state(1);
    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(3, 4)]);

    assert_eq!(outcome.location, SpaceId::new(7));
    assert_eq!(outcome.rolls.len(), 1);
    assert_eq!(state.board.space(SpaceId::new(7)).landed_count(), 1);
    assert_eq!(state.board.total_landings(), 1);
}

/// A prisoner at the sentence cap is released and moves, without a bonus roll.
#[test]
fn test_scenario_forced_release() {
    let mut state = quiet_state(1);
    state.arrest(P0, ArrestReason::Card);
    state.player_mut(P0).increment_turns_in_jail();
    state.player_mut(P0).increment_turns_in_jail();
    assert_eq!(state.player(P0).turns_in_jail(), 2);

    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(2, 5)]);

    assert!(!outcome.detained);
    assert_eq!(outcome.location, SpaceId::new(17));
    assert_eq!(state.player(P0).turns_in_jail(), 0);
}

/// Doubles move and grant a second roll.
#[test]
fn test_scenario_doubles_reroll() {
    let mut state = quiet_state(1);
    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(4, 4), (1, 2)]);

    assert_eq!(outcome.rolls.len(), 2);
    assert_eq!(state.board.space(SpaceId::new(8)).landed_count(), 1);
    assert_eq!(outcome.location, SpaceId::new(11));
}

#[test]
fn test_three_doubles_in_a_row() {
    let mut state = quiet_state(1);
    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(1, 1), (2, 2), (3, 3)]);

    // 0 -> 2 -> 6, then the third doubles goes straight to jail
    assert!(outcome.detained);
    assert_eq!(outcome.location, SpaceId::JAIL);
    assert_eq!(state.board.space(SpaceId::new(12)).landed_count(), 0);
    assert!(state.narrative.events().any(|e| matches!(
        e,
        TurnEvent::Arrested {
            reason: ArrestReason::ConsecutiveDoubles,
            ..
        }
    )));
}

#[test]
fn test_jail_sentence_over_three_turns() {
    let engine = TurnEngine::default();
    let mut state = quiet_state(1);
    state.arrest(P0, ArrestReason::GoToJailSpace);

    assert!(play(&engine, &mut state, P0, &[(1, 2)]).detained);
    assert!(play(&engine, &mut state, P0, &[(1, 3)]).detained);
    let outcome = play(&engine, &mut state, P0, &[(1, 4)]);

    assert!(!outcome.detained);
    assert_eq!(outcome.location, SpaceId::new(15));
}

#[test]
fn test_longer_sentence_rule() {
    let engine = TurnEngine::new(RuleSet::default().with_jail_sentence(3));
    let mut state = quiet_state(1);
    state.arrest(P0, ArrestReason::GoToJailSpace);

    for _ in 0..3 {
        assert!(play(&engine, &mut state, P0, &[(1, 2)]).detained);
    }
    assert!(!play(&engine, &mut state, P0, &[(1, 2)]).detained);
}

#[test]
fn test_doubles_escape_grants_reroll() {
    let mut state = quiet_state(1);
    state.arrest(P0, ArrestReason::Card);
    state.player_mut(P0).increment_turns_in_jail();

    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(3, 3), (1, 2)]);

    // 10 -> 16 -> 19
    assert!(!outcome.detained);
    assert_eq!(outcome.location, SpaceId::new(19));
    assert_eq!(state.player(P0).turns_in_jail(), 0);
}

/// The escaping doubles count towards the consecutive doubles limit.
#[test]
fn test_doubles_escape_then_two_more_doubles() {
    let mut state = quiet_state(1);
    state.arrest(P0, ArrestReason::Card);

    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(1, 1), (2, 2), (3, 3)]);

    // 10 -> 12 -> 16, then the third doubles goes back to jail
    assert!(outcome.detained);
    assert_eq!(outcome.location, SpaceId::JAIL);
    assert_eq!(outcome.rolls.len(), 3);
    assert_eq!(state.board.space(SpaceId::JAIL).landed_count(), 2);
    assert_eq!(state.board.space(SpaceId::new(22)).landed_count(), 0);
}

/// An escape that ends back in jail earns no extra roll.
#[test]
fn test_doubles_escape_into_go_to_jail_card() {
    let arrest_first = Deck::new(DeckKind::Chance, [("Go to Jail", CardAction::GoToJail)]);
    let (_, chest) = flavor_decks();
    let mut state = GameState::new(1, true).with_decks(arrest_first, chest);
    state.arrest(P0, ArrestReason::GoToJailSpace);

    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(6, 6)]);

    // 10 -> 22 (Chance) -> Jail
    assert!(outcome.detained);
    assert_eq!(outcome.rolls.len(), 1);
    assert_eq!(outcome.location, SpaceId::JAIL);
    assert_eq!(state.board.space(SpaceId::new(22)).landed_count(), 1);
    assert_eq!(state.chance.len(), 1);
}

#[test]
fn test_go_to_jail_space_counts_both_spaces() {
    let mut state = quiet_state(1);
    state.player_mut(P0).set_location(SpaceId::new(20));

    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(4, 6)]);

    assert!(outcome.detained);
    assert_eq!(state.board.space(SpaceId::GO_TO_JAIL).landed_count(), 1);
    assert_eq!(state.board.space(SpaceId::JAIL).landed_count(), 1);
    assert_eq!(state.player(P0).location(), SpaceId::JAIL);
}

#[test]
fn test_wraps_past_go() {
    let mut state = quiet_state(1);
    state.player_mut(P0).set_location(SpaceId::new(37));

    let outcome = play(&TurnEngine::default(), &mut state, P0, &[(2, 3)]);

    assert_eq!(outcome.location, SpaceId::new(2));
    assert_eq!(state.board.space(outcome.location).kind(), SpaceKind::CommunityChest);
}

#[test]
fn test_jail_card_kept_and_played_later() {
    let engine = TurnEngine::default();
    let chest = Deck::new(
        DeckKind::CommunityChest,
        [
            ("Get Out of Jail Free", CardAction::GetOutOfJailFree),
            ("Go to Jail", CardAction::GoToJail),
        ],
    );
    let (chance, _) = flavor_decks();
    let mut state = GameState::new(1, true).with_decks(chance, chest);

    // Land on Community Chest at 2: keep the card
    play(&engine, &mut state, P0, &[(1, 1), (1, 3)]);
    assert!(state.player(P0).holds_jail_card(DeckKind::CommunityChest));
    assert_eq!(state.community_chest.len(), 2);

    // Back onto Community Chest at 17 from 6: arrested by the second card
    let outcome = play(&engine, &mut state, P0, &[(5, 6)]);
    assert!(outcome.detained);

    // Next turn the card is played before rolling
    let outcome = play(&engine, &mut state, P0, &[(1, 2)]);
    assert!(!outcome.detained);
    assert_eq!(outcome.location, SpaceId::new(13));
    assert!(!state.player(P0).holds_jail_card(DeckKind::CommunityChest));
    assert_eq!(state.community_chest.len(), 2);
    assert!(state.narrative.events().any(|e| matches!(
        e,
        TurnEvent::Released {
            reason: ReleaseReason::JailCard,
            ..
        }
    )));
}

#[test]
fn test_event_order_within_turn() {
    let mut state = quiet_state(1);
    play(&TurnEngine::default(), &mut state, P0, &[(3, 4)]);

    let events: Vec<_> = state.narrative.events().cloned().collect();
    assert!(matches!(events[0], TurnEvent::TurnStarted { .. }));
    assert!(matches!(events[1], TurnEvent::Rolled { .. }));
    assert!(matches!(events[2], TurnEvent::Moved { .. }));
    assert!(matches!(
        events[3],
        TurnEvent::DrewCard {
            deck: DeckKind::Chance,
            ..
        }
    ));
    assert_eq!(events.len(), 4);
}

#[test]
fn test_players_do_not_share_state() {
    let engine = TurnEngine::default();
    let mut state = quiet_state(3);

    play(&engine, &mut state, PlayerId::new(0), &[(1, 2)]);
    play(&engine, &mut state, PlayerId::new(2), &[(2, 4)]);

    assert_eq!(state.player(PlayerId::new(0)).location(), SpaceId::new(3));
    assert_eq!(state.player(PlayerId::new(1)).location(), SpaceId::GO);
    assert_eq!(state.player(PlayerId::new(2)).location(), SpaceId::new(6));
}
