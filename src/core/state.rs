//! Game state: everything one simulation run owns.
//!
//! ## GameState
//!
//! - Board (space landing counters)
//! - Players
//! - Chance and Community Chest decks
//! - Narrative of recorded events
//!
//! The board and decks are shared by all players but touched strictly one
//! turn at a time. Independent runs must each own their own `GameState`.
//!
//! The transition helpers here (`advance_by`, `move_to`, `arrest`,
//! `release`) do the bookkeeping for one state change and record it;
//! deciding *which* transition happens is the turn engine's job.

use super::narrative::{ArrestReason, Narrative, ReleaseReason, TurnEvent};
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Board, SpaceId};
use crate::cards::{Deck, DeckKind};

/// Complete state of a simulation run.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The board and its landing counters.
    pub board: Board,

    /// Per-player state, in turn order.
    pub players: PlayerMap<Player>,

    /// The Chance deck.
    pub chance: Deck,

    /// The Community Chest deck.
    pub community_chest: Deck,

    /// Recorded events.
    pub narrative: Narrative,
}

impl GameState {
    /// Classic board and decks, every player on Go.
    ///
    /// `record_narrative` enables keeping the event history.
    #[must_use]
    pub fn new(player_count: usize, record_narrative: bool) -> Self {
        Self {
            board: Board::classic(),
            players: PlayerMap::new(player_count, Player::new),
            chance: Deck::chance(),
            community_chest: Deck::community_chest(),
            narrative: Narrative::new(record_narrative),
        }
    }

    /// Replace the decks, e.g. with a scripted order for a scenario.
    #[must_use]
    pub fn with_decks(mut self, chance: Deck, community_chest: Deck) -> Self {
        self.chance = chance;
        self.community_chest = community_chest;
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The round currently being played.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.narrative.round()
    }

    /// Start a new round.
    pub fn begin_round(&mut self, round: u32) {
        self.narrative.begin_round(round);
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community_chest,
        }
    }

    pub fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }

    /// Name of the space a player stands on.
    #[must_use]
    pub fn location_name(&self, id: PlayerId) -> &str {
        self.board.space(self.players[id].location()).name()
    }

    /// Move a player `steps` forward (wrapping), count the landing.
    ///
    /// Returns the destination; landing effects are not applied.
    pub fn advance_by(&mut self, id: PlayerId, steps: i32) -> SpaceId {
        let from = self.players[id].location();
        let destination = Board::wrap(from.index() as i64 + i64::from(steps));
        self.players[id].set_location(destination);
        self.board.increment_landed_count(destination);

        self.narrative.record(TurnEvent::Moved {
            player: id,
            space: destination,
            name: self.board.space(destination).name().to_string(),
        });
        destination
    }

    /// Place a player directly on `target` (card movement), count the landing.
    pub fn move_to(&mut self, id: PlayerId, target: SpaceId) {
        self.players[id].set_location(target);
        self.board.increment_landed_count(target);

        self.narrative.record(TurnEvent::CardMoved {
            player: id,
            space: target,
            name: self.board.space(target).name().to_string(),
        });
    }

    /// Send a player to jail.
    pub fn arrest(&mut self, id: PlayerId, reason: ArrestReason) {
        self.players[id].set_location(SpaceId::JAIL);
        self.board.increment_landed_count(SpaceId::JAIL);
        self.players[id].set_detention(true);

        self.narrative.record(TurnEvent::Arrested { player: id, reason });
    }

    /// Free a prisoner. Every release clears the jail clock.
    pub fn release(&mut self, id: PlayerId, reason: ReleaseReason) {
        let player = &mut self.players[id];
        player.set_detention(false);
        player.reset_turns_in_jail();

        self.narrative.record(TurnEvent::Released { player: id, reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(4, false);
        assert_eq!(state.player_count(), 4);
        assert_eq!(state.chance.len(), 16);
        assert_eq!(state.community_chest.len(), 17);
        for (_, player) in state.players.iter() {
            assert_eq!(player.location(), SpaceId::GO);
        }
    }

    #[test]
    fn test_advance_by_wraps() {
        let mut state = GameState::new(1, true);
        let p = PlayerId::new(0);
        state.player_mut(p).set_location(SpaceId::new(38));

        let destination = state.advance_by(p, 5);

        assert_eq!(destination, SpaceId::new(3));
        assert_eq!(state.player(p).location(), SpaceId::new(3));
        assert_eq!(state.board.space(destination).landed_count(), 1);
        assert_eq!(state.location_name(p), "Baltic Avenue");
    }

    #[test]
    fn test_arrest_and_release() {
        let mut state = GameState::new(1, true);
        let p = PlayerId::new(0);
        state.player_mut(p).set_location(SpaceId::new(22));

        state.arrest(p, ArrestReason::Card);
        assert!(state.player(p).is_detained());
        assert_eq!(state.player(p).location(), SpaceId::JAIL);
        assert_eq!(state.board.space(SpaceId::JAIL).landed_count(), 1);

        state.player_mut(p).increment_turns_in_jail();
        state.release(p, ReleaseReason::RolledDoubles);
        assert!(!state.player(p).is_detained());
        assert_eq!(state.player(p).turns_in_jail(), 0);

        let events: Vec<_> = state.narrative.events().cloned().collect();
        assert_eq!(
            events,
            vec![
                TurnEvent::Arrested {
                    player: p,
                    reason: ArrestReason::Card
                },
                TurnEvent::Released {
                    player: p,
                    reason: ReleaseReason::RolledDoubles
                },
            ]
        );
    }

    #[test]
    fn test_move_to_counts_landing() {
        let mut state = GameState::new(2, false);
        let p = PlayerId::new(1);
        state.move_to(p, SpaceId::BOARDWALK);
        assert_eq!(state.player(p).location(), SpaceId::BOARDWALK);
        assert_eq!(state.board.space(SpaceId::BOARDWALK).landed_count(), 1);
    }

    #[test]
    fn test_deck_access() {
        let mut state = GameState::new(1, false);
        assert_eq!(state.deck(DeckKind::Chance).kind(), DeckKind::Chance);
        state.deck_mut(DeckKind::CommunityChest).draw().unwrap();
        assert_eq!(state.community_chest.len(), 16);
    }
}
