//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! The mutable state of one participant: board location, jail status and
//! held "Get Out of Jail Free" privileges. Only the turn engine mutates it.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::SpaceId;
use crate::cards::DeckKind;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use monopoly_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use monopoly_sim::core::{PlayerId, PlayerMap};
///
/// let mut laps: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// laps[PlayerId::new(1)] += 1;
/// assert_eq!(laps[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// State of a single participant.
///
/// Players start on Go, free, holding nothing. The setters carry the
/// few side effects the rules depend on:
/// - `set_detention(true)` restarts the jail clock.
/// - `increment_turns_in_jail()` only counts while detained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    location: SpaceId,
    detained: bool,
    turns_in_jail: u32,
    holds_chance_jail_card: bool,
    holds_community_chest_jail_card: bool,
}

impl Player {
    /// Create a player standing on Go.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            location: SpaceId::GO,
            detained: false,
            turns_in_jail: 0,
            holds_chance_jail_card: false,
            holds_community_chest_jail_card: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn location(&self) -> SpaceId {
        self.location
    }

    #[must_use]
    pub fn is_detained(&self) -> bool {
        self.detained
    }

    #[must_use]
    pub fn turns_in_jail(&self) -> u32 {
        self.turns_in_jail
    }

    /// Does the player hold the jail card that came from `deck`?
    #[must_use]
    pub fn holds_jail_card(&self, deck: DeckKind) -> bool {
        match deck {
            DeckKind::Chance => self.holds_chance_jail_card,
            DeckKind::CommunityChest => self.holds_community_chest_jail_card,
        }
    }

    /// The first held jail card, Chance before Community Chest.
    #[must_use]
    pub fn held_jail_card(&self) -> Option<DeckKind> {
        [DeckKind::Chance, DeckKind::CommunityChest]
            .into_iter()
            .find(|&deck| self.holds_jail_card(deck))
    }

    pub fn set_location(&mut self, location: SpaceId) {
        self.location = location;
    }

    /// Set the jail flag. Entering jail always starts a fresh sentence.
    pub fn set_detention(&mut self, detained: bool) {
        self.detained = detained;
        if detained {
            self.turns_in_jail = 0;
        }
    }

    /// Count one failed escape attempt. No-op for a free player.
    pub fn increment_turns_in_jail(&mut self) {
        if self.detained {
            self.turns_in_jail += 1;
        }
    }

    pub fn reset_turns_in_jail(&mut self) {
        self.turns_in_jail = 0;
    }

    pub fn set_jail_card(&mut self, deck: DeckKind, held: bool) {
        match deck {
            DeckKind::Chance => self.holds_chance_jail_card = held,
            DeckKind::CommunityChest => self.holds_community_chest_jail_card = held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<Player> = PlayerMap::new(3, Player::new);

        assert_eq!(map.player_count(), 3);
        for (id, player) in map.iter() {
            assert_eq!(player.id(), id);
        }
    }

    #[test]
    fn test_player_map_ids_in_order() {
        let map: PlayerMap<u8> = PlayerMap::new(3, |p| p.0);
        let ids: Vec<_> = map.player_ids().collect();
        assert_eq!(ids, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_new_player_starts_on_go() {
        let player = Player::new(PlayerId::new(2));
        assert_eq!(player.location(), SpaceId::GO);
        assert!(!player.is_detained());
        assert_eq!(player.turns_in_jail(), 0);
        assert_eq!(player.held_jail_card(), None);
    }

    #[test]
    fn test_detention_resets_sentence() {
        let mut player = Player::new(PlayerId::new(0));
        player.set_detention(true);
        player.increment_turns_in_jail();
        player.increment_turns_in_jail();
        assert_eq!(player.turns_in_jail(), 2);

        // Release alone keeps the count
        player.set_detention(false);
        assert_eq!(player.turns_in_jail(), 2);

        player.set_detention(true);
        assert_eq!(player.turns_in_jail(), 0);
    }

    #[test]
    fn test_free_player_does_not_serve_time() {
        let mut player = Player::new(PlayerId::new(0));
        player.increment_turns_in_jail();
        assert_eq!(player.turns_in_jail(), 0);
    }

    #[test]
    fn test_jail_card_precedence() {
        let mut player = Player::new(PlayerId::new(0));
        player.set_jail_card(DeckKind::CommunityChest, true);
        assert_eq!(player.held_jail_card(), Some(DeckKind::CommunityChest));

        player.set_jail_card(DeckKind::Chance, true);
        assert_eq!(player.held_jail_card(), Some(DeckKind::Chance));
        assert!(player.holds_jail_card(DeckKind::CommunityChest));
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(1));
        player.set_location(SpaceId::new(24));
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
