//! The board: a fixed ring of 40 spaces.
//!
//! Every index is wrapped onto the ring, so `space_at` never fails and
//! negative offsets walk backwards across Go. Lookups by `&Space` use
//! identity, so same-named spaces resolve to their own positions.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::space::{Space, SpaceId, SpaceKind};
use crate::core::SimError;

/// Number of spaces on the board.
pub const BOARD_SIZE: usize = 40;

/// The classic pre-2008 US layout, starting from Go.
pub const CLASSIC_LAYOUT: [(&str, SpaceKind); BOARD_SIZE] = [
    ("Go", SpaceKind::Go),
    ("Mediterranean Avenue", SpaceKind::Property),
    ("Community Chest", SpaceKind::CommunityChest),
    ("Baltic Avenue", SpaceKind::Property),
    ("Income Tax", SpaceKind::Tax),
    ("Reading Railroad", SpaceKind::Railroad),
    ("Oriental Avenue", SpaceKind::Property),
    ("Chance", SpaceKind::Chance),
    ("Vermont Avenue", SpaceKind::Property),
    ("Connecticut Avenue", SpaceKind::Property),
    ("In Jail/Just Visiting", SpaceKind::Jail),
    ("St. Charles Place", SpaceKind::Property),
    ("Electric Company", SpaceKind::Utility),
    ("States Avenue", SpaceKind::Property),
    ("Virginia Avenue", SpaceKind::Property),
    ("Pennsylvania Railroad", SpaceKind::Railroad),
    ("St. James Place", SpaceKind::Property),
    ("Community Chest", SpaceKind::CommunityChest),
    ("Tennessee Avenue", SpaceKind::Property),
    ("New York Avenue", SpaceKind::Property),
    ("Free Parking", SpaceKind::FreeParking),
    ("Kentucky Avenue", SpaceKind::Property),
    ("Chance", SpaceKind::Chance),
    ("Indiana Avenue", SpaceKind::Property),
    ("Illinois Avenue", SpaceKind::Property),
    ("B. & O. Railroad", SpaceKind::Railroad),
    ("Atlantic Avenue", SpaceKind::Property),
    ("Ventnor Avenue", SpaceKind::Property),
    ("Water Works", SpaceKind::Utility),
    ("Marvin Gardens", SpaceKind::Property),
    ("Go To Jail", SpaceKind::GoToJail),
    ("Pacific Avenue", SpaceKind::Property),
    ("North Carolina Avenue", SpaceKind::Property),
    ("Community Chest", SpaceKind::CommunityChest),
    ("Pennsylvania Avenue", SpaceKind::Property),
    ("Short Line", SpaceKind::Railroad),
    ("Chance", SpaceKind::Chance),
    ("Park Place", SpaceKind::Property),
    ("Luxury Tax", SpaceKind::Tax),
    ("Boardwalk", SpaceKind::Property),
];

/// Map any integer into `[lower, upper]` by true modulo.
///
/// Correct for arbitrarily negative `n`:
///
/// ```
/// use monopoly_sim::board::wrap_index;
///
/// assert_eq!(wrap_index(-1, 0, 39), 39);
/// assert_eq!(wrap_index(-41, 0, 39), 39);
/// assert_eq!(wrap_index(40, 0, 39), 0);
/// ```
#[must_use]
pub fn wrap_index(n: i64, lower: i64, upper: i64) -> i64 {
    assert!(upper >= lower, "Empty range [{lower}, {upper}]");
    let range_size = upper - lower + 1;
    lower + (n - lower).rem_euclid(range_size)
}

/// The fixed ring of spaces, owning every landing counter.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    by_name: FxHashMap<String, SmallVec<[SpaceId; 3]>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl Board {
    /// Build the classic board with all counters at zero.
    #[must_use]
    pub fn classic() -> Self {
        let spaces: Vec<Space> = CLASSIC_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, &(name, kind))| Space::new(SpaceId(i as u8), name, kind))
            .collect();

        let mut by_name: FxHashMap<String, SmallVec<[SpaceId; 3]>> = FxHashMap::default();
        for space in &spaces {
            by_name
                .entry(space.name().to_string())
                .or_default()
                .push(space.id());
        }

        Self { spaces, by_name }
    }

    /// Wrap any integer onto a board position.
    #[must_use]
    pub fn wrap(n: i64) -> SpaceId {
        SpaceId(wrap_index(n, 0, BOARD_SIZE as i64 - 1) as u8)
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// The space at any integer position, wrapped onto the ring.
    #[must_use]
    pub fn space_at(&self, n: i64) -> &Space {
        &self.spaces[Self::wrap(n).index()]
    }

    /// The space with a known ID.
    #[must_use]
    pub fn space(&self, id: SpaceId) -> &Space {
        &self.spaces[id.index()]
    }

    /// Position of `space` on this board, by identity.
    ///
    /// Fails if `space` is not one of this board's own spaces, even when an
    /// equal space exists here (e.g. a space from a cloned board).
    pub fn index_of(&self, space: &Space) -> Result<SpaceId, SimError> {
        self.spaces
            .iter()
            .find(|candidate| std::ptr::eq(*candidate, space))
            .map(Space::id)
            .ok_or_else(|| SimError::space_not_found(space.name()))
    }

    /// The space `offset` positions away from `space`, either direction.
    pub fn space_relative_to(&self, space: &Space, offset: i64) -> Result<&Space, SimError> {
        let index = self.index_of(space)?;
        Ok(self.space_at(index.index() as i64 + offset))
    }

    /// Record a landing on `id`, returning the new count.
    pub fn increment_landed_count(&mut self, id: SpaceId) -> u64 {
        self.spaces[id.index()].record_landing()
    }

    /// Every position carrying `name`, in board order.
    #[must_use]
    pub fn spaces_named(&self, name: &str) -> &[SpaceId] {
        self.by_name.get(name).map_or(&[], |ids| ids.as_slice())
    }

    /// The first position carrying `name`.
    #[must_use]
    pub fn find_first(&self, name: &str) -> Option<SpaceId> {
        self.spaces_named(name).first().copied()
    }

    /// The next space of `kind` strictly ahead of `from`, wrapping past Go.
    #[must_use]
    pub fn next_of_kind(&self, from: SpaceId, kind: SpaceKind) -> Option<SpaceId> {
        (1..=self.spaces.len() as i64)
            .map(|step| self.space_at(from.index() as i64 + step))
            .find(|space| space.kind() == kind)
            .map(Space::id)
    }

    /// Iterate over spaces in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Sum of every landing counter.
    #[must_use]
    pub fn total_landings(&self) -> u64 {
        self.spaces.iter().map(Space::landed_count).sum()
    }
}
