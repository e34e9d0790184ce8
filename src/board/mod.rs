//! The game board.
//!
//! ## Key Types
//!
//! - `SpaceId`: Position on the board
//! - `SpaceKind`: Landing behavior tag (Chance, Go To Jail, ...)
//! - `Space`: Name, kind and landing counter
//! - `Board`: The wrapped ring of 40 spaces

pub mod layout;
pub mod space;

pub use layout::{wrap_index, Board, BOARD_SIZE, CLASSIC_LAYOUT};
pub use space::{Space, SpaceId, SpaceKind};
