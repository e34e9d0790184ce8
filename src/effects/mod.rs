//! Card effects: the closed set of card actions and their resolution.
//!
//! ## Key Types
//!
//! - `CardAction`: What a card does (advance, go back, jail, keep, nothing)
//! - `CardResolver`: Applies a `CardAction` to `GameState`

pub mod effect;
pub mod resolver;

pub use effect::CardAction;
pub use resolver::{nearest_railroad, nearest_utility, CardResolver};
