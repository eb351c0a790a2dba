//! Klondike rules.
//!
//! - `acceptance`: Which pile accepts which card or run
//! - `deal`: Deck construction and the opening layout
//! - `win`: Terminal-state detection
//!
//! Everything here is a pure function over board state. Mutation happens in
//! `engine`, which calls into these rules before committing.

pub mod acceptance;
pub mod deal;
pub mod win;

pub use acceptance::{can_accept, is_ordered_run};
pub use deal::{deal, deal_ordered, new_deck};
pub use win::{detect, GameStatus};
