//! Pile system for card locations.
//!
//! A game has exactly 13 piles in a fixed order. Each pile carries a
//! `PileKind` tag; acceptance rules dispatch on the tag (see
//! `rules::acceptance`), never on per-instance state.
//!
//! ## Key Types
//!
//! - `PileId`: Index into the fixed pile table, in piling order
//! - `PileKind`: Stock, discard, foundation, or tableau
//! - `Pile`: Ordered card storage (last card is the top)
//! - `PileTable`: All 13 piles

pub mod pile;
pub mod table;

pub use pile::{Pile, PileId, PileKind, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
pub use table::PileTable;
