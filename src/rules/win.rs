//! Win detection.
//!
//! The foundation rule only ever admits the next card of the pile's suit, so
//! a foundation holding 13 cards is a complete ace-to-king suit. The game is
//! won exactly when all four foundations are full.

use serde::{Deserialize, Serialize};

use crate::core::card::DECK_SIZE;
use crate::piles::PileTable;

/// Game progression. `Playing` moves to `Won` and never back within a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
}

impl GameStatus {
    #[must_use]
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

/// Evaluate the piles.
#[must_use]
pub fn detect(piles: &PileTable) -> GameStatus {
    if piles.foundation_cards() == DECK_SIZE {
        GameStatus::Won
    } else {
        GameStatus::Playing
    }
}
