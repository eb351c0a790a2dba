//! Fixed table of the 13 piles in a game.
//!
//! The `PileTable` owns the card order of every pile. Card orientation and
//! back-references live on the cards themselves (see `core::state::Board`),
//! so the table only answers "what is where, in which order".

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileId, PileKind};
use crate::core::card::CardId;

/// The 13 piles, indexed by `PileId`.
///
/// ## Usage
///
/// ```
/// use klondike_engine::piles::{PileTable, PileId, PileKind};
///
/// let table = PileTable::new();
/// assert_eq!(table[PileId::STOCK].kind(), PileKind::Stock);
/// assert_eq!(table.total_cards(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileTable {
    piles: Vec<Pile>,
}

impl Default for PileTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PileTable {
    /// Create a table of empty piles in piling order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: PileId::all().map(|id| Pile::new(id.kind())).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: PileId) -> &mut Pile {
        &mut self.piles[id.index()]
    }

    /// Iterate piles in piling order.
    pub fn iter(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        PileId::all().zip(self.piles.iter())
    }

    /// Iterate piles of one kind in creation order.
    pub fn of_kind(&self, kind: PileKind) -> impl Iterator<Item = (PileId, &Pile)> {
        self.iter().filter(move |(_, pile)| pile.kind() == kind)
    }

    #[must_use]
    pub fn top_card(&self, id: PileId) -> Option<CardId> {
        self.get(id).top_card()
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Total number of cards across the foundations.
    #[must_use]
    pub fn foundation_cards(&self) -> usize {
        self.of_kind(PileKind::Foundation).map(|(_, p)| p.len()).sum()
    }
}

impl Index<PileId> for PileTable {
    type Output = Pile;

    fn index(&self, id: PileId) -> &Pile {
        self.get(id)
    }
}
