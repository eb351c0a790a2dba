//! Pile identifiers, kinds, and ordered card storage.

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Total piles in a game: stock, discard, foundations, tableaus.
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT + TABLEAU_COUNT;

/// Pile type. Determines the acceptance rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down draw pile.
    Stock,
    /// Face-up pile receiving cards drawn from stock.
    Discard,
    /// Builds a single suit upward from ace.
    Foundation,
    /// Builds downward in alternating colors.
    Tableau,
}

/// Pile identifier: an index into the fixed pile table.
///
/// Ids follow the piling order used for target resolution:
/// `0` stock, `1` discard, `2..=5` foundations, `6..=12` tableaus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PileId(u8);

impl PileId {
    pub const STOCK: PileId = PileId(0);
    pub const DISCARD: PileId = PileId(1);

    const FIRST_FOUNDATION: u8 = 2;
    const FIRST_TABLEAU: u8 = Self::FIRST_FOUNDATION + FOUNDATION_COUNT as u8;

    /// Id of the foundation at `index` (0-based).
    ///
    /// Panics if `index >= FOUNDATION_COUNT`.
    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        assert!(index < FOUNDATION_COUNT, "foundation index out of range");
        Self(Self::FIRST_FOUNDATION + index as u8)
    }

    /// Id of the tableau at `index` (0-based).
    ///
    /// Panics if `index >= TABLEAU_COUNT`.
    #[must_use]
    pub const fn tableau(index: usize) -> Self {
        assert!(index < TABLEAU_COUNT, "tableau index out of range");
        Self(Self::FIRST_TABLEAU + index as u8)
    }

    /// Create from a raw id, or `None` if out of range.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < PILE_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The kind of pile at this id.
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self.0 {
            0 => PileKind::Stock,
            1 => PileKind::Discard,
            n if n < Self::FIRST_TABLEAU => PileKind::Foundation,
            _ => PileKind::Tableau,
        }
    }

    /// Position within its kind (e.g. tableau 3), 0 for stock and discard.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self.kind() {
            PileKind::Stock | PileKind::Discard => 0,
            PileKind::Foundation => (self.0 - Self::FIRST_FOUNDATION) as usize,
            PileKind::Tableau => (self.0 - Self::FIRST_TABLEAU) as usize,
        }
    }

    /// Iterate all pile ids in piling order.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..PILE_COUNT as u8).map(PileId)
    }

    /// Iterate foundation ids in creation order.
    pub fn foundations() -> impl Iterator<Item = PileId> {
        (0..FOUNDATION_COUNT).map(PileId::foundation)
    }

    /// Iterate tableau ids in creation order.
    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COUNT).map(PileId::tableau)
    }
}

impl TryFrom<u8> for PileId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        PileId::from_raw(raw)
            .ok_or_else(|| format!("pile id {} is outside 0..{}", raw, PILE_COUNT))
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            PileKind::Stock => write!(f, "Stock"),
            PileKind::Discard => write!(f, "Discard"),
            PileKind::Foundation => write!(f, "Foundation {}", self.ordinal()),
            PileKind::Tableau => write!(f, "Tableau {}", self.ordinal()),
        }
    }
}

/// An ordered pile of cards. Index 0 is the bottom, the last card is the top.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<CardId>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Position of a card in this pile, bottom = 0.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Append a card to the top.
    pub fn add_card(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Append a run to the top, preserving its order.
    pub fn extend(&mut self, run: &[CardId]) {
        self.cards.extend_from_slice(run);
    }

    /// Remove a card by identity.
    ///
    /// Panics if the card is not in this pile.
    pub fn remove_card(&mut self, card: CardId) {
        let Some(pos) = self.position(card) else {
            panic!("Card {} is not in {:?} pile", card, self.kind);
        };
        self.cards.remove(pos);
    }

    /// Split off the suffix starting at `card` (inclusive), bottom to top.
    ///
    /// Panics if the card is not in this pile.
    pub fn take_from(&mut self, card: CardId) -> Vec<CardId> {
        let Some(pos) = self.position(card) else {
            panic!("Card {} is not in {:?} pile", card, self.kind);
        };
        self.cards.split_off(pos)
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Remove and return every card, bottom to top.
    pub fn drain_all(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }
}
