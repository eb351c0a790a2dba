//! Board state: every card, and the piles that partition them.
//!
//! ## Board
//!
//! - 52 `Card`s indexed by `CardId` (orientation + pile back-reference)
//! - The `PileTable` (card order within each pile)
//!
//! The board is the only place pile membership changes. Every relocation
//! updates both the pile order and the moved cards' back-references, so the
//! two can never disagree. `verify_partition` checks the central invariant:
//! 52 cards, each in exactly one pile, each pile matching its cards'
//! back-references.
//!
//! ## BoardBuilder
//!
//! Places cards explicitly. Anything not placed goes to the stock face-down.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId, DECK_SIZE};
use crate::piles::{Pile, PileId, PileTable};

/// Longest run that can move at once (king down to ace).
pub const MAX_RUN: usize = 13;

/// An ordered run of cards, bottom to top.
pub type Run = SmallVec<[CardId; MAX_RUN]>;

/// Every card and every pile in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
    piles: PileTable,
}

impl Board {
    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Iterate all cards in id order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        self.piles.get(id)
    }

    #[must_use]
    pub fn piles(&self) -> &PileTable {
        &self.piles
    }

    /// The top card of a pile, if any.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.piles.top_card(pile).map(|id| self.card(id))
    }

    /// Move the suffix of `from` starting at `first` onto `to`.
    ///
    /// Returns the moved cards in their original order.
    /// Panics if `first` is not in `from`.
    pub(crate) fn move_run(&mut self, from: PileId, first: CardId, to: PileId) -> Run {
        let run: Run = self.piles.get_mut(from).take_from(first).into_iter().collect();
        self.piles.get_mut(to).extend(&run);
        for &id in &run {
            self.cards[id.index()].pile = to;
        }
        run
    }

    /// Move an exact run from the top of `from` onto `to`.
    ///
    /// Panics unless `run` is precisely the top suffix of `from`.
    pub(crate) fn move_exact(&mut self, from: PileId, run: &[CardId], to: PileId) {
        let Some(&first) = run.first() else {
            return;
        };
        let moved = self.move_run(from, first, to);
        assert!(
            moved.as_slice() == run,
            "Run {:?} was not the top of {}: found {:?}",
            run,
            from,
            moved
        );
    }

    /// Turn a card over.
    pub(crate) fn flip(&mut self, id: CardId) {
        self.cards[id.index()].flip();
    }

    /// Set a card's orientation.
    pub(crate) fn set_face_down(&mut self, id: CardId, face_down: bool) {
        self.cards[id.index()].face_down = face_down;
    }

    /// Remove every card from a pile, bottom to top. Back-references are
    /// left pointing at the old pile until the cards are placed again.
    pub(crate) fn drain_pile(&mut self, pile: PileId) -> Vec<CardId> {
        self.piles.get_mut(pile).drain_all()
    }

    /// Append a card to a pile and update its back-reference.
    pub(crate) fn place(&mut self, id: CardId, pile: PileId) {
        self.piles.get_mut(pile).add_card(id);
        self.cards[id.index()].pile = pile;
    }

    /// Check the partition invariant.
    ///
    /// Panics if the piles do not hold exactly the 52 cards once each, or if
    /// a card's back-reference disagrees with the pile holding it. A failure
    /// here is a defect in the engine, never a user error.
    pub fn verify_partition(&self) {
        let total = self.piles.total_cards();
        assert!(total == DECK_SIZE, "Board holds {} cards, expected {}", total, DECK_SIZE);

        let mut seen = FxHashSet::default();
        for (pile_id, pile) in self.piles.iter() {
            for &id in pile.cards() {
                assert!(seen.insert(id), "Card {} appears in more than one pile", id);
                let recorded = self.card(id).pile;
                assert!(
                    recorded == pile_id,
                    "Card {} is in {} but records {}",
                    id,
                    pile_id,
                    recorded
                );
            }
        }
    }
}

/// Builds a board card by card.
///
/// ## Usage
///
/// ```
/// use klondike_engine::core::{BoardBuilder, CardId, Rank, Suit};
/// use klondike_engine::piles::PileId;
///
/// let ace = CardId::new(Suit::Spades, Rank::ACE);
/// let board = BoardBuilder::new()
///     .face_up(PileId::tableau(0), ace)
///     .build();
///
/// assert_eq!(board.card(ace).pile, PileId::tableau(0));
/// assert_eq!(board.pile(PileId::STOCK).len(), 51);
/// board.verify_partition();
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    placements: Vec<(PileId, CardId, bool)>,
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on top of a pile.
    #[must_use]
    pub fn place(mut self, pile: PileId, card: CardId, face_down: bool) -> Self {
        self.placements.push((pile, card, face_down));
        self
    }

    /// Place a face-up card on top of a pile.
    #[must_use]
    pub fn face_up(self, pile: PileId, card: CardId) -> Self {
        self.place(pile, card, false)
    }

    /// Place a face-down card on top of a pile.
    #[must_use]
    pub fn face_down(self, pile: PileId, card: CardId) -> Self {
        self.place(pile, card, true)
    }

    /// Place several face-up cards, bottom to top.
    #[must_use]
    pub fn face_up_run(self, pile: PileId, cards: &[CardId]) -> Self {
        cards.iter().fold(self, |b, &c| b.face_up(pile, c))
    }

    /// Finish the board. Unplaced cards go to the stock face-down, in id order,
    /// beneath anything placed there explicitly.
    ///
    /// Panics if a card was placed twice.
    #[must_use]
    pub fn build(self) -> Board {
        let mut placed = FxHashSet::default();
        for &(_, card, _) in &self.placements {
            assert!(placed.insert(card), "Card {} placed twice", card);
        }

        let mut board = Board {
            cards: CardId::all().map(|id| Card::new(id, true, PileId::STOCK)).collect(),
            piles: PileTable::new(),
        };

        for id in CardId::all().filter(|id| !placed.contains(id)) {
            board.place(id, PileId::STOCK);
        }
        for (pile, card, face_down) in self.placements {
            board.place(card, pile);
            board.set_face_down(card, face_down);
        }

        board.verify_partition();
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn card(suit: Suit, rank: u8) -> CardId {
        CardId::new(suit, Rank::new(rank).unwrap())
    }

    #[test]
    fn test_builder_defaults_to_stock() {
        let board = BoardBuilder::new().build();

        assert_eq!(board.pile(PileId::STOCK).len(), DECK_SIZE);
        assert!(board.cards().all(|c| c.face_down && c.pile == PileId::STOCK));
    }

    #[test]
    fn test_builder_places_cards() {
        let k = card(Suit::Spades, 13);
        let q = card(Suit::Hearts, 12);
        let board = BoardBuilder::new()
            .face_down(PileId::tableau(1), card(Suit::Clubs, 2))
            .face_up_run(PileId::tableau(1), &[k, q])
            .build();

        let pile = board.pile(PileId::tableau(1));
        assert_eq!(pile.cards(), &[card(Suit::Clubs, 2), k, q]);
        assert_eq!(board.top_card(PileId::tableau(1)).map(Card::id), Some(q));
        assert!(board.card(card(Suit::Clubs, 2)).face_down);
        assert!(board.card(q).is_face_up());
        assert_eq!(board.pile(PileId::STOCK).len(), 49);
    }

    #[test]
    #[should_panic(expected = "placed twice")]
    fn test_builder_rejects_duplicates() {
        let ace = card(Suit::Hearts, 1);
        let _ = BoardBuilder::new()
            .face_up(PileId::tableau(0), ace)
            .face_up(PileId::tableau(1), ace)
            .build();
    }

    #[test]
    fn test_move_run_updates_back_references() {
        let run = [card(Suit::Spades, 9), card(Suit::Hearts, 8), card(Suit::Clubs, 7)];
        let mut board = BoardBuilder::new()
            .face_up_run(PileId::tableau(0), &run)
            .build();

        let moved = board.move_run(PileId::tableau(0), run[1], PileId::tableau(4));

        assert_eq!(moved.as_slice(), &run[1..]);
        assert_eq!(board.pile(PileId::tableau(0)).cards(), &run[..1]);
        assert_eq!(board.pile(PileId::tableau(4)).cards(), &run[1..]);
        assert_eq!(board.card(run[2]).pile, PileId::tableau(4));
        board.verify_partition();
    }

    #[test]
    #[should_panic(expected = "was not the top")]
    fn test_move_exact_rejects_mismatch() {
        let run = [card(Suit::Spades, 9), card(Suit::Hearts, 8)];
        let mut board = BoardBuilder::new()
            .face_up_run(PileId::tableau(0), &run)
            .build();

        board.move_exact(PileId::tableau(0), &run[..1], PileId::tableau(1));
    }

    #[test]
    #[should_panic(expected = "records")]
    fn test_verify_detects_stale_back_reference() {
        let mut board = BoardBuilder::new().build();
        let id = card(Suit::Hearts, 1);
        board.cards[id.index()].pile = PileId::DISCARD;

        board.verify_partition();
    }

    #[test]
    #[should_panic(expected = "Board holds 51 cards")]
    fn test_verify_detects_missing_card() {
        let mut board = BoardBuilder::new().build();
        board.piles.get_mut(PileId::STOCK).pop();

        board.verify_partition();
    }

    #[test]
    fn test_board_serde() {
        let board = BoardBuilder::new()
            .face_up(PileId::foundation(0), card(Suit::Diamonds, 1))
            .build();

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
