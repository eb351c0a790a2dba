//! Deck construction and the opening deal.

use crate::core::card::{CardId, DECK_SIZE};
use crate::core::rng::GameRng;
use crate::core::state::{Board, BoardBuilder};
use crate::piles::{PileId, TABLEAU_COUNT};

/// The 52 card ids in deck-building order: suits in turn, ace to king.
#[must_use]
pub fn new_deck() -> Vec<CardId> {
    CardId::all().collect()
}

/// Shuffle a fresh deck and deal it.
///
/// Tableau `i` receives `i + 1` cards from the front of the shuffled deck,
/// all face-down except the last. The remaining 24 cards go to the stock
/// face-down; the last of them is the stock top.
#[must_use]
pub fn deal(rng: &mut GameRng) -> Board {
    let mut deck = new_deck();
    rng.shuffle(&mut deck);
    deal_ordered(&deck)
}

/// Deal an already-ordered deck.
///
/// Panics unless `deck` holds each of the 52 cards once.
#[must_use]
pub fn deal_ordered(deck: &[CardId]) -> Board {
    assert!(deck.len() == DECK_SIZE, "Deck holds {} cards, expected {}", deck.len(), DECK_SIZE);

    let mut cards = deck.iter().copied();
    let mut builder = BoardBuilder::new();

    for column in 0..TABLEAU_COUNT {
        let pile = PileId::tableau(column);
        for dealt in 0..=column {
            let Some(card) = cards.next() else {
                unreachable!("deck length checked above");
            };
            builder = builder.place(pile, card, dealt < column);
        }
    }
    for card in cards {
        builder = builder.face_down(PileId::STOCK, card);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piles::{PileKind, FOUNDATION_COUNT};

    #[test]
    fn test_new_deck_is_unique() {
        let mut deck = new_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        deck.dedup();
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_layout() {
        let board = deal(&mut GameRng::new(42));

        for column in 0..TABLEAU_COUNT {
            let pile = board.pile(PileId::tableau(column));
            assert_eq!(pile.len(), column + 1);

            let (top, rest) = pile.cards().split_last().unwrap();
            assert!(board.card(*top).is_face_up());
            assert!(rest.iter().all(|&c| board.card(c).face_down));
        }

        assert_eq!(board.pile(PileId::STOCK).len(), 24);
        assert!(board
            .pile(PileId::STOCK)
            .cards()
            .iter()
            .all(|&c| board.card(c).face_down));
        assert!(board.pile(PileId::DISCARD).is_empty());
        for i in 0..FOUNDATION_COUNT {
            assert!(board.pile(PileId::foundation(i)).is_empty());
        }
        board.verify_partition();
    }

    #[test]
    fn test_deal_ordered_follows_deck_order() {
        let deck = new_deck();
        let board = deal_ordered(&deck);

        assert_eq!(board.pile(PileId::tableau(0)).cards(), &deck[..1]);
        assert_eq!(board.pile(PileId::tableau(1)).cards(), &deck[1..3]);
        assert_eq!(board.pile(PileId::tableau(6)).cards(), &deck[21..28]);
        assert_eq!(board.pile(PileId::STOCK).cards(), &deck[28..]);
        assert_eq!(board.pile(PileId::STOCK).kind(), PileKind::Stock);
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(deal(&mut GameRng::new(7)), deal(&mut GameRng::new(7)));
        assert_ne!(deal(&mut GameRng::new(7)), deal(&mut GameRng::new(8)));
    }

    #[test]
    #[should_panic(expected = "Deck holds 51 cards")]
    fn test_deal_ordered_checks_length() {
        let deck = new_deck();
        let _ = deal_ordered(&deck[1..]);
    }
}
