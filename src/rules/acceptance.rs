//! Pile acceptance rules.
//!
//! Acceptance is a pure function of the destination's `PileKind`, the
//! leading card of the incoming run, the destination's current top card,
//! and the run length. The run's internal ordering is checked separately,
//! when the run is selected (`is_ordered_run`).

use crate::core::card::{Card, Rank};
use crate::core::state::Board;
use crate::core::CardId;
use crate::piles::PileKind;

/// Can a pile of `kind` whose top is `top` accept a run led by `incoming`?
///
/// - Stock and discard never accept a drop.
/// - Foundation: ace on empty, else same suit and one rank higher. Single
///   cards only.
/// - Tableau: king on empty, else opposite color and one rank lower, onto a
///   face-up top. Runs of any length.
#[must_use]
pub fn can_accept(kind: PileKind, incoming: &Card, top: Option<&Card>, run_len: usize) -> bool {
    match kind {
        PileKind::Stock | PileKind::Discard => false,
        PileKind::Foundation => run_len == 1 && foundation_accepts(incoming, top),
        PileKind::Tableau => run_len >= 1 && tableau_accepts(incoming, top),
    }
}

fn foundation_accepts(incoming: &Card, top: Option<&Card>) -> bool {
    match top {
        None => incoming.rank() == Rank::ACE,
        Some(top) => incoming.suit() == top.suit() && incoming.rank().is_successor_of(top.rank()),
    }
}

fn tableau_accepts(incoming: &Card, top: Option<&Card>) -> bool {
    match top {
        None => incoming.rank() == Rank::KING,
        Some(top) => {
            top.is_face_up()
                && incoming.color() != top.color()
                && top.rank().is_successor_of(incoming.rank())
        }
    }
}

/// Is `run` face-up throughout and built down in alternating colors?
///
/// A single face-up card is always an ordered run.
#[must_use]
pub fn is_ordered_run(board: &Board, run: &[CardId]) -> bool {
    if run.iter().any(|&id| board.card(id).face_down) {
        return false;
    }
    run.windows(2).all(|pair| {
        let lower = board.card(pair[0]);
        let upper = board.card(pair[1]);
        lower.color() != upper.color() && lower.rank().is_successor_of(upper.rank())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;
    use crate::core::state::BoardBuilder;
    use crate::piles::PileId;

    fn id(suit: Suit, rank: u8) -> CardId {
        CardId::new(suit, Rank::new(rank).unwrap())
    }

    fn up(suit: Suit, rank: u8) -> Card {
        Card::new(id(suit, rank), false, PileId::STOCK)
    }

    fn down(suit: Suit, rank: u8) -> Card {
        Card::new(id(suit, rank), true, PileId::STOCK)
    }

    #[test]
    fn test_empty_foundation_accepts_any_ace() {
        for suit in Suit::ALL {
            assert!(can_accept(PileKind::Foundation, &up(suit, 1), None, 1));
        }
        for rank in 2..=13 {
            assert!(!can_accept(PileKind::Foundation, &up(Suit::Hearts, rank), None, 1));
        }
    }

    #[test]
    fn test_foundation_builds_same_suit_upward() {
        let top = up(Suit::Hearts, 2);

        assert!(can_accept(PileKind::Foundation, &up(Suit::Hearts, 3), Some(&top), 1));
        assert!(!can_accept(PileKind::Foundation, &up(Suit::Spades, 3), Some(&top), 1));
        assert!(!can_accept(PileKind::Foundation, &up(Suit::Hearts, 4), Some(&top), 1));
        assert!(!can_accept(PileKind::Foundation, &up(Suit::Diamonds, 3), Some(&top), 1));
    }

    #[test]
    fn test_foundation_rejects_runs() {
        assert!(!can_accept(PileKind::Foundation, &up(Suit::Clubs, 1), None, 2));
        let top = up(Suit::Hearts, 2);
        assert!(!can_accept(PileKind::Foundation, &up(Suit::Hearts, 3), Some(&top), 2));
    }

    #[test]
    fn test_empty_tableau_accepts_kings_only() {
        assert!(can_accept(PileKind::Tableau, &up(Suit::Diamonds, 13), None, 1));
        assert!(can_accept(PileKind::Tableau, &up(Suit::Clubs, 13), None, 5));
        assert!(!can_accept(PileKind::Tableau, &up(Suit::Diamonds, 12), None, 1));
    }

    #[test]
    fn test_tableau_builds_down_alternating() {
        let top = up(Suit::Spades, 7);

        assert!(can_accept(PileKind::Tableau, &up(Suit::Hearts, 6), Some(&top), 1));
        assert!(can_accept(PileKind::Tableau, &up(Suit::Diamonds, 6), Some(&top), 3));
        assert!(!can_accept(PileKind::Tableau, &up(Suit::Clubs, 6), Some(&top), 1));
        assert!(!can_accept(PileKind::Tableau, &up(Suit::Hearts, 5), Some(&top), 1));
        assert!(!can_accept(PileKind::Tableau, &up(Suit::Hearts, 8), Some(&top), 1));
    }

    #[test]
    fn test_tableau_rejects_face_down_top() {
        let top = down(Suit::Spades, 7);
        assert!(!can_accept(PileKind::Tableau, &up(Suit::Hearts, 6), Some(&top), 1));
    }

    #[test]
    fn test_stock_and_discard_never_accept() {
        let ace = up(Suit::Hearts, 1);
        let king = up(Suit::Hearts, 13);
        for kind in [PileKind::Stock, PileKind::Discard] {
            assert!(!can_accept(kind, &ace, None, 1));
            assert!(!can_accept(kind, &king, None, 1));
            assert!(!can_accept(kind, &king, Some(&ace), 1));
        }
    }

    #[test]
    fn test_ordered_run() {
        let run = [id(Suit::Spades, 9), id(Suit::Hearts, 8), id(Suit::Clubs, 7)];
        let board = BoardBuilder::new()
            .face_up_run(PileId::tableau(0), &run)
            .face_up_run(PileId::tableau(1), &[id(Suit::Spades, 5), id(Suit::Clubs, 4)])
            .face_down(PileId::tableau(2), id(Suit::Hearts, 3))
            .build();

        assert!(is_ordered_run(&board, &run));
        assert!(is_ordered_run(&board, &run[2..]));
        // Same color
        assert!(!is_ordered_run(&board, &[id(Suit::Spades, 5), id(Suit::Clubs, 4)]));
        // Face-down
        assert!(!is_ordered_run(&board, &[id(Suit::Hearts, 3)]));
    }
}
