//! Move records: one entry per user-visible action.

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::state::Run;
use crate::piles::PileId;

/// A committed action, with enough detail to reverse it exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRecord {
    /// One card moved between piles.
    Single {
        card: CardId,
        from: PileId,
        to: PileId,
        /// The source's new top was turned face-up by the move.
        revealed: bool,
    },

    /// Two or more cards moved together, bottom to top.
    Run {
        cards: Run,
        from: PileId,
        to: PileId,
        /// The source's new top was turned face-up by the move.
        revealed: bool,
    },

    /// The stock top was moved to the discard and turned face-up.
    Draw { card: CardId },

    /// The discard was turned over into the stock.
    Refill { count: usize },

    /// A face-down tableau top was turned face-up by clicking it.
    Flip { card: CardId },
}

impl MoveRecord {
    /// Record a pile-to-pile move, choosing `Single` or `Run` by length.
    ///
    /// Panics on an empty run.
    #[must_use]
    pub fn relocation(cards: Run, from: PileId, to: PileId, revealed: bool) -> Self {
        match cards.as_slice() {
            [] => panic!("Cannot record an empty move from {}", from),
            [card] => MoveRecord::Single {
                card: *card,
                from,
                to,
                revealed,
            },
            _ => MoveRecord::Run {
                cards,
                from,
                to,
                revealed,
            },
        }
    }

    /// Number of cards the action relocated.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            MoveRecord::Single { .. } | MoveRecord::Draw { .. } => 1,
            MoveRecord::Run { cards, .. } => cards.len(),
            MoveRecord::Refill { count } => *count,
            MoveRecord::Flip { .. } => 0,
        }
    }

    /// Did the action turn a tableau card face-up as a side effect?
    #[must_use]
    pub fn revealed(&self) -> bool {
        match self {
            MoveRecord::Single { revealed, .. } | MoveRecord::Run { revealed, .. } => *revealed,
            MoveRecord::Draw { .. } | MoveRecord::Refill { .. } | MoveRecord::Flip { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn id(raw: u8) -> CardId {
        CardId::from_raw(raw).unwrap()
    }

    #[test]
    fn test_relocation_picks_variant() {
        let single = MoveRecord::relocation(
            smallvec![id(3)],
            PileId::tableau(0),
            PileId::foundation(0),
            true,
        );
        assert_eq!(
            single,
            MoveRecord::Single {
                card: id(3),
                from: PileId::tableau(0),
                to: PileId::foundation(0),
                revealed: true,
            }
        );

        let run = MoveRecord::relocation(
            smallvec![id(3), id(4)],
            PileId::tableau(0),
            PileId::tableau(1),
            false,
        );
        assert!(matches!(run, MoveRecord::Run { ref cards, .. } if cards.len() == 2));
        assert_eq!(run.card_count(), 2);
        assert!(!run.revealed());
    }

    #[test]
    #[should_panic(expected = "empty move")]
    fn test_relocation_rejects_empty() {
        let _ = MoveRecord::relocation(Run::new(), PileId::tableau(0), PileId::tableau(1), false);
    }

    #[test]
    fn test_card_count() {
        assert_eq!(MoveRecord::Draw { card: id(0) }.card_count(), 1);
        assert_eq!(MoveRecord::Refill { count: 24 }.card_count(), 24);
        assert_eq!(MoveRecord::Flip { card: id(7) }.card_count(), 0);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::relocation(
            smallvec![id(10), id(11)],
            PileId::tableau(2),
            PileId::tableau(5),
            true,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
