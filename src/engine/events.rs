//! Engine output: events for the presentation layer and move outcomes.

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::state::Run;
use crate::piles::PileId;

/// Something the presentation layer should react to.
///
/// Engine state is already consistent when an event is emitted; animations
/// triggered by events never feed back into the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A new game was dealt.
    Dealt { seed: Option<u64> },

    /// A drag began; these cards travel together.
    RunSelected { cards: Run, from: PileId },

    /// Cards moved between piles, bottom to top.
    CardMoved { cards: Run, from: PileId, to: PileId },

    /// A card was turned over.
    CardFlipped { card: CardId, face_down: bool },

    /// The discard was turned over into the stock.
    StockRefilled { count: usize },

    /// Every foundation is complete.
    GameWon,
}

/// Why a proposed action did nothing.
///
/// Rejections are ordinary outcomes of play, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The game is won; only a new game is accepted.
    GameOver,

    /// The card cannot be picked up (face-down, buried in the discard,
    /// on a foundation, or not the top for a double-click).
    NotMovable,

    /// No pile under the drop point accepts the run.
    NoDestination,

    /// The chosen pile does not accept the run.
    IllegalDestination,

    /// Both stock and discard are empty.
    EmptyStock,

    /// Refill requested while the stock still has cards.
    StockNotEmpty,

    /// The undo log is empty.
    NothingToUndo,
}

/// Result of an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// State changed; these events describe how.
    Committed(Vec<EngineEvent>),

    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed(_))
    }

    /// The rejection reason, if rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected(reason) => Some(*reason),
            MoveOutcome::Committed(_) => None,
        }
    }

    /// The emitted events; empty when rejected.
    #[must_use]
    pub fn into_events(self) -> Vec<EngineEvent> {
        match self {
            MoveOutcome::Committed(events) => events,
            MoveOutcome::Rejected(_) => Vec::new(),
        }
    }
}
