//! Drag sessions and run selection.
//!
//! A drag is press, move, release. Press selects the run under the card and
//! records it; move is presentation-only; release resolves the target and
//! commits or rejects. Nothing in a session mutates pile membership.

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::state::{Board, Run};
use crate::piles::{PileId, PileKind};
use crate::rules::is_ordered_run;

/// An in-progress drag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    /// The card that was pressed; leads the run.
    pub card: CardId,

    /// Pile the run is leaving.
    pub source: PileId,

    /// Cards travelling together, bottom to top.
    pub run: Run,
}

/// Select the run that moves when `card` is dragged.
///
/// - Tableau: the card and everything above it, if face-up and in order.
/// - Discard: the card alone, and only when it is the top.
/// - Stock and foundation cards are not draggable.
#[must_use]
pub fn select_run(board: &Board, card: CardId) -> Option<Run> {
    let source = board.card(card).pile;
    let pile = board.pile(source);
    let start = pile.position(card)?;

    let run: Run = match source.kind() {
        PileKind::Tableau => pile.cards()[start..].iter().copied().collect(),
        PileKind::Discard if pile.top_card() == Some(card) => Run::from_slice(&[card]),
        _ => return None,
    };

    is_ordered_run(board, &run).then_some(run)
}

/// Begin a drag session on `card`, or `None` if it cannot be picked up.
#[must_use]
pub fn begin(board: &Board, card: CardId) -> Option<DragSession> {
    let run = select_run(board, card)?;
    Some(DragSession {
        card,
        source: board.card(card).pile,
        run,
    })
}
