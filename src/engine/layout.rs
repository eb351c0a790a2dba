//! Table geometry and drop-target resolution.
//!
//! A dragged run is released with its leading card's top-left at some point.
//! The card's rectangle is tested against each candidate pile's drop zone:
//! the rectangle of its top card, or its base slot when empty. Edges touching
//! count as overlap.
//!
//! When several piles overlap and accept the run, the **last** one in piling
//! order wins. This is a fixed contract; do not change it to first-match.

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::config::LayoutConfig;
use crate::core::intent::Point;
use crate::core::state::Board;
use crate::piles::PileId;

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A card-sized rectangle with its top-left at `origin`.
    #[must_use]
    pub fn card_at(layout: &LayoutConfig, origin: Point) -> Self {
        Self::new(origin.x, origin.y, layout.card_width, layout.card_height)
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Do the rectangles overlap or touch?
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }

    /// Is the point inside or on the edge?
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }
}

/// Where the card at `index` (0 = bottom) of a pile is drawn.
#[must_use]
pub fn slot_rect(layout: &LayoutConfig, pile: PileId, index: usize) -> Rect {
    let origin = layout.pile_origin(pile).offset(0.0, index as f64 * layout.pile_gap(pile));
    Rect::card_at(layout, origin)
}

/// Where a card currently sits on the table.
#[must_use]
pub fn card_rect(layout: &LayoutConfig, board: &Board, card: CardId) -> Rect {
    let pile = board.card(card).pile;
    let index = board.pile(pile).position(card).unwrap_or(0);
    slot_rect(layout, pile, index)
}

/// The area a dropped card must touch to land on `pile`.
#[must_use]
pub fn drop_zone(layout: &LayoutConfig, board: &Board, pile: PileId) -> Rect {
    let index = board.pile(pile).len().saturating_sub(1);
    slot_rect(layout, pile, index)
}

/// Resolve a drop point to a pile.
///
/// Candidates are every pile except `source`, in piling order. Returns the
/// last candidate whose drop zone overlaps the dragged card and which
/// `accepts` the run.
pub fn resolve_drop(
    layout: &LayoutConfig,
    board: &Board,
    source: PileId,
    dropped_at: Point,
    accepts: impl Fn(PileId) -> bool,
) -> Option<PileId> {
    let dragged = Rect::card_at(layout, dropped_at);
    PileId::all()
        .filter(|&pile| pile != source)
        .filter(|&pile| dragged.intersects(&drop_zone(layout, board, pile)) && accepts(pile))
        .last()
}

/// The pile whose slot or top card lies under `point`, if any. Later piles
/// win ties, matching `resolve_drop`.
#[must_use]
pub fn pile_at(layout: &LayoutConfig, board: &Board, point: Point) -> Option<PileId> {
    PileId::all()
        .filter(|&pile| drop_zone(layout, board, pile).contains(point))
        .last()
}
