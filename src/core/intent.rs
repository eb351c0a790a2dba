//! User intents consumed by the engine.
//!
//! The presentation layer translates clicks and drags into `Intent` values
//! and hands them to `Klondike::handle_intent`. Intents carry card ids and
//! either a pile id or a table coordinate, never references into engine state.

use serde::{Deserialize, Serialize};

use super::card::CardId;
use crate::piles::PileId;

/// A point on the table, in presentation units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Where a dragged card was released.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DropTarget {
    /// A pile chosen directly (keyboard, tests, precomputed hit-test).
    Pile(PileId),

    /// Top-left corner of the dragged card when released.
    Point(Point),
}

/// A user intent.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::{CardId, DropTarget, Intent};
/// use klondike_engine::piles::PileId;
///
/// let card = CardId::from_raw(12).unwrap();
/// let release = Intent::DragRelease {
///     card,
///     target: DropTarget::Pile(PileId::tableau(3)),
/// };
/// assert!(matches!(release, Intent::DragRelease { .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Deal a new game. `None` draws a random seed.
    NewGame { seed: Option<u64> },

    /// Click on the stock pile (draw, or refill when empty).
    ClickStock,

    /// Single click on a card.
    ClickCard { card: CardId },

    /// Double click on a card: send it to a foundation if one accepts it.
    DoubleClick { card: CardId },

    /// Press on a card to begin a drag.
    DragStart { card: CardId },

    /// Release a dragged card.
    DragRelease { card: CardId, target: DropTarget },

    /// Undo the most recent action.
    Undo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(10.0, 20.0).offset(5.0, -5.0);
        assert_eq!(p, Point::new(15.0, 15.0));
    }

    #[test]
    fn test_intent_serialization() {
        let intent = Intent::DragRelease {
            card: CardId::from_raw(7).unwrap(),
            target: DropTarget::Point(Point::new(300.0, 410.5)),
        };

        let json = serde_json::to_string(&intent).unwrap();
        let deserialized: Intent = serde_json::from_str(&json).unwrap();

        assert_eq!(intent, deserialized);
    }

    #[test]
    fn test_out_of_range_ids_rejected() {
        assert!(serde_json::from_str::<Intent>(r#"{"ClickCard":{"card":99}}"#).is_err());
        assert!(serde_json::from_str::<DropTarget>(r#"{"Pile":40}"#).is_err());

        let target: DropTarget = serde_json::from_str(r#"{"Pile":6}"#).unwrap();
        assert_eq!(target, DropTarget::Pile(PileId::tableau(0)));
    }
}
