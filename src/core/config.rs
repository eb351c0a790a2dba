//! Engine configuration types.
//!
//! The presentation layer configures the engine at startup by providing:
//! - `LayoutConfig`: Where piles sit on the table and how big a card is,
//!   used to resolve a drop point to a pile
//! - `RefillPolicy`: Whether recycling the discard into the stock can be undone
//! - `EngineConfig`: Combines all configuration

use serde::{Deserialize, Serialize};

use super::intent::Point;
use crate::piles::{PileId, PileKind};

/// Table geometry in presentation units.
///
/// Only the geometry needed for hit-testing lives here. Colors, themes and
/// card artwork belong to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Card width.
    pub card_width: f64,

    /// Card height.
    pub card_height: f64,

    /// Top-left of the stock slot.
    pub stock_origin: Point,

    /// Top-left of the discard slot.
    pub discard_origin: Point,

    /// Top-left of the first foundation slot.
    pub foundation_origin: Point,

    /// Top-left of the first tableau slot.
    pub tableau_origin: Point,

    /// Horizontal distance between neighbouring foundation or tableau slots.
    pub column_spacing: f64,

    /// Vertical offset between stacked cards in a tableau.
    pub tableau_gap: f64,

    /// Vertical offset between stacked cards in stock, discard and foundations.
    pub stacked_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 150.0,
            card_height: 215.0,
            stock_origin: Point::new(60.0, 20.0),
            discard_origin: Point::new(250.0, 20.0),
            foundation_origin: Point::new(600.0, 20.0),
            tableau_origin: Point::new(60.0, 275.0),
            column_spacing: 180.0,
            tableau_gap: 30.0,
            stacked_gap: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Create the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card size.
    #[must_use]
    pub fn with_card_size(mut self, width: f64, height: f64) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Set the tableau fan offset.
    #[must_use]
    pub fn with_tableau_gap(mut self, gap: f64) -> Self {
        self.tableau_gap = gap;
        self
    }

    /// Set the horizontal spacing between columns.
    #[must_use]
    pub fn with_column_spacing(mut self, spacing: f64) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Top-left corner of a pile's base slot.
    #[must_use]
    pub fn pile_origin(&self, pile: PileId) -> Point {
        let column = pile.ordinal() as f64 * self.column_spacing;
        match pile.kind() {
            PileKind::Stock => self.stock_origin,
            PileKind::Discard => self.discard_origin,
            PileKind::Foundation => self.foundation_origin.offset(column, 0.0),
            PileKind::Tableau => self.tableau_origin.offset(column, 0.0),
        }
    }

    /// Vertical offset between stacked cards in a pile.
    #[must_use]
    pub fn pile_gap(&self, pile: PileId) -> f64 {
        match pile.kind() {
            PileKind::Tableau => self.tableau_gap,
            _ => self.stacked_gap,
        }
    }
}

/// Whether recycling the discard back into the stock is undoable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefillPolicy {
    /// The refill is logged and `undo` puts the cards back on the discard.
    #[default]
    Undoable,

    /// The refill is final. The undo log is cleared, since older entries
    /// refer to discard positions that no longer exist.
    Permanent,
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Table geometry for drop resolution.
    pub layout: LayoutConfig,

    /// Stock refill reversibility.
    pub refill_policy: RefillPolicy,
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the refill policy.
    #[must_use]
    pub fn with_refill_policy(mut self, policy: RefillPolicy) -> Self {
        self.refill_policy = policy;
        self
    }
}
