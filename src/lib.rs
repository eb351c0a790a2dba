//! # klondike-engine
//!
//! A Klondike solitaire rules engine: dealing, move validation, the stock
//! cycle, undo, win detection, and drag-and-drop target resolution.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `Klondike` owns the board. Presentation layers send
//!    `Intent`s in and receive `EngineEvent`s out; they never mutate piles.
//!
//! 2. **Partition Invariant**: The 13 piles hold the 52 cards exactly once
//!    after every commit. Each card's `pile` back-reference agrees with the
//!    pile that holds it. A violation is a bug and panics.
//!
//! 3. **Rejections Are Values**: An illegal move returns
//!    `MoveOutcome::Rejected` and leaves state untouched.
//!
//! ## Modules
//!
//! - `core`: Cards, board state, intents, RNG, configuration
//! - `piles`: The fixed pile table
//! - `rules`: Acceptance, dealing, win detection
//! - `history`: The undo log
//! - `engine`: The intent handler, drag sessions, layout

pub mod core;
pub mod engine;
pub mod history;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardBuilder, Card, CardId, Color, DropTarget, EngineConfig, GameRng, Intent,
    LayoutConfig, Point, Rank, RefillPolicy, Run, Suit, DECK_SIZE,
};

pub use crate::piles::{Pile, PileId, PileKind, PileTable};

pub use crate::rules::GameStatus;

pub use crate::history::{MoveRecord, UndoLog};

pub use crate::engine::{DragSession, EngineEvent, Klondike, MoveOutcome, Rect, Rejection};
