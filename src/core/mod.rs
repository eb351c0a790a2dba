//! Core engine types: cards, board state, intents, RNG, configuration.
//!
//! This module contains the data model. Rules live in `rules`, the undo log
//! in `history`, and the intent handler in `engine`.

pub mod card;
pub mod config;
pub mod intent;
pub mod rng;
pub mod state;

pub use card::{Card, CardId, Color, Rank, Suit, DECK_SIZE};
pub use config::{EngineConfig, LayoutConfig, RefillPolicy};
pub use intent::{DropTarget, Intent, Point};
pub use rng::GameRng;
pub use state::{Board, BoardBuilder, Run, MAX_RUN};
