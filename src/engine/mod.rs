//! The intent handler and everything it needs at the edge of the model.
//!
//! - `game`: `Klondike`, which owns a board and applies intents to it
//! - `events`: What a committed action emits, and why a rejected one failed
//! - `drag`: Run selection and drag sessions
//! - `layout`: Table geometry and drop-target resolution

pub mod drag;
pub mod events;
pub mod game;
pub mod layout;

pub use drag::{select_run, DragSession};
pub use events::{EngineEvent, MoveOutcome, Rejection};
pub use game::Klondike;
pub use layout::{resolve_drop, Rect};
