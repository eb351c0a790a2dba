//! Undo history.
//!
//! One global log keyed by commit order replaces any per-card movement
//! history. Each entry reverses exactly one user-visible action, including
//! the auto-flip it may have caused.

pub mod record;
pub mod undo_log;

pub use record::MoveRecord;
pub use undo_log::UndoLog;
