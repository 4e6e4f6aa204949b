//! Shared event types for the motive engine.
//!
//! This crate contains pure data structures and sinks with no decision logic.
//! It is a dependency for the engine crate and for anything that wants to
//! consume completed-action records.

pub mod event;
pub mod journal;

// Re-export event types
pub use event::{ActionEvent, ActionSink, NullSink};

// Re-export journal types
pub use journal::{EventJournal, JournalRecord};
