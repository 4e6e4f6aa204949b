//! Action Events
//!
//! The record emitted every time an actor completes an action, and the sink
//! trait that receives it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed action, as reported by the actor that performed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Name of the actor that performed the action
    pub actor: String,
    /// Name of the completed action
    pub action: String,
    /// Item that offered the action; `None` when the actor offered it itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Free-form note appended to the log line (e.g. "gets corn")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ActionEvent {
    pub fn new(actor: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            action: action.into(),
            provider: None,
            note: None,
        }
    }

    /// Attach the item that provided the action
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.actor, self.action)?;
        if let Some(provider) = &self.provider {
            write!(f, " {}", provider)?;
        }
        if let Some(note) = &self.note {
            write!(f, "; {}", note)?;
        }
        Ok(())
    }
}

/// Receiver of completed-action events.
pub trait ActionSink {
    fn record(&mut self, event: &ActionEvent);
}

/// Sink that discards every event (for testing)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ActionSink for NullSink {
    fn record(&mut self, _event: &ActionEvent) {}
}

impl ActionSink for Vec<ActionEvent> {
    fn record(&mut self, event: &ActionEvent) {
        self.push(event.clone());
    }
}
