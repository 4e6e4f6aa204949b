//! Event Journal
//!
//! Append-only JSONL record of completed actions.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::warn;

use crate::event::{ActionEvent, ActionSink};

/// One line of the journal file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub event_id: String,
    #[serde(flatten)]
    pub event: ActionEvent,
}

/// Writes completed actions to a JSONL file
#[derive(Debug)]
pub struct EventJournal {
    writer: Option<BufWriter<File>>,
    event_count: u64,
    next_event_id: u64,
    failure: Option<std::io::Error>,
}

impl EventJournal {
    /// Create a new journal writing to the specified path
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            event_count: 0,
            next_event_id: 1,
            failure: None,
        })
    }

    /// Create a journal that discards events (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            event_count: 0,
            next_event_id: 1,
            failure: None,
        }
    }

    /// Generate the next event ID
    pub fn next_id(&mut self) -> String {
        let id = format!("evt_{:08}", self.next_event_id);
        self.next_event_id += 1;
        id
    }

    /// Get the current event count
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Append an event to the file
    pub fn append(&mut self, event: &ActionEvent) -> std::io::Result<()> {
        let record = JournalRecord {
            event_id: self.next_id(),
            event: event.clone(),
        };
        self.event_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(&record)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// First append error swallowed by [`ActionSink::record`], if any
    pub fn take_failure(&mut self) -> Option<std::io::Error> {
        self.failure.take()
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl ActionSink for EventJournal {
    fn record(&mut self, event: &ActionEvent) {
        if let Err(e) = self.append(event) {
            warn!("Failed to append to event journal: {}", e);
            self.failure.get_or_insert(e);
        }
    }
}

impl Drop for EventJournal {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!("Failed to flush event journal: {}", e);
        }
    }
}
