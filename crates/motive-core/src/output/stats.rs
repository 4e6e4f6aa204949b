//! Action Statistics
//!
//! Tallies completed actions globally and per actor, renders plain-text
//! reports and produces a serializable summary for analysis.

use motive_events::{ActionEvent, ActionSink, EventJournal};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

/// Statistics output path
pub const STATS_OUTPUT_PATH: &str = "output/stats.json";

/// Per-actor section of the summary
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActorSummary {
    pub total_actions: u64,
    pub actions: BTreeMap<String, u64>,
}

/// Overall simulation statistics
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub total_turns: u64,
    pub total_actions: u64,
    pub average_actions_per_turn: f64,
    pub actions: BTreeMap<String, u64>,
    pub actors: BTreeMap<String, ActorSummary>,
}

/// Collects every completed action.
#[derive(Debug, Default)]
pub struct ActionLog {
    actions: HashMap<String, u64>,
    actor_actions: HashMap<String, HashMap<String, u64>>,
    total_events: u64,
    trace_actions: bool,
    journal: Option<EventJournal>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an INFO record for every completed action
    pub fn with_trace(mut self, trace_actions: bool) -> Self {
        self.trace_actions = trace_actions;
        self
    }

    /// Forward every completed action to `journal`
    pub fn with_journal(mut self, journal: EventJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn trace_actions(&self) -> bool {
        self.trace_actions
    }

    pub fn set_trace_actions(&mut self, trace_actions: bool) {
        self.trace_actions = trace_actions;
    }

    pub fn journal(&self) -> Option<&EventJournal> {
        self.journal.as_ref()
    }

    pub fn journal_mut(&mut self) -> Option<&mut EventJournal> {
        self.journal.as_mut()
    }

    /// Record one completed action
    pub fn log(&mut self, event: &ActionEvent) {
        self.total_events += 1;
        *self.actions.entry(event.action.clone()).or_insert(0) += 1;
        *self
            .actor_actions
            .entry(event.actor.clone())
            .or_default()
            .entry(event.action.clone())
            .or_insert(0) += 1;

        if self.trace_actions {
            info!("ACTION: {}", event);
        }
        if let Some(journal) = self.journal.as_mut() {
            journal.record(event);
        }
    }

    /// Times `action` was completed by anyone
    pub fn total(&self, action: &str) -> u64 {
        self.actions.get(action).copied().unwrap_or(0)
    }

    /// Every action completed so far, across all actors
    pub fn total_events(&self) -> u64 {
        self.total_events
    }

    /// Counts per action for one actor, `None` if it never completed anything
    pub fn actions_by(&self, actor: &str) -> Option<&HashMap<String, u64>> {
        self.actor_actions.get(actor)
    }

    /// Times `actor` completed `action`, 0 when either is unknown
    pub fn actor_action_count(&self, actor: &str, action: &str) -> u64 {
        self.actor_actions
            .get(actor)
            .and_then(|actions| actions.get(action))
            .copied()
            .unwrap_or(0)
    }

    /// One `name: count` line per action, most frequent first
    pub fn action_report(&self) -> String {
        let mut report = String::new();
        for (name, count) in sorted_by_count(&self.actions) {
            report.push_str(&format!("{}: {}\n", name, count));
        }
        report
    }

    /// Actors in name order, each followed by its own indented action counts
    pub fn actor_report(&self) -> String {
        let mut actors: Vec<&String> = self.actor_actions.keys().collect();
        actors.sort();

        let mut report = String::new();
        for actor in actors {
            report.push_str(actor);
            report.push('\n');
            if let Some(actions) = self.actor_actions.get(actor) {
                for (name, count) in sorted_by_count(actions) {
                    report.push_str(&format!("   {}: {}\n", name, count));
                }
            }
        }
        report
    }

    /// Serializable summary over `total_turns` turns
    pub fn summary(&self, total_turns: u64) -> StatsSummary {
        let average_actions_per_turn = if total_turns > 0 {
            self.total_events as f64 / total_turns as f64
        } else {
            0.0
        };

        let actors = self
            .actor_actions
            .iter()
            .map(|(actor, actions)| {
                let summary = ActorSummary {
                    total_actions: actions.values().sum(),
                    actions: actions.iter().map(|(k, v)| (k.clone(), *v)).collect(),
                };
                (actor.clone(), summary)
            })
            .collect();

        StatsSummary {
            total_turns,
            total_actions: self.total_events,
            average_actions_per_turn,
            actions: self.actions.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            actors,
        }
    }

    /// Forget all counts. Tracing and journal settings are kept.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.actor_actions.clear();
        self.total_events = 0;
    }
}

impl ActionSink for ActionLog {
    fn record(&mut self, event: &ActionEvent) {
        self.log(event);
    }
}

/// Entries by descending count, ties broken by name
fn sorted_by_count(counts: &HashMap<String, u64>) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
