//! Action Selection State
//!
//! Holds the action an actor has chosen across the turns it takes to finish.
//!
//! ```text
//!   Idle ──consider──▶ Pending ──perform──▶ InProgress ──perform──▶ ReadyToComplete
//!    ▲                  (timer 0)            (timer > 1)             (timer 1)
//!    │                                                                   │
//!    └──────────────── perform (effect applied) / interrupted ◀──────────┘
//! ```
//!
//! Effects only ever apply on the final perform, so an interrupted action
//! leaves nothing behind.

use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use crate::action::ActionRef;
use crate::item::Item;
use crate::provider::Provider;

use super::utility;
use super::Actor;

/// Default upper bound of the random amount subtracted from each candidate's score
pub const DEFAULT_TIE_BREAK_JITTER: f64 = 0.01;

/// Observable phase of an actor's selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing chosen
    Idle,
    /// Chosen but not started
    Pending,
    /// Started, more than one perform remaining
    InProgress { remaining: u32 },
    /// The next perform completes the action
    ReadyToComplete,
}

/// An action chosen for an actor and the provider it came from
#[derive(Debug, Clone)]
pub struct Choice {
    pub action: ActionRef,
    pub provider: Provider,
    /// Utility at the time of choosing, without jitter
    pub utility: f64,
}

/// Result of one perform
#[derive(Debug)]
pub(crate) enum Step {
    /// Nothing held
    Idle,
    /// Timer advanced, no effect yet
    Waiting(ActionRef),
    /// Final turn reached; the caller applies the effect
    Complete(Choice),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    held: Option<Choice>,
    timer: u32,
}

impl Selection {
    pub fn held(&self) -> Option<&Choice> {
        self.held.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.timer == 0
    }

    pub fn state(&self) -> SelectionState {
        match (&self.held, self.timer) {
            (None, _) => SelectionState::Idle,
            (Some(_), 0) => SelectionState::Pending,
            (Some(_), 1) => SelectionState::ReadyToComplete,
            (Some(_), remaining) => SelectionState::InProgress { remaining },
        }
    }

    /// Replace whatever is pending with a fresh choice (or nothing)
    pub fn hold(&mut self, choice: Option<Choice>) {
        self.held = choice;
        self.timer = 0;
    }

    /// Drop the held action and any progress on it
    pub fn interrupt(&mut self) -> Option<Choice> {
        self.timer = 0;
        self.held.take()
    }

    /// Whether a started action may keep running.
    ///
    /// Fails when the action is no longer valid for the actor, when it came
    /// from an item the actor no longer owns, or when its provider stopped
    /// offering it.
    pub fn still_valid(&self, actor: &Actor) -> bool {
        let Some(choice) = &self.held else {
            return true;
        };
        if self.timer == 0 {
            return true;
        }
        if !choice.action.is_valid(actor) {
            return false;
        }
        if let Provider::Item(name) = &choice.provider {
            if !actor.owns_item(name) {
                return false;
            }
        }
        choice.provider.offers(actor, &choice.action)
    }

    /// Advance by one perform
    pub fn advance(&mut self) -> Step {
        let Some(choice) = self.held.as_ref() else {
            self.timer = 0;
            return Step::Idle;
        };
        if self.timer == 0 {
            self.timer = choice.action.completion_time();
        }
        if self.timer > 1 {
            self.timer -= 1;
            return Step::Waiting(Arc::clone(&choice.action));
        }
        self.timer = 0;
        match self.held.take() {
            Some(choice) => Step::Complete(choice),
            None => Step::Idle,
        }
    }
}

/// Scan the actor's own actions and every owned item's actions for the best
/// valid candidate.
///
/// Each score has a random amount in `[0, jitter)` subtracted before
/// comparison so that equally useful actions alternate. A candidate must beat
/// a zero baseline to be chosen.
pub(crate) fn best_action<R: Rng>(actor: &Actor, rng: &mut R) -> Option<Choice> {
    let jitter = actor.tie_break_jitter();
    let own = actor.actions().iter().map(|a| (a, None));
    let from_items = actor.items().iter().flat_map(item_actions);

    let mut best: Option<(&ActionRef, Option<&str>, f64)> = None;
    let mut best_score = 0.0;
    for (action, source) in own.chain(from_items) {
        if !action.is_valid(actor) {
            continue;
        }
        let utility = utility::utility(actor, action);
        let noise = if jitter > 0.0 {
            rng.gen::<f64>() * jitter
        } else {
            0.0
        };
        let score = utility - noise;
        if score > best_score {
            best_score = score;
            best = Some((action, source, utility));
        }
    }

    best.map(|(action, source, utility)| {
        let provider = match source {
            Some(name) => Provider::Item(name.to_string()),
            None => Provider::Actor,
        };
        debug!(
            actor = actor.name(),
            action = action.name(),
            utility,
            "selected action"
        );
        Choice {
            action: Arc::clone(action),
            provider,
            utility,
        }
    })
}

/// Every action an item carries, tagged with the item's name
fn item_actions(item: &Item) -> impl Iterator<Item = (&ActionRef, Option<&str>)> {
    item.actions().iter().map(move |a| (a, Some(item.name())))
}
