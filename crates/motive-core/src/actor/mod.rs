//! Actors
//!
//! An actor tracks its motive values, what it wants from each motive, the
//! items it owns and the actions it can take on its own. Each turn the driver
//! calls [`Actor::update`], [`Actor::consider_next_action`] and
//! [`Actor::perform_next_action`] in that order.

pub mod selection;
pub mod utility;

pub use selection::{Choice, SelectionState, DEFAULT_TIE_BREAK_JITTER};
pub use utility::{ActionUtility, MotiveUtility};

use motive_events::ActionSink;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::action::ActionRef;
use crate::error::ModelError;
use crate::item::Item;
use crate::motive::{Desire, Motive, MotiveUpdate};

use selection::{Selection, Step};

/// Motive weight used when none has been set
pub const DEFAULT_MOTIVE_WEIGHT: f64 = 1.0;

/// Foresight used when none has been set
pub const DEFAULT_FORESIGHT: f64 = 1.0;

/// An autonomous agent driven by its motives.
#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    /// Current value per motive name; absent means 0
    motives: HashMap<String, f64>,
    motive_updates: Vec<(Motive, Arc<dyn MotiveUpdate>)>,
    desires: HashMap<String, Desire>,
    motive_weights: HashMap<String, f64>,
    actions: Vec<ActionRef>,
    /// Owned items in acquisition order, unique by name
    items: Vec<Item>,
    foresight: f64,
    tie_break_jitter: f64,
    selection: Selection,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            motives: HashMap::new(),
            motive_updates: Vec::new(),
            desires: HashMap::new(),
            motive_weights: HashMap::new(),
            actions: Vec::new(),
            items: Vec::new(),
            foresight: DEFAULT_FORESIGHT,
            tie_break_jitter: DEFAULT_TIE_BREAK_JITTER,
            selection: Selection::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add `amount` to a motive, clamped to the motive's bounds
    pub fn add_motive(&mut self, motive: &Motive, amount: f64) {
        let value = motive.clamp_value(self.motive(motive) + amount);
        self.motives.insert(motive.name().to_string(), value);
    }

    /// Current value of a motive (0 if never touched)
    pub fn motive(&self, motive: &Motive) -> f64 {
        self.motives.get(motive.name()).copied().unwrap_or(0.0)
    }

    /// Every motive value the actor has, by motive name
    pub fn motive_values(&self) -> &HashMap<String, f64> {
        &self.motives
    }

    /// Apply `update` to `motive` every turn. Replaces an earlier rule for the same motive.
    pub fn register_motive_update(&mut self, motive: &Motive, update: impl MotiveUpdate + 'static) {
        let update: Arc<dyn MotiveUpdate> = Arc::new(update);
        match self.motive_updates.iter_mut().find(|(m, _)| m == motive) {
            Some(entry) => *entry = (motive.clone(), update),
            None => self.motive_updates.push((motive.clone(), update)),
        }
    }

    /// Motives with a registered per-turn update
    pub fn updated_motives(&self) -> impl Iterator<Item = &Motive> + '_ {
        self.motive_updates.iter().map(|(motive, _)| motive)
    }

    /// Run every registered motive update once
    pub fn update(&mut self) {
        let updates = self.motive_updates.clone();
        for (motive, update) in &updates {
            update.update(motive, self);
        }
    }

    /// Register (or replace) the desired range for a motive
    pub fn register_desire(
        &mut self,
        motive: &Motive,
        min: i32,
        ideal: i32,
        max: i32,
    ) -> Result<(), ModelError> {
        let desire = Desire::new(min, ideal, max)?;
        self.desires.insert(motive.name().to_string(), desire);
        Ok(())
    }

    pub fn desire(&self, motive: &Motive) -> Option<&Desire> {
        self.desires.get(motive.name())
    }

    /// Set how much a motive matters. Must be non-negative and finite.
    pub fn set_motive_weight(&mut self, motive: &Motive, weight: f64) -> Result<(), ModelError> {
        if !(weight >= 0.0 && weight.is_finite()) {
            return Err(ModelError::InvalidWeight {
                motive: motive.name().to_string(),
                weight,
            });
        }
        let name = motive.name().to_string();
        self.motive_weights.insert(name, weight);
        Ok(())
    }

    pub fn motive_weight(&self, motive: &Motive) -> f64 {
        self.motive_weights
            .get(motive.name())
            .copied()
            .unwrap_or(DEFAULT_MOTIVE_WEIGHT)
    }

    pub fn foresight(&self) -> f64 {
        self.foresight
    }

    pub fn set_foresight(&mut self, foresight: f64) {
        self.foresight = foresight;
    }

    pub fn tie_break_jitter(&self) -> f64 {
        self.tie_break_jitter
    }

    /// Upper bound of the random amount subtracted from each candidate's
    /// score. Zero makes selection deterministic (first best wins).
    pub fn set_tie_break_jitter(&mut self, jitter: f64) {
        self.tie_break_jitter = jitter.max(0.0);
    }

    pub fn add_action(&mut self, action: ActionRef) {
        self.actions.push(action);
    }

    /// Stop offering `action`. Returns false if the actor did not have it.
    pub fn remove_action(&mut self, action: &ActionRef) -> bool {
        let before = self.actions.len();
        self.actions.retain(|a| !Arc::ptr_eq(a, action));
        self.actions.len() != before
    }

    pub fn actions(&self) -> &[ActionRef] {
        &self.actions
    }

    /// Take ownership of an item, merging it into an owned item of the same name.
    pub fn add_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|owned| **owned == item) {
            Some(owned) => owned.merge(&item),
            None => self.items.push(item),
        }
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(index))
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn owns_item(&self, name: &str) -> bool {
        self.item(name).is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Spend one use of an owned item, dropping it once empty
    pub(crate) fn use_item(&mut self, name: &str) {
        let Some(index) = self.items.iter().position(|item| item.name() == name) else {
            return;
        };
        if self.items[index].use_once() {
            debug!(actor = %self.name, item = name, "item used up");
            self.items.remove(index);
        }
    }

    /// Decide what to do this turn.
    ///
    /// An action already under way keeps running unless it has become
    /// invalid, in which case it is dropped along with its progress. When
    /// nothing is under way, every valid action from the actor and its items
    /// is scored and the best one is held.
    pub fn consider_next_action<R: Rng>(&mut self, rng: &mut R) -> Option<ActionRef> {
        if !self.selection.still_valid(self) {
            if let Some(dropped) = self.selection.interrupt() {
                debug!(
                    actor = %self.name,
                    action = dropped.action.name(),
                    "interrupted action"
                );
            }
        }
        if self.selection.is_idle() {
            let choice = selection::best_action(self, rng);
            self.selection.hold(choice);
        }
        self.current_action()
    }

    /// Carry out the held action for one turn.
    ///
    /// Starting or continuing a multi-turn action has no effect. On the final
    /// turn the action's changes apply, the event goes to `log`, and an item
    /// provider spends one use. Returns the action worked on, if any.
    pub fn perform_next_action(&mut self, log: &mut dyn ActionSink) -> Option<ActionRef> {
        match self.selection.advance() {
            Step::Idle => None,
            Step::Waiting(action) => Some(action),
            Step::Complete(choice) => {
                choice.action.perform(self, &choice.provider, log);
                choice.provider.action_performed(self);
                Some(choice.action)
            }
        }
    }

    /// The action currently held, pending or in progress
    pub fn current_action(&self) -> Option<ActionRef> {
        self.selection.held().map(|c| Arc::clone(&c.action))
    }

    pub fn current_choice(&self) -> Option<&Choice> {
        self.selection.held()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }
}
