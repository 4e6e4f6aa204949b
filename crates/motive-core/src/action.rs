//! Actions
//!
//! Named, timed effects on an actor's motives. An action is either a plain
//! motive changer or one that also grants the actor a copy of an item.
//!
//! Actions are built once and then shared as [`ActionRef`] handles between
//! actors, items and item copies. Handle identity is what the selection
//! machinery uses to decide whether a provider still offers an action.

use motive_events::{ActionEvent, ActionSink};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::actor::Actor;
use crate::item::Item;
use crate::motive::Motive;
use crate::provider::Provider;

/// Expected or actual change per motive
pub type MotiveChanges = BTreeMap<Motive, f64>;

/// Shared handle to an action
pub type ActionRef = Arc<Action>;

/// Predicate deciding whether an actor may currently take an action
pub type ValidityCheck = Arc<dyn Fn(&Actor) -> bool + Send + Sync>;

/// Expected fulfillment multiplier for items the actor already owns
pub const PREVIOUSLY_OWNED_ITEM_ADJUSTMENT: f64 = 0.5;

/// What an action does besides changing motives
#[derive(Debug, Clone)]
pub enum ActionKind {
    /// Applies its motive changes and nothing else
    Motivated,
    /// Grants the actor a copy of the item, then applies its motive changes
    ItemProviding(Item),
}

/// A behavior an actor can choose.
#[derive(Clone)]
pub struct Action {
    name: String,
    changes: MotiveChanges,
    validity: Option<ValidityCheck>,
    completion_time: u32,
    kind: ActionKind,
}

impl Action {
    /// A plain motive-changing action
    pub fn motivated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            changes: MotiveChanges::new(),
            validity: None,
            completion_time: 1,
            kind: ActionKind::Motivated,
        }
    }

    /// An action that grants a copy of `item` when performed
    pub fn providing(name: impl Into<String>, item: Item) -> Self {
        Self {
            kind: ActionKind::ItemProviding(item),
            ..Self::motivated(name)
        }
    }

    /// Change `motive` by `change` when this action completes
    pub fn motive(mut self, motive: &Motive, change: f64) -> Self {
        self.changes.insert(motive.clone(), change);
        self
    }

    /// Number of turns the action occupies. Values below 1 are raised to 1.
    pub fn with_completion_time(mut self, turns: u32) -> Self {
        self.completion_time = turns.max(1);
        self
    }

    /// Only offer the action while `check` holds for the actor
    pub fn valid_when<F>(mut self, check: F) -> Self
    where
        F: Fn(&Actor) -> bool + Send + Sync + 'static,
    {
        self.validity = Some(Arc::new(check));
        self
    }

    /// Freeze the action into a shared handle
    pub fn shared(self) -> ActionRef {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    pub fn completion_time(&self) -> u32 {
        self.completion_time
    }

    /// The item granted by an item-providing action
    pub fn provided_item(&self) -> Option<&Item> {
        match &self.kind {
            ActionKind::ItemProviding(item) => Some(item),
            ActionKind::Motivated => None,
        }
    }

    /// Whether the actor may take this action right now.
    ///
    /// An item-providing action for an infinite-use item is pointless once the
    /// actor owns that item, so it is never offered twice.
    pub fn is_valid(&self, actor: &Actor) -> bool {
        if let ActionKind::ItemProviding(item) = &self.kind {
            if item.is_infinite() && actor.owns_item(item.name()) {
                return false;
            }
        }
        match &self.validity {
            Some(check) => check(actor),
            None => true,
        }
    }

    /// Motive changes the actor anticipates when scoring this action.
    pub fn expected_fulfillment(&self, actor: &Actor) -> MotiveChanges {
        match &self.kind {
            ActionKind::Motivated => self.changes.clone(),
            ActionKind::ItemProviding(item) => {
                let mut expected = item.expected_fulfillment(actor);
                if actor.owns_item(item.name()) {
                    for change in expected.values_mut() {
                        *change *= PREVIOUSLY_OWNED_ITEM_ADJUSTMENT;
                    }
                }
                expected
            }
        }
    }

    /// Motive changes applied when the action completes.
    pub fn actual_fulfillment(&self) -> &MotiveChanges {
        &self.changes
    }

    /// Apply the completed action to `actor` and report it to `log`.
    pub(crate) fn perform(&self, actor: &mut Actor, provider: &Provider, log: &mut dyn ActionSink) {
        if let ActionKind::ItemProviding(item) = &self.kind {
            actor.add_item(item.copy());
        }
        for (motive, change) in &self.changes {
            actor.add_motive(motive, *change);
        }

        let mut event = ActionEvent::new(actor.name(), &self.name);
        if let Provider::Item(item_name) = provider {
            event = event.with_provider(item_name.as_str());
        }
        if let ActionKind::ItemProviding(item) = &self.kind {
            event = event.with_note(format!("gets {}", item.name()));
        }
        log.record(&event);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("changes", &self.changes)
            .field("completion_time", &self.completion_time)
            .field("has_validity_check", &self.validity.is_some())
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action{{'{}'}}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Uses;
    use motive_events::ActionEvent;

    fn food(uses: Uses) -> Item {
        let eats = Action::motivated("eats")
            .motive(&Motive::hunger(), -100.0)
            .shared();
        Item::new("food").with_uses(uses).with_action(eats)
    }

    #[test]
    fn test_completion_time_floor() {
        let action = Action::motivated("nap").with_completion_time(0);
        assert_eq!(action.completion_time(), 1);

        let action = Action::motivated("nap").with_completion_time(4);
        assert_eq!(action.completion_time(), 4);
    }

    #[test]
    fn test_validity_check() {
        let actor = Actor::new("bob");
        let never = Action::motivated("drink").valid_when(|_| false);
        let always = Action::motivated("eat").valid_when(|_| true);
        assert!(Action::motivated("light").is_valid(&actor));
        assert!(!never.is_valid(&actor));
        assert!(always.is_valid(&actor));
    }

    #[test]
    fn test_motivated_expected_equals_actual() {
        let hunger = Motive::hunger();
        let actor = Actor::new("bob");
        let action = Action::motivated("eat").motive(&hunger, -1.0);

        assert_eq!(
            &action.expected_fulfillment(&actor),
            action.actual_fulfillment()
        );
    }

    #[test]
    fn test_item_providing_expected_matches_item() {
        let actor = Actor::new("bob");
        let action = Action::providing("farm", food(Uses::Finite(1)));

        let expected = action.expected_fulfillment(&actor);
        assert_eq!(expected.get(&Motive::hunger()), Some(&-100.0));
    }

    #[test]
    fn test_item_providing_actual_is_own_changes() {
        let actor = Actor::new("bob");
        let action = Action::providing("farm", food(Uses::Finite(1)));
        assert!(action.actual_fulfillment().is_empty());
        assert_ne!(
            &action.expected_fulfillment(&actor),
            action.actual_fulfillment()
        );

        let greed = Motive::new("greed");
        let action = Action::providing("farm", food(Uses::Finite(1)));
        let action = action.motive(&greed, 42.5);
        assert_eq!(action.actual_fulfillment().get(&greed), Some(&42.5));
    }

    #[test]
    fn test_expected_halved_when_already_owned() {
        let mut actor = Actor::new("bob");
        let action = Action::providing("farm", food(Uses::Finite(1)));
        assert_eq!(
            action.expected_fulfillment(&actor).get(&Motive::hunger()),
            Some(&-100.0)
        );

        actor.add_item(food(Uses::Finite(3)));
        assert_eq!(
            action.expected_fulfillment(&actor).get(&Motive::hunger()),
            Some(&(-100.0 * PREVIOUSLY_OWNED_ITEM_ADJUSTMENT))
        );
    }

    #[test]
    fn test_infinite_item_not_offered_twice() {
        let mut actor = Actor::new("bob");
        let action = Action::providing("buys a hoe", Item::new("hoe"));
        assert!(action.is_valid(&actor));

        actor.add_item(Item::new("hoe"));
        assert!(!action.is_valid(&actor));
    }

    #[test]
    fn test_finite_item_offered_while_owned() {
        let mut actor = Actor::new("bob");
        let action = Action::providing("gathers", food(Uses::Finite(1)));
        actor.add_item(food(Uses::Finite(1)));
        assert!(action.is_valid(&actor));
    }

    #[test]
    fn test_perform_grants_copy_and_logs() {
        let mut actor = Actor::new("bob");
        let action = Action::providing("farms", food(Uses::Finite(2)));
        let mut events: Vec<ActionEvent> = Vec::new();

        let provider = Provider::Item("hoe".to_string());
        action.perform(&mut actor, &provider, &mut events);

        assert_eq!(actor.item("food").map(|i| i.uses()), Some(Uses::Finite(2)));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].provider.as_deref(), Some("hoe"));
        assert_eq!(events[0].note.as_deref(), Some("gets food"));
    }

    #[test]
    fn test_perform_applies_changes() {
        let hunger = Motive::hunger();
        let mut actor = Actor::new("bob");
        actor.add_motive(&hunger, 5.0);
        let action = Action::motivated("eat").motive(&hunger, -2.0);
        let mut events: Vec<ActionEvent> = Vec::new();

        action.perform(&mut actor, &Provider::Actor, &mut events);

        assert_eq!(actor.motive(&hunger), 3.0);
        assert_eq!(events, vec![ActionEvent::new("bob", "eat")]);
    }
}
