//! Action Providers
//!
//! Where a candidate action came from: the actor's own repertoire or one of
//! the items it owns. Items are referred to by name, since the actor owns the
//! item value itself.

use std::sync::Arc;

use crate::action::ActionRef;
use crate::actor::Actor;

/// Source of an action offered to an actor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Provider {
    /// The actor's own action list
    Actor,
    /// An item owned by the actor, by name
    Item(String),
}

impl Provider {
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Provider::Actor => None,
            Provider::Item(name) => Some(name),
        }
    }

    /// Whether this provider currently offers `action` to `actor`.
    ///
    /// An item provider offers nothing once the actor no longer owns the item,
    /// and only offers actions that are valid for the actor.
    pub fn offers(&self, actor: &Actor, action: &ActionRef) -> bool {
        match self {
            Provider::Actor => actor.actions().iter().any(|a| Arc::ptr_eq(a, action)),
            Provider::Item(name) => match actor.item(name) {
                Some(item) => item.actions_for(actor).any(|a| Arc::ptr_eq(a, action)),
                None => false,
            },
        }
    }

    /// Completion hook: an item provider spends one use.
    pub(crate) fn action_performed(&self, actor: &mut Actor) {
        if let Provider::Item(name) = self {
            actor.use_item(name);
        }
    }
}
