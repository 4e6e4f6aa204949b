//! Items
//!
//! Named resources that offer actions and may run out. Identity is the name:
//! an actor never owns two items with the same name, it merges them instead.
//!
//! The name and action list live behind an `Arc` shared by every copy of an
//! item. Only the use counter is per-value, so an actor holding a finite-use
//! copy depletes it without touching the template it came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::action::{ActionRef, MotiveChanges};
use crate::actor::Actor;

/// Remaining uses of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uses {
    Infinite,
    Finite(u32),
}

impl Uses {
    /// Combine two stacks of the same item
    pub fn merge(self, other: Uses) -> Uses {
        match (self, other) {
            (Uses::Finite(a), Uses::Finite(b)) => Uses::Finite(a.saturating_add(b)),
            _ => Uses::Infinite,
        }
    }
}

impl fmt::Display for Uses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uses::Infinite => write!(f, "infinite"),
            Uses::Finite(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone)]
struct ItemDef {
    name: String,
    actions: Vec<ActionRef>,
}

/// A resource that offers actions.
#[derive(Debug, Clone)]
pub struct Item {
    def: Arc<ItemDef>,
    uses: Uses,
}

impl Item {
    /// A new infinite-use item with no actions
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def: Arc::new(ItemDef {
                name: name.into(),
                actions: Vec::new(),
            }),
            uses: Uses::Infinite,
        }
    }

    pub fn with_uses(mut self, uses: Uses) -> Self {
        self.uses = uses;
        self
    }

    /// Offer `action` from this item
    pub fn with_action(mut self, action: ActionRef) -> Self {
        Arc::make_mut(&mut self.def).actions.push(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn uses(&self) -> Uses {
        self.uses
    }

    pub fn set_uses(&mut self, uses: Uses) {
        self.uses = uses;
    }

    pub fn is_infinite(&self) -> bool {
        self.uses == Uses::Infinite
    }

    pub fn is_used_up(&self) -> bool {
        self.uses == Uses::Finite(0)
    }

    /// Every action the item carries, valid or not
    pub fn actions(&self) -> &[ActionRef] {
        &self.def.actions
    }

    /// Actions currently valid for `actor`
    pub fn actions_for<'a>(&'a self, actor: &'a Actor) -> impl Iterator<Item = &'a ActionRef> + 'a {
        self.actions().iter().filter(move |a| a.is_valid(actor))
    }

    /// Look up an action by name
    pub fn action(&self, name: &str) -> Option<&ActionRef> {
        self.actions().iter().find(|a| a.name() == name)
    }

    /// Copy for handing to an actor. The action list stays shared; the use
    /// counter of a finite-use copy is independent of the original.
    pub fn copy(&self) -> Item {
        Item {
            def: Arc::clone(&self.def),
            uses: self.uses,
        }
    }

    /// Whether two items share the same name and action list
    pub fn shares_definition(&self, other: &Item) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }

    /// What owning this item is worth: the expected fulfillment of its first action.
    pub fn expected_fulfillment(&self, actor: &Actor) -> MotiveChanges {
        self.def
            .actions
            .first()
            .map(|action| action.expected_fulfillment(actor))
            .unwrap_or_default()
    }

    /// Fold another stack of the same item into this one
    pub(crate) fn merge(&mut self, other: &Item) {
        self.uses = self.uses.merge(other.uses);
    }

    /// Spend one use. Returns true when this use emptied the item.
    pub(crate) fn use_once(&mut self) -> bool {
        match self.uses {
            Uses::Finite(n) if n > 0 => {
                self.uses = Uses::Finite(n - 1);
                n == 1
            }
            _ => false,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
