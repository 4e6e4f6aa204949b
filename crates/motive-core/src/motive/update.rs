//! Motive Updates
//!
//! Rules applied to an actor's motives once per turn, before selection.

use std::fmt;

use super::Motive;
use crate::actor::Actor;

/// A per-turn rule that changes one motive on an actor.
pub trait MotiveUpdate: fmt::Debug + Send + Sync {
    fn update(&self, motive: &Motive, actor: &mut Actor);
}

/// Adds a fixed amount to the motive every turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantUpdate(pub f64);

impl ConstantUpdate {
    pub const INCREASE_BY_ONE: ConstantUpdate = ConstantUpdate(1.0);
    pub const DECREASE_BY_ONE: ConstantUpdate = ConstantUpdate(-1.0);
}

impl MotiveUpdate for ConstantUpdate {
    fn update(&self, motive: &Motive, actor: &mut Actor) {
        actor.add_motive(motive, self.0);
    }
}
