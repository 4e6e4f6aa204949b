//! Action Utility Calculation
//!
//! Scores a candidate action for an actor. For every motive the action is
//! expected to change and the actor has a desire for:
//! - happiness before and after the change (distance from the ideal point,
//!   plus a super-linear penalty outside the desired range)
//! - scaled by the actor's weight for that motive
//! - discounted by how many turns the action takes, shaped by foresight
//!
//! Motives without a desire contribute nothing to the score.

use tracing::trace;

use crate::action::Action;
use crate::motive::{Desire, Motive};

use super::Actor;

/// Contribution of one motive to an action's utility
#[derive(Debug, Clone, PartialEq)]
pub struct MotiveUtility {
    pub motive: Motive,
    /// Current value on the actor
    pub original: f64,
    /// Expected change (not clamped)
    pub change: f64,
    /// Weighted, time-discounted happiness gain
    pub contribution: f64,
}

/// Utility breakdown for one action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionUtility {
    /// Divisor applied to every motive's happiness gain
    pub time_factor: f64,
    /// One entry per desired motive the action changes
    pub motives: Vec<MotiveUtility>,
}

impl ActionUtility {
    /// Sum of all motive contributions
    pub fn total(&self) -> f64 {
        self.motives.iter().map(|m| m.contribution).sum()
    }
}

/// Discount for multi-turn actions: `(completion_time - 1) ^ foresight + 1`.
///
/// With foresight 1 this is the completion time itself. With foresight 0 it is
/// 2 regardless of duration.
pub fn time_factor(completion_time: u32, foresight: f64) -> f64 {
    f64::from(completion_time.saturating_sub(1)).powf(foresight) + 1.0
}

/// Weighted, discounted happiness gain for moving a motive from `original` by `change`
pub fn motive_utility(
    desire: &Desire,
    original: f64,
    change: f64,
    weight: f64,
    time_factor: f64,
) -> f64 {
    let before = desire.happiness(original);
    let after = desire.happiness(original + change);
    (after - before) * weight / time_factor
}

/// Full utility breakdown of `action` for `actor`
pub fn evaluate(actor: &Actor, action: &Action) -> ActionUtility {
    let time_factor = time_factor(action.completion_time(), actor.foresight());
    trace!(action = action.name(), time_factor, "time factor");

    let motives = action
        .expected_fulfillment(actor)
        .into_iter()
        .filter_map(|(motive, change)| {
            let desire = actor.desire(&motive)?;
            let original = actor.motive(&motive);
            let contribution = motive_utility(
                desire,
                original,
                change,
                actor.motive_weight(&motive),
                time_factor,
            );
            trace!(
                motive = motive.name(),
                original,
                change,
                contribution,
                "motive utility"
            );
            Some(MotiveUtility {
                motive,
                original,
                change,
                contribution,
            })
        })
        .collect();

    ActionUtility {
        time_factor,
        motives,
    }
}

/// Total utility of `action` for `actor`
pub fn utility(actor: &Actor, action: &Action) -> f64 {
    evaluate(actor, action).total()
}
