//! Motive-driven action selection.
//!
//! Actors carry numeric motives, a desired range for each one and a set of
//! actions they can take, either on their own or through items they own.
//! Every turn an actor scores the valid actions by how much closer they bring
//! its motives to the ideal, commits to the best one and performs it over as
//! many turns as it takes.
//!
//! - `motive`: motives, desires and per-turn motive updates
//! - `action`: motivated and item-providing actions
//! - `item`: items with finite or infinite uses
//! - `provider`: where an action was offered from
//! - `actor`: actors, utility scoring and the selection state machine
//! - `output`: action statistics and reports
//! - `relation`: symmetric pairwise relation table
//! - `config`: TOML configuration
//! - `sim`: the turn loop
//! - `setup`: ready-made scenarios

pub mod action;
pub mod actor;
pub mod config;
pub mod error;
pub mod item;
pub mod motive;
pub mod output;
pub mod provider;
pub mod relation;
pub mod setup;
pub mod sim;

pub use action::{Action, ActionKind, ActionRef, MotiveChanges};
pub use actor::{Actor, Choice, SelectionState};
pub use config::{ConfigError, EngineConfig};
pub use error::ModelError;
pub use item::{Item, Uses};
pub use motive::{ConstantUpdate, Desire, Motive, MotiveUpdate};
pub use output::ActionLog;
pub use provider::Provider;
pub use relation::RelationTable;
pub use sim::{Simulation, TurnOutcome};

pub use motive_events;
