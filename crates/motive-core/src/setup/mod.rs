//! Scenario Setup
//!
//! Ready-made motives, items and actions for running the engine.

pub mod farm;

pub use farm::*;
