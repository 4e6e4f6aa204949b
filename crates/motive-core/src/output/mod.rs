//! Output
//!
//! Action statistics and reports produced while a simulation runs.

pub mod stats;

pub use stats::{ActionLog, ActorSummary, StatsSummary};
