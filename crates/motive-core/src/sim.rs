//! Simulation Driver
//!
//! Owns a set of actors, the seeded random source and the action log, and
//! advances every actor once per turn: update motives, consider, perform.
//! Actors are processed in the order they were added, so a given seed always
//! reproduces the same history.

use motive_events::{ActionSink, EventJournal};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::action::ActionRef;
use crate::actor::Actor;
use crate::config::{EngineConfig, SelectionConfig};
use crate::output::ActionLog;

/// What one actor worked on during a turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub actor: String,
    pub action: Option<ActionRef>,
}

/// Run one actor's turn and return the action it worked on, if any
pub fn run_actor_turn<R: Rng>(
    actor: &mut Actor,
    rng: &mut R,
    log: &mut dyn ActionSink,
) -> Option<ActionRef> {
    actor.update();
    actor.consider_next_action(rng);
    actor.perform_next_action(log)
}

pub struct Simulation {
    actors: Vec<Actor>,
    rng: SmallRng,
    log: ActionLog,
    selection: SelectionConfig,
    turn: u64,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self {
            actors: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
            log: ActionLog::new(),
            selection: SelectionConfig::default(),
            turn: 0,
        }
    }

    /// Build a simulation from configuration, opening the journal if one is set
    pub fn from_config(config: &EngineConfig) -> std::io::Result<Self> {
        let mut log = ActionLog::new().with_trace(config.logging.trace_actions);
        if let Some(path) = &config.logging.journal_path {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            log = log.with_journal(EventJournal::new(path)?);
        }

        let mut sim = Self::new(config.simulation.seed);
        sim.log = log;
        sim.selection = config.selection.clone();
        Ok(sim)
    }

    /// Add a new actor with the configured selection defaults
    pub fn spawn(&mut self, name: impl Into<String>) -> &mut Actor {
        let mut actor = Actor::new(name);
        self.selection.apply(&mut actor);
        self.add_actor(actor)
    }

    /// Add an already configured actor as is
    pub fn add_actor(&mut self, actor: Actor) -> &mut Actor {
        self.actors.push(actor);
        let index = self.actors.len() - 1;
        &mut self.actors[index]
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.name() == name)
    }

    pub fn actor_mut(&mut self, name: &str) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.name() == name)
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ActionLog {
        &mut self.log
    }

    /// Turns processed so far
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Advance every actor by one turn
    pub fn process_turn(&mut self) -> Vec<TurnOutcome> {
        self.turn += 1;
        let mut outcomes = Vec::with_capacity(self.actors.len());
        for actor in &mut self.actors {
            let action = run_actor_turn(actor, &mut self.rng, &mut self.log);
            outcomes.push(TurnOutcome {
                actor: actor.name().to_string(),
                action,
            });
        }
        debug!(turn = self.turn, actors = outcomes.len(), "turn processed");
        outcomes
    }

    /// Process `turns` turns, flushing the journal at the end. Fails with the
    /// first journal write error seen during the run.
    pub fn run(&mut self, turns: u64) -> std::io::Result<()> {
        for _ in 0..turns {
            self.process_turn();
        }
        if let Some(journal) = self.log.journal_mut() {
            if let Some(e) = journal.take_failure() {
                return Err(e);
            }
            journal.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::motive::{ConstantUpdate, Motive};
    use std::sync::Arc;

    fn eater(sim: &mut Simulation, name: &str) -> ActionRef {
        let hunger = Motive::hunger();
        let eat = Action::motivated("eat").motive(&hunger, -1.0).shared();
        let actor = sim.spawn(name);
        actor.register_motive_update(&hunger, ConstantUpdate::INCREASE_BY_ONE);
        actor.register_desire(&hunger, 0, 0, 0).unwrap();
        actor.add_action(Arc::clone(&eat));
        eat
    }

    #[test]
    fn test_turn_counter() {
        let mut sim = Simulation::new(1);
        assert_eq!(sim.turn(), 0);
        sim.run(3).unwrap();
        assert_eq!(sim.turn(), 3);
    }

    #[test]
    fn test_process_turn_reports_each_actor() {
        let mut sim = Simulation::new(1);
        let eat = eater(&mut sim, "bob");
        eater(&mut sim, "joe");

        let outcomes = sim.process_turn();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].actor, "bob");
        let first = outcomes[0].action.as_ref();
        assert!(first.is_some_and(|a| Arc::ptr_eq(a, &eat)));
        assert_eq!(sim.log().total("eat"), 2);
    }

    #[test]
    fn test_spawn_applies_selection_defaults() {
        let mut config = EngineConfig::default();
        config.selection.tie_break_jitter = 0.0;
        config.selection.default_foresight = 3.0;
        let mut sim = Simulation::from_config(&config).unwrap();

        let actor = sim.spawn("bob");
        assert_eq!(actor.tie_break_jitter(), 0.0);
        assert_eq!(actor.foresight(), 3.0);
    }

    #[test]
    fn test_from_config_opens_journal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("actions.jsonl");
        let mut config = EngineConfig::default();
        config.logging.journal_path = Some(path.clone());

        let mut sim = Simulation::from_config(&config).unwrap();
        eater(&mut sim, "bob");
        sim.run(4).unwrap();

        assert_eq!(sim.log().journal().map(EventJournal::event_count), Some(4));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 4);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_run_reports_journal_failure() {
        let mut sim = Simulation::new(1);
        let journal = EventJournal::new("/dev/full").unwrap();
        *sim.log_mut() = ActionLog::new().with_journal(journal);

        let hunger = Motive::hunger();
        let long_name = "x".repeat(16 * 1024);
        let eat = Action::motivated(long_name).motive(&hunger, -1.0).shared();
        let actor = sim.spawn("bob");
        actor.register_motive_update(&hunger, ConstantUpdate::INCREASE_BY_ONE);
        actor.register_desire(&hunger, 0, 0, 0).unwrap();
        actor.add_action(eat);

        assert!(sim.run(1).is_err());
        assert_eq!(sim.log().journal().map(EventJournal::event_count), Some(1));
    }

    #[test]
    fn test_actor_lookup() {
        let mut sim = Simulation::new(1);
        sim.spawn("bob");
        assert!(sim.actor("bob").is_some());
        assert!(sim.actor("joe").is_none());

        let hunger = Motive::hunger();
        sim.actor_mut("bob").unwrap().add_motive(&hunger, 5.0);
        assert_eq!(sim.actor("bob").unwrap().motive(&hunger), 5.0);
    }
}
