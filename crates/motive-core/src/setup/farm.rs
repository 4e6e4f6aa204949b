//! Farm Setup
//!
//! A small subsistence scenario. Farmers get hungrier every turn and can eat
//! grass they gather, corn they farm with a hoe, or steak they start with.

use std::sync::Arc;

use crate::action::{Action, ActionRef};
use crate::actor::Actor;
use crate::error::ModelError;
use crate::item::{Item, Uses};
use crate::motive::{ConstantUpdate, Motive};
use crate::sim::Simulation;

/// Name of the action every food item offers
pub const EAT_ACTION: &str = "eats";

/// How much farmers care about hunger relative to other motives
pub const FARMER_HUNGER_WEIGHT: f64 = 2.0;

/// Hunger a freshly spawned farmer starts with
pub const STARTING_HUNGER: f64 = 21.0;

/// The food action: lowers hunger by `satiation`
pub fn eat_action(hunger: &Motive, satiation: f64) -> Action {
    Action::motivated(EAT_ACTION).motive(hunger, -satiation)
}

/// A finite-use food item offering `eats`
pub fn create_food(hunger: &Motive, name: &str, charges: u32, satiation: f64) -> Item {
    create_food_with(name, charges, eat_action(hunger, satiation))
}

/// A finite-use food item offering a custom `eats` action
pub fn create_food_with(name: &str, charges: u32, eats: Action) -> Item {
    Item::new(name)
        .with_uses(Uses::Finite(charges))
        .with_action(eats.shared())
}

/// Every motive, item and action in the farm scenario.
///
/// Items here are templates: actors receive copies, so the action handles
/// below stay identical to the ones an actor ends up performing.
#[derive(Debug, Clone)]
pub struct FarmCatalog {
    pub hunger: Motive,
    pub grass: Item,
    pub corn: Item,
    pub steak: Item,
    pub hoe: Item,
    pub gather_grass: ActionRef,
    pub buy_hoe: ActionRef,
    pub farm_with_hoe: ActionRef,
}

impl FarmCatalog {
    pub fn new() -> Result<Self, ModelError> {
        let hunger = Motive::hunger().with_min(0)?.with_max(100)?;

        let grass = create_food(&hunger, "grass", 1, 1.0);
        let corn = create_food(&hunger, "corn", 1, 5.0);
        let steak = create_food(&hunger, "steak", 1, 20.0);

        let farm_with_hoe = Action::providing("farms corn with", corn.copy()).shared();
        let hoe = Item::new("hoe").with_action(Arc::clone(&farm_with_hoe));
        let gather_grass = Action::providing("gathers grass", grass.copy()).shared();
        let buy_hoe = Action::providing("buys a hoe", hoe.copy()).shared();

        Ok(Self {
            hunger,
            grass,
            corn,
            steak,
            hoe,
            gather_grass,
            buy_hoe,
            farm_with_hoe,
        })
    }

    /// The `eats` handle of a food template
    pub fn eats(food: &Item) -> Option<&ActionRef> {
        food.action(EAT_ACTION)
    }

    /// Give `actor` the farmer's hunger rules: +1 per turn, ideally 0, weight 2
    pub fn make_person(&self, actor: &mut Actor) -> Result<(), ModelError> {
        actor.register_motive_update(&self.hunger, ConstantUpdate::INCREASE_BY_ONE);
        actor.register_desire(&self.hunger, 0, 0, 0)?;
        actor.set_motive_weight(&self.hunger, FARMER_HUNGER_WEIGHT)
    }

    /// A person who can also gather grass and buy a hoe
    pub fn make_farmer(&self, actor: &mut Actor) -> Result<(), ModelError> {
        self.make_person(actor)?;
        actor.add_action(Arc::clone(&self.gather_grass));
        actor.add_action(Arc::clone(&self.buy_hoe));
        Ok(())
    }

    /// Spawn `count` farmers. Every other farmer starts with a steak.
    pub fn populate(&self, sim: &mut Simulation, count: usize) -> Result<(), ModelError> {
        for i in 0..count {
            let farmer = sim.spawn(format!("Farmer {}", i + 1));
            self.make_farmer(farmer)?;
            farmer.add_motive(&self.hunger, STARTING_HUNGER);
            if i % 2 == 1 {
                farmer.add_item(self.steak.copy());
            }
        }
        Ok(())
    }
}
