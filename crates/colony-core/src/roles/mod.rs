//! Role Controllers
//!
//! One controller per behavior role. Controllers are pure functions of the
//! current world state: invoked once per creep per tick, they read room
//! state, decide a single action, and write it to the creep's command slot.

pub mod combat;
pub mod harvester;

pub use combat::CombatController;
pub use harvester::HarvesterController;

use bevy_ecs::prelude::*;

use crate::components::creep::{CommandSlot, Creep, Role};
use crate::config::RolesConfig;

/// Bundles one configured controller per role.
#[derive(Debug, Clone, Default)]
pub struct RoleRunner {
    pub harvester: HarvesterController,
    pub combat: CombatController,
}

impl RoleRunner {
    /// Builds controllers from a loaded configuration.
    pub fn from_config(config: &RolesConfig) -> Self {
        Self {
            harvester: HarvesterController::from_config(&config.harvester),
            combat: CombatController::from_config(&config.combat),
        }
    }

    /// Runs the controller for one creep's assigned role.
    ///
    /// Creeps without a role component are skipped; assignment is the
    /// external runtime's job.
    pub fn run_creep(&self, world: &mut World, creep: Entity) {
        let Some(role) = world.get::<Role>(creep).copied() else {
            return;
        };
        match role {
            Role::Harvester => self.harvester.run(world, creep),
            Role::Fighter => self.combat.run(world, creep),
        }
    }

    /// Runs every live creep once, in world iteration order.
    ///
    /// Convenience for drivers that process a whole world sequentially;
    /// order is irrelevant to correctness since controllers only write to
    /// their own creep's slot.
    pub fn run_all(&self, world: &mut World) {
        let creeps: Vec<Entity> = {
            let mut query = world.query_filtered::<Entity, With<Creep>>();
            query.iter(world).collect()
        };
        for creep in creeps {
            self.run_creep(world, creep);
        }
    }
}

/// Clears every creep's command slot.
///
/// The tick driver calls this at the start of each tick, before any role
/// runs. Controllers themselves never clear slots.
pub fn clear_command_slots(world: &mut World) {
    let mut query = world.query_filtered::<&mut CommandSlot, With<Creep>>();
    for mut slot in query.iter_mut(world) {
        slot.clear();
    }
}
