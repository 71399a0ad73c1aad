//! Harvester Role
//!
//! The economic workhorse: fill up at a resource node, empty into whichever
//! structure needs energy, repeat. The gather/deliver state is derived from
//! the creep's inventory on every invocation, never stored.

use bevy_ecs::prelude::*;

use colony_types::{ActionResult, PathStyle, ResourceKind};

use crate::actions;
use crate::components::creep::{CommandSlot, Store};
use crate::components::world::{Position, Source, Structure};
use crate::config::HarvesterConfig;
use crate::targeting::{Candidate, TargetStrategy};

/// Decides one gather or deliver action per creep per tick.
#[derive(Debug, Clone)]
pub struct HarvesterController {
    pub strategy: TargetStrategy,
    pub gather_style: PathStyle,
    pub deliver_style: PathStyle,
}

impl Default for HarvesterController {
    fn default() -> Self {
        Self {
            strategy: TargetStrategy::default(),
            gather_style: PathStyle::gather(),
            deliver_style: PathStyle::deliver(),
        }
    }
}

impl HarvesterController {
    pub fn from_config(config: &HarvesterConfig) -> Self {
        Self {
            strategy: config.strategy,
            gather_style: PathStyle::new(config.gather_path_stroke.clone()),
            deliver_style: PathStyle::new(config.deliver_path_stroke.clone()),
        }
    }

    /// Runs the gather/deliver decision for one creep.
    ///
    /// Issues at most one of {harvest, transfer, move}. Finding no valid
    /// target means no action this tick; nothing here can fail the caller.
    pub fn run(&self, world: &mut World, creep: Entity) {
        let Some(pos) = world.get::<Position>(creep).copied() else {
            return;
        };
        let Some(store) = world.get::<Store>(creep).copied() else {
            return;
        };

        if store.free_capacity(ResourceKind::Energy) > 0 {
            self.gather(world, creep, pos);
        } else {
            self.deliver(world, creep, pos, store);
        }
    }

    /// Gather state: head for a resource node and harvest it.
    fn gather(&self, world: &mut World, creep: Entity, pos: Position) {
        let sources: Vec<Candidate> = {
            let mut query = world.query_filtered::<(Entity, &Position), With<Source>>();
            query
                .iter(world)
                .filter(|(_, p)| p.room == pos.room)
                .map(|(entity, p)| Candidate::new(entity, *p))
                .collect()
        };

        let Some(target) = self.strategy.pick(&pos, &sources).copied() else {
            return;
        };
        let source_energy = world
            .get::<Source>(target.entity)
            .map(|s| s.energy)
            .unwrap_or(0);

        let Some(mut slot) = world.get_mut::<CommandSlot>(creep) else {
            return;
        };
        match actions::try_harvest(&mut slot, &pos, target.entity, &target.pos, source_energy) {
            ActionResult::NotInRange => {
                actions::move_to(&mut slot, target.entity, Some(self.gather_style.clone()));
                tracing::trace!(creep = ?creep, target = ?target.entity, "approaching source");
            }
            // All other failures self-correct on the next tick.
            _ => {}
        }
    }

    /// Deliver state: top up a structure that still has room for energy.
    fn deliver(&self, world: &mut World, creep: Entity, pos: Position, store: Store) {
        let sinks: Vec<Candidate> = {
            let mut query = world.query::<(Entity, &Position, &Structure, &Store)>();
            query
                .iter(world)
                .filter(|(_, p, structure, sink)| {
                    p.room == pos.room
                        && structure.kind.is_refill_target()
                        && sink.free_capacity(ResourceKind::Energy) > 0
                })
                .map(|(entity, p, _, _)| Candidate::new(entity, *p))
                .collect()
        };

        let Some(target) = self.strategy.pick(&pos, &sinks).copied() else {
            return;
        };
        let sink_free = world
            .get::<Store>(target.entity)
            .map(|s| s.free_capacity(ResourceKind::Energy))
            .unwrap_or(0);
        let carried = store.available(ResourceKind::Energy);

        let Some(mut slot) = world.get_mut::<CommandSlot>(creep) else {
            return;
        };
        match actions::try_transfer(
            &mut slot,
            &pos,
            target.entity,
            &target.pos,
            ResourceKind::Energy,
            carried,
            sink_free,
        ) {
            ActionResult::NotInRange => {
                actions::move_to(&mut slot, target.entity, Some(self.deliver_style.clone()));
                tracing::trace!(creep = ?creep, target = ?target.entity, "approaching delivery target");
            }
            _ => {}
        }
    }
}
