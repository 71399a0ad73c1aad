//! Combat Role
//!
//! Defensive fighter: scan the room for hostiles, close distance, and swing
//! when adjacent. Movement and attack go through separate pipelines, so an
//! adjacent fighter both repositions and lands a hit in the same tick.

use bevy_ecs::prelude::*;

use colony_types::ActionResult;

use crate::actions;
use crate::components::creep::CommandSlot;
use crate::components::world::{Hostile, Position};
use crate::config::CombatConfig;
use crate::targeting::{Candidate, TargetStrategy};

/// Decides one engagement per fighter per tick.
#[derive(Debug, Clone, Default)]
pub struct CombatController {
    pub strategy: TargetStrategy,
}

impl CombatController {
    pub fn from_config(config: &CombatConfig) -> Self {
        Self {
            strategy: config.strategy,
        }
    }

    /// Runs the threat scan and engagement for one creep.
    ///
    /// With no hostiles in the room the creep stays idle; threat counts are
    /// logged every tick either way so a quiet room is visible in traces.
    pub fn run(&self, world: &mut World, creep: Entity) {
        let Some(pos) = world.get::<Position>(creep).copied() else {
            return;
        };

        let hostiles: Vec<Candidate> = {
            let mut query = world.query_filtered::<(Entity, &Position), With<Hostile>>();
            query
                .iter(world)
                .filter(|(_, p)| p.room == pos.room)
                .map(|(entity, p)| Candidate::new(entity, *p))
                .collect()
        };
        tracing::debug!(
            creep = ?creep,
            room = %pos.room,
            hostiles = hostiles.len(),
            "threat scan"
        );

        let Some(target) = self.strategy.pick(&pos, &hostiles).copied() else {
            return;
        };

        let Some(mut slot) = world.get_mut::<CommandSlot>(creep) else {
            return;
        };
        actions::move_to(&mut slot, target.entity, None);
        match actions::try_attack(&mut slot, &pos, target.entity, &target.pos) {
            ActionResult::Ok => {
                tracing::trace!(creep = ?creep, target = ?target.entity, "engaging hostile");
            }
            // Still closing distance; the move above handles it.
            _ => {}
        }
    }
}
