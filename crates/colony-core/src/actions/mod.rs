//! Action Command Layer
//!
//! The action primitives role controllers consume. Each attempt validates
//! synchronously against current world state and returns an [`ActionResult`];
//! only successful attempts register a command in the creep's slot, so a
//! failed attempt leaves no trace and the next tick re-evaluates cleanly.

use bevy_ecs::prelude::Entity;

use colony_types::{ActionResult, PathStyle, ResourceKind};

use crate::components::creep::CommandSlot;
use crate::components::world::Position;

/// Range within which harvest, transfer, and attack can act on a target.
pub const MELEE_RANGE: u32 = 1;

/// An action command registered in a creep's slot for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCommand {
    Harvest {
        target: Entity,
    },
    Transfer {
        target: Entity,
        resource: ResourceKind,
    },
    Attack {
        target: Entity,
    },
}

/// A movement command registered in a creep's slot for this tick.
///
/// Movement is advisory: pathfinding and the actual step happen in the
/// external runtime's resolution phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCommand {
    pub target: Entity,
    pub style: Option<PathStyle>,
}

/// Attempts to harvest from a resource node.
///
/// Range is checked before node state, so a depleted node that is also far
/// away still reads as `NotInRange` and draws the creep toward it.
pub fn try_harvest(
    slot: &mut CommandSlot,
    creep_pos: &Position,
    target: Entity,
    target_pos: &Position,
    source_energy: u32,
) -> ActionResult {
    if !creep_pos.in_range_to(target_pos, MELEE_RANGE) {
        return ActionResult::NotInRange;
    }
    if source_energy == 0 {
        return ActionResult::Failed;
    }
    slot.action = Some(ActionCommand::Harvest { target });
    ActionResult::Ok
}

/// Attempts to transfer a resource into a structure's store.
pub fn try_transfer(
    slot: &mut CommandSlot,
    creep_pos: &Position,
    target: Entity,
    target_pos: &Position,
    resource: ResourceKind,
    carried: u32,
    structure_free: u32,
) -> ActionResult {
    if !creep_pos.in_range_to(target_pos, MELEE_RANGE) {
        return ActionResult::NotInRange;
    }
    if carried == 0 || structure_free == 0 {
        return ActionResult::Failed;
    }
    slot.action = Some(ActionCommand::Transfer { target, resource });
    ActionResult::Ok
}

/// Attempts a melee attack against a hostile.
pub fn try_attack(
    slot: &mut CommandSlot,
    creep_pos: &Position,
    target: Entity,
    target_pos: &Position,
) -> ActionResult {
    if !creep_pos.in_range_to(target_pos, MELEE_RANGE) {
        return ActionResult::NotInRange;
    }
    slot.action = Some(ActionCommand::Attack { target });
    ActionResult::Ok
}

/// Registers a movement toward a target, with optional path visualization.
pub fn move_to(slot: &mut CommandSlot, target: Entity, style: Option<PathStyle>) -> ActionResult {
    slot.movement = Some(MoveCommand { target, style });
    ActionResult::Ok
}
