//! Creep Components
//!
//! Identity, role assignment, carried inventory, and the per-tick command
//! slot for individual creeps.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use colony_types::ResourceKind;

use crate::actions::{ActionCommand, MoveCommand};

/// Marker component identifying an entity as a creep.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Creep;

/// Human-readable name for a creep.
#[derive(Component, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreepName(pub String);

/// The behavior role assigned to a creep.
///
/// Assignment happens outside this crate; controllers only dispatch on it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Harvester,
    Fighter,
}

/// Component: a finite-capacity resource inventory.
///
/// Used both for the cargo a creep carries and for the inventory of a
/// storage structure. Only energy is tracked today, but all accessors stay
/// keyed by [`ResourceKind`] to match the runtime's contract.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub capacity: u32,
    pub energy: u32,
}

impl Store {
    /// Creates an empty store.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            energy: 0,
        }
    }

    /// Creates a store with an initial energy amount.
    pub fn with_energy(capacity: u32, energy: u32) -> Self {
        Self { capacity, energy }
    }

    /// Remaining space for the given resource.
    pub fn free_capacity(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Energy => self.capacity.saturating_sub(self.energy),
        }
    }

    /// Amount of the given resource currently held.
    pub fn available(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Energy => self.energy,
        }
    }

    pub fn is_full(&self) -> bool {
        self.free_capacity(ResourceKind::Energy) == 0
    }
}

/// Component: the commands issued to a creep for the current tick.
///
/// Movement and actions run in separate resolution pipelines, so a creep may
/// carry one of each in the same tick (a fighter closes distance and swings
/// in one go). The tick driver clears slots before roles run; controllers
/// never clear.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CommandSlot {
    pub action: Option<ActionCommand>,
    pub movement: Option<MoveCommand>,
}

impl CommandSlot {
    pub fn clear(&mut self) {
        self.action = None;
        self.movement = None;
    }

    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.movement.is_none()
    }
}
