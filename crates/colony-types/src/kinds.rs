//! Entity Kinds
//!
//! Closed enumerations for the resources creeps carry and the structure
//! types that exist in a room.

use serde::{Deserialize, Serialize};

/// A harvestable/transferable resource type.
///
/// Energy is the only resource the economy currently moves; the enum exists
/// so stores and transfer commands stay keyed by resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Energy,
}

/// The kind of a storage structure in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    Spawn,
    Extension,
    Tower,
    Container,
    Storage,
}

impl StructureKind {
    /// Whether haulers should keep this structure topped up with energy.
    ///
    /// Spawns, extensions, and towers consume energy to function; containers
    /// and general storage are buffers, not delivery targets.
    pub fn is_refill_target(self) -> bool {
        matches!(
            self,
            StructureKind::Spawn | StructureKind::Extension | StructureKind::Tower
        )
    }
}
