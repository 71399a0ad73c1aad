//! Room Object Components
//!
//! Positions, resource nodes, storage structures, and hostiles.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use colony_types::{RoomName, StructureKind};

/// Component: a grid position inside a named room.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub room: RoomName,
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(room: RoomName, x: u8, y: u8) -> Self {
        Self { room, x, y }
    }

    /// Chebyshev distance to another position, or None across rooms.
    ///
    /// Diagonal steps count the same as orthogonal ones, so "range" is the
    /// larger of the two axis deltas.
    pub fn range_to(&self, other: &Position) -> Option<u32> {
        if self.room != other.room {
            return None;
        }
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        Some(dx.max(dy))
    }

    /// Whether `other` is within `range` of this position (same room only).
    pub fn in_range_to(&self, other: &Position, range: u32) -> bool {
        matches!(self.range_to(other), Some(r) if r <= range)
    }
}

/// Component: a fixed resource node creeps can harvest from.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Source {
    /// Energy currently available at the node.
    pub energy: u32,
}

impl Source {
    pub fn new(energy: u32) -> Self {
        Self { energy }
    }

    pub fn is_depleted(&self) -> bool {
        self.energy == 0
    }
}

/// Component: a fixed storage structure with a resource inventory.
///
/// The inventory itself is a separate [`Store`](crate::components::creep::Store)
/// component on the same entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
}

impl Structure {
    pub fn new(kind: StructureKind) -> Self {
        Self { kind }
    }
}

/// Marker component: an enemy-controlled actor.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Hostile;
