//! Target Selection
//!
//! How a controller picks one target out of a room query result. The
//! default takes the first candidate in iteration order; a nearest-by-range
//! alternative is available for roles configured to prefer proximity.

use bevy_ecs::prelude::Entity;
use serde::{Deserialize, Serialize};

use crate::components::world::Position;

/// A query hit a controller can act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub entity: Entity,
    pub pos: Position,
}

impl Candidate {
    pub fn new(entity: Entity, pos: Position) -> Self {
        Self { entity, pos }
    }
}

/// Strategy for choosing a target from an ordered candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStrategy {
    /// Take the first candidate in query order.
    #[default]
    FirstInOrder,
    /// Take the candidate closest by range; ties go to the earlier one.
    NearestByRange,
}

impl TargetStrategy {
    /// Picks a target, or None when there are no candidates.
    pub fn pick<'a>(&self, origin: &Position, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
        match self {
            TargetStrategy::FirstInOrder => candidates.first(),
            TargetStrategy::NearestByRange => candidates
                .iter()
                .min_by_key(|c| origin.range_to(&c.pos).unwrap_or(u32::MAX)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;
    use colony_types::RoomName;

    fn room() -> RoomName {
        "W1N1".parse().unwrap()
    }

    fn candidates(world: &mut World, positions: &[(u8, u8)]) -> Vec<Candidate> {
        positions
            .iter()
            .map(|&(x, y)| Candidate::new(world.spawn_empty().id(), Position::new(room(), x, y)))
            .collect()
    }

    #[test]
    fn test_first_in_order_ignores_distance() {
        let mut world = World::new();
        let origin = Position::new(room(), 10, 10);
        // First candidate is the farther one.
        let list = candidates(&mut world, &[(40, 40), (11, 10)]);

        let picked = TargetStrategy::FirstInOrder.pick(&origin, &list).unwrap();
        assert_eq!(picked.entity, list[0].entity);
    }

    #[test]
    fn test_nearest_by_range_prefers_closest() {
        let mut world = World::new();
        let origin = Position::new(room(), 10, 10);
        let list = candidates(&mut world, &[(40, 40), (11, 10)]);

        let picked = TargetStrategy::NearestByRange.pick(&origin, &list).unwrap();
        assert_eq!(picked.entity, list[1].entity);
    }

    #[test]
    fn test_nearest_tie_goes_to_earlier_candidate() {
        let mut world = World::new();
        let origin = Position::new(room(), 10, 10);
        // Both at range 2.
        let list = candidates(&mut world, &[(12, 10), (10, 12)]);

        let picked = TargetStrategy::NearestByRange.pick(&origin, &list).unwrap();
        assert_eq!(picked.entity, list[0].entity);
    }

    #[test]
    fn test_empty_candidates_pick_none() {
        let origin = Position::new(room(), 10, 10);
        assert!(TargetStrategy::FirstInOrder.pick(&origin, &[]).is_none());
        assert!(TargetStrategy::NearestByRange.pick(&origin, &[]).is_none());
    }

    #[test]
    fn test_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&TargetStrategy::FirstInOrder).unwrap(),
            r#""first_in_order""#
        );
        assert_eq!(
            serde_json::to_string(&TargetStrategy::NearestByRange).unwrap(),
            r#""nearest_by_range""#
        );
    }
}
