//! Action Results and Path Styling
//!
//! The result codes an action attempt can produce, and the advisory styling
//! passed along with movement commands.

use serde::{Deserialize, Serialize};

/// Outcome of attempting a game action.
///
/// This is the full set of codes role logic is allowed to distinguish. Only
/// `NotInRange` changes a controller's behavior (it triggers a compensating
/// move); everything under `Failed` is transient and resolves itself when
/// the next tick re-evaluates from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionResult {
    /// The action was accepted and registered for this tick.
    Ok,
    /// The target is valid but too far away to act on.
    NotInRange,
    /// Any other failure: empty source, full store, vanished target.
    Failed,
}

impl ActionResult {
    /// Whether this attempt should be compensated with a move toward the target.
    pub fn needs_approach(self) -> bool {
        matches!(self, ActionResult::NotInRange)
    }
}

/// Stroke color used when visualizing a gather path.
pub const GATHER_PATH_STROKE: &str = "#ffaa00";

/// Stroke color used when visualizing a deliver path.
pub const DELIVER_PATH_STROKE: &str = "#ffffff";

/// Visualization options attached to a movement command.
///
/// Purely advisory: the movement primitive draws the path in this style, and
/// nothing in the simulation reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke: String,
}

impl PathStyle {
    pub fn new(stroke: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
        }
    }

    /// Style for paths walked toward a resource node.
    pub fn gather() -> Self {
        Self::new(GATHER_PATH_STROKE)
    }

    /// Style for paths walked toward a delivery structure.
    pub fn deliver() -> Self {
        Self::new(DELIVER_PATH_STROKE)
    }
}
