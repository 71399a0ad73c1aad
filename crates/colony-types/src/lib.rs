//! Shared data types for the creep colony simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod action;
pub mod kinds;
pub mod room;

// Re-export action types
pub use action::{ActionResult, PathStyle, DELIVER_PATH_STROKE, GATHER_PATH_STROKE};

// Re-export entity kind types
pub use kinds::{ResourceKind, StructureKind};

// Re-export room naming
pub use room::{ParseRoomNameError, RoomName, ROOM_SIZE};
