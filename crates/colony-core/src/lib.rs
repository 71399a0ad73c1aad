//! Per-creep role controllers for a tick-based colony simulation.
//!
//! Each tick an external driver invokes one role controller per live creep.
//! A controller reads the current world state, decides a single action, and
//! writes it into the creep's command slot. No state survives between ticks;
//! every decision is recomputed from scratch.

pub mod actions;
pub mod components;
pub mod config;
pub mod roles;
pub mod targeting;

pub use components::*;

pub use actions::{ActionCommand, MoveCommand, MELEE_RANGE};
pub use config::{CombatConfig, ConfigError, HarvesterConfig, RolesConfig};
pub use roles::{clear_command_slots, CombatController, HarvesterController, RoleRunner};
pub use targeting::{Candidate, TargetStrategy};
