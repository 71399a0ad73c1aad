//! World and Creep Components
//!
//! All entity data lives in bevy_ecs components. The external runtime owns
//! entity lifecycles; role controllers only read these components and write
//! to their own creep's command slot.

pub mod creep;
pub mod world;

pub use creep::*;
pub use world::*;
