//! Directional sprite engine.
//!
//! Owns the hecs ECS world, selects each sprite's view from the camera
//! direction every tick, resolves character poses, and produces
//! FrameSnapshots for the renderer.

pub mod engine;
pub mod pose;
pub mod selector;
pub mod systems;
pub mod world_setup;

pub use engine::FacingEngine;
pub use facing_core as core;
pub use selector::{relative_facing, select_directional_sprite, RelativeFacing};
