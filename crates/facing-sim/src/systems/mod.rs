//! ECS systems that operate on the world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; inputs such as the camera are passed in explicitly.

pub mod directional;
pub mod pose;
pub mod snapshot;
