//! Core types and definitions for directional sprite facing.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, commands, frame snapshots, events, constants, angle
//! helpers, configuration and errors. It has no dependency on the ECS.

pub mod angles;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{FacingError, Result};

#[cfg(test)]
mod tests;
