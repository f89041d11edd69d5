//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Selection logic lives in systems, not components.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::VIEW_COUNT;
use crate::enums::PoseMode;
use crate::types::SpriteHandle;

/// Direction the object faces, i.e. the way its sprite looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    /// Degrees, 0 = +X, counter-clockwise.
    pub direction_deg: f64,
}

/// Pre-rendered views of an object, one per 45° bucket of relative facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalSprites {
    pub views: [SpriteHandle; VIEW_COUNT],
}

/// The sprite the renderer draws for this entity this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Renderable {
    pub sprite: Option<SpriteHandle>,
    /// Bucket the sprite was chosen from, for directional sprites.
    pub view_index: Option<u8>,
}

/// Named pose sprites of a character, e.g. `idle.E` or `walk.S`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseSprites {
    pub poses: BTreeMap<String, SpriteHandle>,
    /// Pose used when the entity has none and no yaw.
    pub default_pose: Option<String>,
}

/// Pose selection state of a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseState {
    /// Current pose name, if resolved.
    pub pose: Option<String>,
    /// Right-handed yaw in degrees (E = 0), if known.
    pub yaw_deg: Option<f64>,
    pub mode: PoseMode,
    /// Derive the pose from yaw and mode every frame.
    pub auto: bool,
    /// Animation frame within the current pose; reset on pose change.
    pub frame: u32,
}

/// Display name, used in warnings about missing graphics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

// SpriteId (types.rs) doubles as the entity's stable identifier component.
