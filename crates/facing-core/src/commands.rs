//! Commands sent to the engine from outside the frame loop.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::PoseMode;
use crate::types::SpriteId;

/// All view and pose changes an embedding game can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewCommand {
    // --- Camera ---
    /// Point the camera at an absolute direction (degrees).
    SetCameraDirection { direction_deg: f64 },
    /// Turn the camera by a relative amount (degrees).
    RotateCamera { delta_deg: f64 },

    // --- Sprites ---
    /// Set the facing direction of a sprite (degrees).
    SetFacing { sprite_id: SpriteId, direction_deg: f64 },
    /// Force a named pose. Cardinal suffixes also update the yaw.
    SetPose { sprite_id: SpriteId, pose: String },
    /// Switch the animation mode used by auto-posing.
    SetPoseMode { sprite_id: SpriteId, mode: PoseMode },
}
