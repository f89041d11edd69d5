//! Events emitted by the engine when what is drawn changes.

use serde::{Deserialize, Serialize};

use crate::types::{SpriteHandle, SpriteId};

/// Per-frame change notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    /// A directional sprite moved to another view bucket.
    ViewChanged {
        sprite_id: SpriteId,
        from: Option<u8>,
        to: u8,
        sprite: SpriteHandle,
    },
    /// A character switched pose; its animation restarted.
    PoseChanged { sprite_id: SpriteId, pose: String },
    /// An entity has no graphics to draw. Emitted once per name.
    MissingGraphics { sprite_id: SpriteId, name: String },
}
