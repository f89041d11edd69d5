//! Frame snapshot: the complete drawable state after each tick.

use serde::{Deserialize, Serialize};

use crate::events::FrameEvent;
use crate::types::{CameraView, FrameTime, SpriteHandle, SpriteId};

/// Everything a renderer needs after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: FrameTime,
    pub camera: CameraView,
    /// Sorted by sprite id.
    pub sprites: Vec<SpriteView>,
    pub events: Vec<FrameEvent>,
}

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub sprite_id: SpriteId,
    pub name: String,
    pub sprite: Option<SpriteHandle>,
    /// View bucket, for directional sprites.
    pub view_index: Option<u8>,
    /// Pose name, for characters.
    pub pose: Option<String>,
    pub facing_deg: Option<f64>,
}

impl FrameSnapshot {
    /// Look up a sprite view by id.
    pub fn sprite(&self, sprite_id: SpriteId) -> Option<&SpriteView> {
        self.sprites.iter().find(|s| s.sprite_id == sprite_id)
    }
}
