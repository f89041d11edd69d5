//! Snapshot system: queries the ECS world and builds a FrameSnapshot.
//!
//! This system is read-only.

use hecs::World;

use facing_core::components::{Facing, Label, PoseState, Renderable};
use facing_core::events::FrameEvent;
use facing_core::state::{FrameSnapshot, SpriteView};
use facing_core::types::{CameraView, FrameTime, SpriteId};

/// Build a FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &FrameTime,
    camera: &CameraView,
    events: Vec<FrameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        camera: *camera,
        sprites: build_sprites(world),
        events,
    }
}

fn build_sprites(world: &World) -> Vec<SpriteView> {
    let mut query = world.query::<(
        &SpriteId,
        &Renderable,
        Option<&Label>,
        Option<&Facing>,
        Option<&PoseState>,
    )>();
    let mut sprites: Vec<SpriteView> = query
        .iter()
        .map(|(_, (id, renderable, label, facing, pose))| SpriteView {
            sprite_id: *id,
            name: label.map(|l| l.name.clone()).unwrap_or_default(),
            sprite: renderable.sprite,
            view_index: renderable.view_index,
            pose: pose.and_then(|p| p.pose.clone()),
            facing_deg: facing
                .map(|f| f.direction_deg)
                .or_else(|| pose.and_then(|p| p.yaw_deg)),
        })
        .collect();
    sprites.sort_by_key(|s| s.sprite_id);
    sprites
}
