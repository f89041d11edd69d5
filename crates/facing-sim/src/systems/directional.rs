//! Directional sprite system.
//!
//! Writes the view that matches each object's facing relative to the
//! camera into its `Renderable`.

use hecs::World;
use log::{debug, warn};

use facing_core::components::{DirectionalSprites, Facing, Renderable};
use facing_core::enums::NanPolicy;
use facing_core::events::FrameEvent;
use facing_core::types::{CameraView, SpriteId};

use crate::selector;

/// Select a view for every entity with Facing + DirectionalSprites.
/// Entities whose selection fails keep last frame's sprite.
pub fn run(
    world: &mut World,
    camera: &CameraView,
    nan_policy: NanPolicy,
    events: &mut Vec<FrameEvent>,
) {
    for (_entity, (id, facing, sprites, renderable)) in world.query_mut::<(
        &SpriteId,
        &Facing,
        &DirectionalSprites,
        &mut Renderable,
    )>() {
        let view = match selector::select_view(
            camera.direction_deg,
            facing.direction_deg,
            sprites,
            nan_policy,
        ) {
            Ok(view) => view,
            Err(err) => {
                warn!("sprite {}: {err}", id.0);
                continue;
            }
        };

        if renderable.view_index != Some(view.view_index) {
            debug!(
                "sprite {}: view {:?} -> {} (camera {}, facing {})",
                id.0, renderable.view_index, view.view_index, camera.direction_deg, facing.direction_deg
            );
            events.push(FrameEvent::ViewChanged {
                sprite_id: *id,
                from: renderable.view_index,
                to: view.view_index,
                sprite: view.sprite,
            });
        }
        renderable.sprite = Some(view.sprite);
        renderable.view_index = Some(view.view_index);
    }
}
