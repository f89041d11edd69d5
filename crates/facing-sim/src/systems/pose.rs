//! Pose system: keeps characters' pose sprites and animation frames current.

use std::collections::HashSet;

use hecs::World;
use log::{debug, warn};
use rand_chacha::ChaCha8Rng;

use facing_core::components::{Label, PoseSprites, PoseState, Renderable};
use facing_core::events::FrameEvent;
use facing_core::types::SpriteId;

use crate::pose;

/// Resolve and draw the pose of every entity with PoseState + PoseSprites.
///
/// `warned` holds the names already reported as having no graphics, so
/// each is reported once.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warned: &mut HashSet<String>,
    events: &mut Vec<FrameEvent>,
) {
    for (_entity, (id, state, sprites, renderable, label)) in world.query_mut::<(
        &SpriteId,
        &mut PoseState,
        &PoseSprites,
        &mut Renderable,
        Option<&Label>,
    )>() {
        let previous = state.pose.clone();
        if state.auto {
            pose::auto_pose(state, sprites);
        }

        let resolved = match pose::resolve_pose(state, sprites, rng) {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                renderable.sprite = None;
                let name = label.map_or_else(|| format!("#{}", id.0), |l| l.name.clone());
                if warned.insert(name.clone()) {
                    warn!("there are no graphics for '{name}'");
                    events.push(FrameEvent::MissingGraphics {
                        sprite_id: *id,
                        name,
                    });
                }
                continue;
            }
            Err(err) => {
                warn!("sprite {}: {err}", id.0);
                continue;
            }
        };

        if previous.as_deref() == Some(resolved.name.as_str()) {
            state.frame = state.frame.wrapping_add(1);
        } else {
            debug!(
                "sprite {}: pose {:?} -> {} ({:?})",
                id.0, previous, resolved.name, resolved.source
            );
            state.frame = 0;
            events.push(FrameEvent::PoseChanged {
                sprite_id: *id,
                pose: resolved.name.clone(),
            });
        }
        state.pose = Some(resolved.name);
        renderable.sprite = Some(resolved.sprite);
        renderable.view_index = None;
    }
}
