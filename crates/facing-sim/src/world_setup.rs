//! Entity spawn factories.
//!
//! Creates directional sprites and pose-driven characters with their
//! component bundles, handing out sequential sprite ids.

use hecs::World;
use log::warn;
use serde::{Deserialize, Serialize};

use facing_core::components::*;
use facing_core::constants::VIEW_COUNT;
use facing_core::enums::PoseMode;
use facing_core::types::{SpriteHandle, SpriteId};

use crate::pose;

/// Options for spawning a pose-driven character. Loadable from JSON;
/// missing fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSpec {
    pub name: String,
    pub sprites: PoseSprites,
    /// Initial pose; a cardinal suffix also sets the yaw.
    pub pose: Option<String>,
    pub yaw_deg: Option<f64>,
    pub mode: PoseMode,
    /// Re-derive the pose from yaw and mode every frame.
    pub auto: bool,
}

/// Spawn an object drawn from eight pre-rendered views.
pub fn spawn_directional(
    world: &mut World,
    next_sprite_id: &mut u32,
    name: &str,
    direction_deg: f64,
    views: [SpriteHandle; VIEW_COUNT],
) -> SpriteId {
    let id = allocate_id(next_sprite_id);
    world.spawn((
        id,
        Label { name: name.into() },
        Facing { direction_deg },
        DirectionalSprites { views },
        Renderable::default(),
    ));
    id
}

/// Spawn a character drawn from named pose sprites.
///
/// The yaw is taken from the initial pose's suffix when it has one, and
/// defaults to facing south when neither pose nor yaw say otherwise.
/// An initial pose missing from the sprite table is dropped, leaving the
/// pose to the default, yaw or random fallback.
pub fn spawn_character(
    world: &mut World,
    next_sprite_id: &mut u32,
    spec: CharacterSpec,
) -> SpriteId {
    let id = allocate_id(next_sprite_id);
    let pose = spec.pose.filter(|pose| {
        let known = spec.sprites.poses.contains_key(pose);
        if !known {
            warn!("sprite {} ('{}'): unknown pose '{pose}'", id.0, spec.name);
        }
        known
    });
    let mut state = PoseState {
        pose,
        yaw_deg: spec.yaw_deg,
        mode: spec.mode,
        auto: spec.auto,
        frame: 0,
    };
    pose::apply_pose_yaw(&mut state, true);

    world.spawn((
        id,
        Label { name: spec.name },
        state,
        spec.sprites,
        Renderable::default(),
    ));
    id
}

fn allocate_id(next_sprite_id: &mut u32) -> SpriteId {
    let id = SpriteId(*next_sprite_id);
    *next_sprite_id += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_spec_from_json() {
        let json = r#"{
            "name": "hero",
            "sprites": { "poses": { "walk.E": 4, "walk.W": 5 }, "default_pose": null },
            "pose": "walk.W",
            "mode": "walk",
            "auto": true
        }"#;
        let spec: CharacterSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.sprites.poses.get("walk.W"), Some(&SpriteHandle(5)));

        let mut world = World::new();
        let mut next_id = 7;
        let id = spawn_character(&mut world, &mut next_id, spec);
        assert_eq!(id, SpriteId(7));
        assert_eq!(next_id, 8);

        let mut query = world.query::<(&SpriteId, &PoseState)>();
        let (_, (_, state)) = query.iter().next().unwrap();
        // The pose suffix sets the yaw.
        assert_eq!(state.yaw_deg, Some(180.0));
        assert_eq!(state.mode, PoseMode::Walk);
        assert!(state.auto);
    }

    #[test]
    fn test_spawn_drops_unknown_pose() {
        let mut sprites = PoseSprites::default();
        sprites.poses.insert("idle.S".into(), SpriteHandle(3));
        let spec = CharacterSpec {
            name: "npc".into(),
            sprites,
            pose: Some("bogus.E".into()),
            ..Default::default()
        };

        let mut world = World::new();
        let mut next_id = 0;
        spawn_character(&mut world, &mut next_id, spec);

        let mut query = world.query::<&PoseState>();
        let (_, state) = query.iter().next().unwrap();
        assert_eq!(state.pose, None);
        // The bogus suffix does not set the yaw; it falls back to south.
        assert_eq!(state.yaw_deg, Some(-90.0));
    }

    #[test]
    fn test_spawn_directional_bundle() {
        let mut world = World::new();
        let mut next_id = 0;
        let views = std::array::from_fn(|i| SpriteHandle(i as u32));
        let id = spawn_directional(&mut world, &mut next_id, "crate", 45.0, views);

        let mut query = world.query::<(&SpriteId, &Facing, &DirectionalSprites, &Renderable)>();
        let (_, (found, facing, sprites, renderable)) = query.iter().next().unwrap();
        assert_eq!(*found, id);
        assert_eq!(facing.direction_deg, 45.0);
        assert_eq!(sprites.views[7], SpriteHandle(7));
        assert_eq!(renderable.sprite, None);
    }
}
