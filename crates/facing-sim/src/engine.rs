//! Facing engine: the per-frame driver.
//!
//! `FacingEngine` owns the hecs ECS world and the camera, applies queued
//! view commands, runs the selection systems and produces `FrameSnapshot`s.
//! Headless and deterministic for a given seed.

use std::collections::{HashSet, VecDeque};

use hecs::{Entity, World};
use log::{debug, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use facing_core::commands::ViewCommand;
use facing_core::components::{Facing, PoseSprites, PoseState};
use facing_core::config::FacingConfig;
use facing_core::constants::VIEW_COUNT;
use facing_core::enums::NanPolicy;
use facing_core::events::FrameEvent;
use facing_core::state::FrameSnapshot;
use facing_core::types::{CameraView, FrameTime, SpriteHandle, SpriteId};

use crate::pose;
use crate::systems;
use crate::world_setup::{self, CharacterSpec};

/// The engine. Owns the ECS world and all per-frame state.
pub struct FacingEngine {
    world: World,
    time: FrameTime,
    camera: CameraView,
    nan_policy: NanPolicy,
    rng: ChaCha8Rng,
    next_sprite_id: u32,
    command_queue: VecDeque<ViewCommand>,
    events: Vec<FrameEvent>,
    missing_graphics_warned: HashSet<String>,
}

impl FacingEngine {
    /// Create a new engine with the given config.
    pub fn new(config: FacingConfig) -> Self {
        debug!(
            "facing engine: seed {}, nan policy {:?}, camera {}",
            config.seed, config.nan_policy, config.camera_direction_deg
        );
        Self {
            world: World::new(),
            time: FrameTime::default(),
            camera: CameraView::new(config.camera_direction_deg),
            nan_policy: config.nan_policy,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_sprite_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            missing_graphics_warned: HashSet::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ViewCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ViewCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.camera, events)
    }

    /// Spawn an object drawn from eight directional views.
    pub fn spawn_directional(
        &mut self,
        name: &str,
        direction_deg: f64,
        views: [SpriteHandle; VIEW_COUNT],
    ) -> SpriteId {
        world_setup::spawn_directional(
            &mut self.world,
            &mut self.next_sprite_id,
            name,
            direction_deg,
            views,
        )
    }

    /// Spawn a pose-driven character.
    pub fn spawn_character(&mut self, spec: CharacterSpec) -> SpriteId {
        world_setup::spawn_character(&mut self.world, &mut self.next_sprite_id, spec)
    }

    /// Get the current camera.
    pub fn camera(&self) -> CameraView {
        self.camera
    }

    /// Get the current frame time.
    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Find the entity carrying a sprite id.
    pub fn entity(&self, sprite_id: SpriteId) -> Option<Entity> {
        self.world
            .query::<&SpriteId>()
            .iter()
            .find(|(_, id)| **id == sprite_id)
            .map(|(entity, _)| entity)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: ViewCommand) {
        trace!("command: {command:?}");
        match command {
            ViewCommand::SetCameraDirection { direction_deg } => {
                if direction_deg.is_finite() {
                    self.camera = CameraView::new(direction_deg);
                } else {
                    warn!("ignoring non-finite camera direction {direction_deg}");
                }
            }
            ViewCommand::RotateCamera { delta_deg } => {
                if delta_deg.is_finite() {
                    self.camera.rotate(delta_deg);
                } else {
                    warn!("ignoring non-finite camera rotation {delta_deg}");
                }
            }
            ViewCommand::SetFacing {
                sprite_id,
                direction_deg,
            } => {
                for (_entity, (id, facing)) in self.world.query_mut::<(&SpriteId, &mut Facing)>() {
                    if *id == sprite_id {
                        facing.direction_deg = direction_deg;
                    }
                }
                for (_entity, (id, state)) in self.world.query_mut::<(&SpriteId, &mut PoseState)>()
                {
                    if *id == sprite_id {
                        state.yaw_deg = Some(direction_deg);
                    }
                }
            }
            ViewCommand::SetPose {
                sprite_id,
                pose: pose_name,
            } => {
                for (_entity, (id, state, sprites)) in
                    self.world
                        .query_mut::<(&SpriteId, &mut PoseState, &PoseSprites)>()
                {
                    if *id != sprite_id {
                        continue;
                    }
                    if !sprites.poses.contains_key(&pose_name) {
                        warn!("sprite {}: unknown pose '{pose_name}'", id.0);
                        continue;
                    }
                    state.pose = Some(pose_name.clone());
                    pose::apply_pose_yaw(state, false);
                }
            }
            ViewCommand::SetPoseMode { sprite_id, mode } => {
                for (_entity, (id, state)) in self.world.query_mut::<(&SpriteId, &mut PoseState)>()
                {
                    if *id == sprite_id {
                        state.mode = mode;
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Directional views from the camera
        systems::directional::run(
            &mut self.world,
            &self.camera,
            self.nan_policy,
            &mut self.events,
        );
        // 2. Character poses
        systems::pose::run(
            &mut self.world,
            &mut self.rng,
            &mut self.missing_graphics_warned,
            &mut self.events,
        );
    }
}

impl Default for FacingEngine {
    fn default() -> Self {
        Self::new(FacingConfig::default())
    }
}
