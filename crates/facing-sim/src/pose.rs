//! Pose resolution for four-way characters.
//!
//! Characters carry a table of named pose sprites (`idle.E`, `walk.S`, ...).
//! A pose is picked from, in order: an explicit pose, the table's default
//! pose, the idle pose for the character's yaw, and finally a seeded random
//! pose so something is always drawn.

use rand::seq::IteratorRandom;
use rand::Rng;

use facing_core::components::{PoseSprites, PoseState};
use facing_core::constants::{DEFAULT_YAW_DEG, POSE_SEPARATOR};
use facing_core::enums::{Cardinal, PoseMode};
use facing_core::error::{FacingError, Result};
use facing_core::types::SpriteHandle;

/// How a pose was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseSource {
    Explicit,
    Default,
    Yaw,
    Random,
}

/// A pose picked for a character and the sprite that draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPose {
    pub name: String,
    pub sprite: SpriteHandle,
    pub source: PoseSource,
}

/// Pose name for a yaw in the given mode, e.g. yaw 0 walking is `walk.E`.
pub fn auto_pose_name(yaw_deg: f64, mode: PoseMode) -> Option<String> {
    Cardinal::from_yaw_deg(yaw_deg).map(|cardinal| mode.pose_name(cardinal))
}

/// Cardinal named by a pose's suffix (`walk.W` is west).
pub fn pose_cardinal(pose: &str) -> Option<Cardinal> {
    let (_, suffix) = pose.rsplit_once(POSE_SEPARATOR)?;
    Cardinal::from_suffix(suffix)
}

/// Set the yaw from the pose's cardinal suffix.
///
/// Without a suffix the yaw is kept, unless it is unset and `always_set`
/// is true, in which case it becomes `DEFAULT_YAW_DEG` (south).
pub fn apply_pose_yaw(state: &mut PoseState, always_set: bool) {
    let cardinal = state.pose.as_deref().and_then(pose_cardinal);
    match cardinal {
        Some(cardinal) => state.yaw_deg = Some(cardinal.yaw_deg()),
        None if state.yaw_deg.is_none() && always_set => state.yaw_deg = Some(DEFAULT_YAW_DEG),
        None => {}
    }
}

/// Switch a character to the pose its yaw and mode call for, if the
/// table has it. Returns true when the pose changed; the animation
/// restarts in that case.
pub fn auto_pose(state: &mut PoseState, sprites: &PoseSprites) -> bool {
    let Some(name) = state.yaw_deg.and_then(|yaw| auto_pose_name(yaw, state.mode)) else {
        return false;
    };
    if !sprites.poses.contains_key(&name) || state.pose.as_deref() == Some(name.as_str()) {
        return false;
    }
    state.pose = Some(name);
    state.frame = 0;
    true
}

/// Pick the pose to draw.
///
/// An explicit pose missing from the table is an error. An empty table
/// resolves to `None`.
pub fn resolve_pose<R: Rng>(
    state: &PoseState,
    sprites: &PoseSprites,
    rng: &mut R,
) -> Result<Option<ResolvedPose>> {
    if let Some(pose) = &state.pose {
        let sprite = sprites
            .poses
            .get(pose)
            .ok_or_else(|| FacingError::UnknownPose(pose.clone()))?;
        return Ok(Some(ResolvedPose {
            name: pose.clone(),
            sprite: *sprite,
            source: PoseSource::Explicit,
        }));
    }

    let preferred = match &sprites.default_pose {
        Some(default_pose) => Some((default_pose.clone(), PoseSource::Default)),
        None => state
            .yaw_deg
            .and_then(|yaw| auto_pose_name(yaw, PoseMode::Idle))
            .map(|name| (name, PoseSource::Yaw)),
    };
    if let Some((name, source)) = preferred {
        if let Some(sprite) = sprites.poses.get(&name) {
            return Ok(Some(ResolvedPose {
                sprite: *sprite,
                name,
                source,
            }));
        }
    }

    Ok(sprites
        .poses
        .iter()
        .choose(rng)
        .map(|(name, sprite)| ResolvedPose {
            name: name.clone(),
            sprite: *sprite,
            source: PoseSource::Random,
        }))
}
