//! Directional view selection.
//!
//! Chooses which of eight pre-rendered views represents an object's facing
//! relative to the camera. Both directions become screen-space unit vectors,
//! their signed angle is folded by a 90° phase so that bucket 0 starts a
//! quarter turn clockwise of the camera, and the folded angle is bucketed
//! into 45° slices.
//!
//! Bucket edges belong to the bucket they open (`floor`), and folded angles
//! within `BUCKET_EDGE_EPSILON_DEG` of an edge snap onto it.

use log::warn;

use facing_core::angles;
use facing_core::components::DirectionalSprites;
use facing_core::constants::*;
use facing_core::enums::NanPolicy;
use facing_core::error::{FacingError, Result};
use facing_core::types::SpriteHandle;

/// Full result of comparing an object's facing with the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeFacing {
    /// Signed angle from the camera heading to the facing heading
    /// (degrees, screen space), in (-360, 360).
    pub relative_deg: f64,
    /// Relative angle after folding and wrapping, in [0, 360).
    pub folded_deg: f64,
    /// Selected view, always in `0..VIEW_COUNT`.
    pub view_index: u8,
    /// Cosine between the camera and facing vectors:
    /// 1 when the object looks the way the camera does, -1 when it looks back.
    /// Not used for selection.
    pub cosine: f64,
}

/// A chosen view and its sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedView {
    pub view_index: u8,
    pub sprite: SpriteHandle,
}

/// Compare an object's facing with the camera direction.
///
/// Total over all inputs: non-finite directions land in
/// `FALLBACK_VIEW_INDEX` with NaN angles. Use [`view_index`] to apply a
/// [`NanPolicy`] instead.
pub fn relative_facing(camera_deg: f64, object_deg: f64) -> RelativeFacing {
    let camera = angles::screen_vector(camera_deg);
    let facing = angles::screen_vector(object_deg);

    let cosine = camera.dot(facing);
    let relative_deg = angles::signed_angle_deg(camera, facing);
    let folded_deg = angles::wrap_degrees(snap_to_bucket_edge(fold(relative_deg)));

    RelativeFacing {
        relative_deg,
        folded_deg,
        view_index: bucket_of(folded_deg),
        cosine,
    }
}

/// View index for an object facing `object_deg` seen by a camera looking
/// along `camera_deg`.
pub fn view_index(camera_deg: f64, object_deg: f64, nan_policy: NanPolicy) -> Result<u8> {
    if camera_deg.is_finite() && object_deg.is_finite() {
        return Ok(relative_facing(camera_deg, object_deg).view_index);
    }
    match nan_policy {
        NanPolicy::DefaultToFirst => {
            warn!(
                "non-finite direction (camera {camera_deg}, object {object_deg}), using view {FALLBACK_VIEW_INDEX}"
            );
            Ok(FALLBACK_VIEW_INDEX)
        }
        NanPolicy::Reject => Err(FacingError::NonFiniteDirection {
            camera_deg,
            object_deg,
        }),
    }
}

/// Pick the view and sprite for an object out of its directional sprite set.
pub fn select_view(
    camera_deg: f64,
    object_deg: f64,
    sprites: &DirectionalSprites,
    nan_policy: NanPolicy,
) -> Result<SelectedView> {
    let view_index = view_index(camera_deg, object_deg, nan_policy)?;
    Ok(SelectedView {
        view_index,
        sprite: sprites.views[usize::from(view_index)],
    })
}

/// Pick the sprite that best represents an object's facing from the camera.
pub fn select_directional_sprite(
    camera_deg: f64,
    object_deg: f64,
    sprites: &DirectionalSprites,
    nan_policy: NanPolicy,
) -> Result<SpriteHandle> {
    select_view(camera_deg, object_deg, sprites, nan_policy).map(|view| view.sprite)
}

/// Shift the relative angle by the 90° phase. Results can exceed 360 for
/// relative angles below -270; callers wrap afterwards.
fn fold(relative_deg: f64) -> f64 {
    if relative_deg > FOLD_PHASE_DEG {
        FOLD_WRAP_DEG - relative_deg
    } else {
        FOLD_PHASE_DEG - relative_deg
    }
}

fn snap_to_bucket_edge(deg: f64) -> f64 {
    let edge = (deg / BUCKET_WIDTH_DEG).round() * BUCKET_WIDTH_DEG;
    if (deg - edge).abs() < BUCKET_EDGE_EPSILON_DEG {
        edge
    } else {
        deg
    }
}

/// Checked conversion from a folded angle to a view index.
fn bucket_of(folded_deg: f64) -> u8 {
    let bucket = (folded_deg / BUCKET_WIDTH_DEG).floor();
    if (0.0..VIEW_COUNT as f64).contains(&bucket) {
        bucket as u8
    } else {
        FALLBACK_VIEW_INDEX
    }
}
