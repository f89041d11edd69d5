//! Fundamental handle, camera and timing types.

use serde::{Deserialize, Serialize};

use crate::angles;

/// Opaque handle to an externally owned sprite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteHandle(pub u32);

/// Stable identifier for a sprite entity, used by commands and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteId(pub u32);

/// The camera's horizontal viewing direction.
///
/// Passed explicitly into every selection instead of being looked up
/// from a global camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    /// Direction the camera looks at, in degrees (0 = +X, counter-clockwise).
    pub direction_deg: f64,
}

/// Frame time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Current frame number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed time in seconds.
    pub elapsed_secs: f64,
}

impl CameraView {
    pub fn new(direction_deg: f64) -> Self {
        Self { direction_deg }
    }

    /// Turn the camera by `delta_deg`, keeping the direction in [0, 360).
    pub fn rotate(&mut self, delta_deg: f64) {
        self.direction_deg = angles::wrap_degrees(self.direction_deg + delta_deg);
    }
}

impl FrameTime {
    /// Seconds per tick at the default frame rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
