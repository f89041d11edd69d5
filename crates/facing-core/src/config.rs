//! Runtime configuration for the facing engine.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_POSE_SEED;
use crate::enums::NanPolicy;
use crate::error::Result;

/// Configuration for starting a new engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacingConfig {
    /// RNG seed for the random pose fallback. Same seed = same picks.
    pub seed: u64,
    /// Handling of NaN or infinite directions.
    pub nan_policy: NanPolicy,
    /// Initial camera direction (degrees).
    pub camera_direction_deg: f64,
}

impl Default for FacingConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_POSE_SEED,
            nan_policy: NanPolicy::default(),
            camera_direction_deg: 0.0,
        }
    }
}

impl FacingConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
