//! Enumeration types used throughout view and pose selection.

use serde::{Deserialize, Serialize};

use crate::angles;
use crate::constants::*;

/// Compass direction of a right-handed yaw (E = 0, counter-clockwise),
/// not a real-world heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    #[serde(rename = "E")]
    East,
    #[serde(rename = "N")]
    North,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "S")]
    South,
}

/// Animation mode that prefixes a pose name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoseMode {
    #[default]
    Idle,
    Walk,
}

/// What the selector does with a NaN or infinite direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    /// Select view 0 and log a warning.
    #[default]
    DefaultToFirst,
    /// Return `FacingError::NonFiniteDirection`.
    Reject,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [
        Cardinal::East,
        Cardinal::North,
        Cardinal::West,
        Cardinal::South,
    ];

    /// Quantize a yaw into one of four cardinals.
    ///
    /// The yaw is wrapped into [45, 405) first, so east covers
    /// [315, 405) plus the exact 45° edge. Non-finite yaw has no cardinal.
    pub fn from_yaw_deg(yaw_deg: f64) -> Option<Cardinal> {
        if !yaw_deg.is_finite() {
            return None;
        }
        let angle = angles::normalize(
            yaw_deg,
            CARDINAL_RANGE_LOWER_DEG,
            CARDINAL_RANGE_UPPER_DEG,
            false,
        )
        .ok()?;

        let cardinal = if angle > CARDINAL_SOUTH_SPLIT_DEG {
            if angle >= CARDINAL_EAST_FROM_DEG {
                Cardinal::East
            } else {
                Cardinal::South
            }
        } else if angle >= CARDINAL_WEST_FROM_DEG {
            Cardinal::West
        } else if angle <= CARDINAL_RANGE_LOWER_DEG {
            Cardinal::East
        } else {
            Cardinal::North
        };
        Some(cardinal)
    }

    /// Canonical yaw for this cardinal (degrees).
    pub fn yaw_deg(self) -> f64 {
        match self {
            Cardinal::East => 0.0,
            Cardinal::North => 90.0,
            Cardinal::West => 180.0,
            Cardinal::South => -90.0,
        }
    }

    /// Single-letter suffix used in pose names.
    pub fn suffix(self) -> &'static str {
        match self {
            Cardinal::East => "E",
            Cardinal::North => "N",
            Cardinal::West => "W",
            Cardinal::South => "S",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Cardinal> {
        Cardinal::ALL.into_iter().find(|c| c.suffix() == suffix)
    }
}

impl PoseMode {
    pub fn name(self) -> &'static str {
        match self {
            PoseMode::Idle => "idle",
            PoseMode::Walk => "walk",
        }
    }

    /// Pose name for this mode facing `cardinal`, e.g. `walk.E`.
    pub fn pose_name(self, cardinal: Cardinal) -> String {
        format!("{}{}{}", self.name(), POSE_SEPARATOR, cardinal.suffix())
    }
}
