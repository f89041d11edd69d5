//! Fixed tuning values for view selection and pose resolution.

/// Frame rate the engine assumes when tracking elapsed time (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / FRAME_RATE as f64;

// --- Directional views ---

/// Number of pre-rendered views in a directional sprite set.
pub const VIEW_COUNT: usize = 8;

/// Angular width of one view bucket (degrees).
pub const BUCKET_WIDTH_DEG: f64 = 360.0 / VIEW_COUNT as f64;

/// Phase offset applied when folding the relative angle (degrees).
pub const FOLD_PHASE_DEG: f64 = 90.0;

/// Fold value used once the relative angle passes the phase offset.
/// Equal to `FOLD_PHASE_DEG + 360`.
pub const FOLD_WRAP_DEG: f64 = 450.0;

/// Folded angles this close to a bucket edge (degrees) snap onto the edge,
/// so float noise from the trigonometry never flips a bucket.
pub const BUCKET_EDGE_EPSILON_DEG: f64 = 1e-9;

/// View index used when a direction is not finite and the policy defaults.
pub const FALLBACK_VIEW_INDEX: u8 = 0;

// --- Cardinal quantization ---

/// Lower bound of the range yaw is normalized into before quantization.
pub const CARDINAL_RANGE_LOWER_DEG: f64 = 45.0;

/// Upper bound (exclusive) of the cardinal normalization range.
pub const CARDINAL_RANGE_UPPER_DEG: f64 = 405.0;

/// At or above this (normalized) yaw, a yaw past the west/south split is east.
pub const CARDINAL_EAST_FROM_DEG: f64 = 315.0;

/// Above this, yaw is east or south; at or below, north, west or east.
pub const CARDINAL_SOUTH_SPLIT_DEG: f64 = 225.0;

/// At or above this (and at most the south split) yaw is west.
pub const CARDINAL_WEST_FROM_DEG: f64 = 135.0;

// --- Poses ---

/// Yaw assigned when a pose carries no cardinal and a yaw must be set (south).
pub const DEFAULT_YAW_DEG: f64 = -90.0;

/// Separator between a pose mode and its cardinal suffix, e.g. `walk.E`.
pub const POSE_SEPARATOR: char = '.';

/// Default RNG seed for the random pose fallback.
pub const DEFAULT_POSE_SEED: u64 = 42;
