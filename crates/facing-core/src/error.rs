//! Error type shared by the facing crates.

/// Errors raised by view selection, angle helpers, pose lookup and config.
#[derive(thiserror::Error, Debug)]
pub enum FacingError {
    /// A direction fed to the selector was NaN or infinite.
    #[error("non-finite direction: camera {camera_deg}, object {object_deg}")]
    NonFiniteDirection { camera_deg: f64, object_deg: f64 },

    /// Normalization limits that cannot describe a range.
    #[error("invalid normalization range: [{lower}, {upper}]")]
    InvalidRange { lower: f64, upper: f64 },

    /// A pose name missing from an entity's pose sprite table.
    #[error("unknown pose: {0}")]
    UnknownPose(String),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FacingError>;
