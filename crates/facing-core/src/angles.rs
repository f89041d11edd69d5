//! Angle helpers: circular wrapping, bouncing between limits, and
//! screen-space direction vectors.
//!
//! All angles are degrees. Screen space has +X to the right and +Y down,
//! so a direction `a` maps to `(cos a, -sin a)`.

use glam::DVec2;

use crate::error::{FacingError, Result};

/// Normalize `num` into a range.
///
/// In wrap mode (`bounce == false`) the limits sit on top of each other
/// like marks on a circle and the result lies in `[lower, upper)`:
/// 361 in `[0, 360)` becomes 1, -1 becomes 359.
///
/// In bounce mode the value reflects off the limits and the result lies in
/// `[lower, upper]`: -100 in `[-90, 90]` becomes -80, not 80, and 100 in
/// `[0, 90]` becomes 80. Bounce mode accepts ranges symmetric about zero
/// or starting at zero.
pub fn normalize(num: f64, lower: f64, upper: f64, bounce: bool) -> Result<f64> {
    // Negated comparison also rejects NaN limits.
    if !(lower < upper) {
        return Err(FacingError::InvalidRange { lower, upper });
    }
    if bounce {
        if lower == 0.0 {
            Ok(bounce_from_zero(num, upper))
        } else if lower == -upper {
            Ok(bounce_between(num, upper))
        } else {
            Err(FacingError::InvalidRange { lower, upper })
        }
    } else {
        Ok(wrap_into(num, lower, upper))
    }
}

/// Wrap an angle into [0, 360).
pub fn wrap_degrees(deg: f64) -> f64 {
    wrap_into(deg, 0.0, 360.0)
}

/// Unit vector for a direction in screen space (Y axis inverted).
pub fn screen_vector(direction_deg: f64) -> DVec2 {
    let rad = direction_deg.to_radians();
    DVec2::new(rad.cos(), -rad.sin())
}

/// Signed angle from `from` to `to` in degrees, as the difference of their
/// atan2 headings. Not reduced, so it lies in (-360, 360).
pub fn signed_angle_deg(from: DVec2, to: DVec2) -> f64 {
    (to.y.atan2(to.x) - from.y.atan2(from.x)).to_degrees()
}

fn wrap_into(num: f64, lower: f64, upper: f64) -> f64 {
    let wrapped = lower + (num - lower).rem_euclid(upper - lower);
    // rem_euclid rounds up to the full span for tiny negative offsets.
    if wrapped >= upper {
        lower
    } else {
        wrapped
    }
}

/// Reflect into [0, upper]; the motion repeats every `2 * upper`.
fn bounce_from_zero(num: f64, upper: f64) -> f64 {
    let reduced = num.rem_euclid(2.0 * upper);
    if reduced > upper {
        2.0 * upper - reduced
    } else {
        reduced
    }
}

fn bounce_between(num: f64, upper: f64) -> f64 {
    let half_period = 2.0 * upper;
    let reduced = (num + half_period).rem_euclid(2.0 * half_period) - half_period;
    if reduced > upper {
        half_period - reduced
    } else if reduced < -upper {
        -half_period - reduced
    } else {
        reduced
    }
}
