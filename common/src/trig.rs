//! Fixed-point trigonometry.
//!
//! Angles are expressed in `TRIG_MAX_ANGLE` units per full turn and measured
//! clockwise from 12 o'clock. Results are scaled by `TRIG_MAX_RATIO`, so
//! coordinate math stays in integers:
//!
//! ```ignore
//! let x = sin_lookup(angle) * radius / TRIG_MAX_RATIO;
//! ```
//!
//! The lookup rounds to the nearest step, which keeps the cardinal angles exact
//! (`sin_lookup(TRIG_MAX_ANGLE / 4) == TRIG_MAX_RATIO`).

/// One full turn.
pub const TRIG_MAX_ANGLE: i32 = 0x1_0000;

/// Fixed-point representation of 1.0.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

#[inline]
fn to_radians(angle: i32) -> f64 {
    let turns = angle.rem_euclid(TRIG_MAX_ANGLE) as f64 / TRIG_MAX_ANGLE as f64;
    turns * core::f64::consts::TAU
}

/// Sine of `angle`, scaled by [`TRIG_MAX_RATIO`].
pub fn sin_lookup(angle: i32) -> i32 {
    libm::round(libm::sin(to_radians(angle)) * TRIG_MAX_RATIO as f64) as i32
}

/// Cosine of `angle`, scaled by [`TRIG_MAX_RATIO`].
pub fn cos_lookup(angle: i32) -> i32 {
    libm::round(libm::cos(to_radians(angle)) * TRIG_MAX_RATIO as f64) as i32
}

/// Convert whole degrees to trig units, truncating.
#[inline]
pub const fn deg_to_trig(degrees: i32) -> i32 {
    TRIG_MAX_ANGLE * degrees / 360
}

/// Point at `radius` along `angle` from the origin, in screen coordinates
/// (y grows downwards, so 12 o'clock is negative y).
#[inline]
pub fn polar_offset(
    angle: i32,
    radius: i32,
) -> (i32, i32) {
    (
        sin_lookup(angle) * radius / TRIG_MAX_RATIO,
        -cos_lookup(angle) * radius / TRIG_MAX_RATIO,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_angles_are_exact() {
        assert_eq!(sin_lookup(0), 0);
        assert_eq!(cos_lookup(0), TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(TRIG_MAX_ANGLE / 4), TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(TRIG_MAX_ANGLE / 4), 0);
        assert_eq!(sin_lookup(TRIG_MAX_ANGLE / 2), 0);
        assert_eq!(cos_lookup(TRIG_MAX_ANGLE / 2), -TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(TRIG_MAX_ANGLE * 3 / 4), -TRIG_MAX_RATIO);
    }

    #[test]
    fn test_full_turn_wraps() {
        assert_eq!(sin_lookup(TRIG_MAX_ANGLE), sin_lookup(0));
        assert_eq!(cos_lookup(TRIG_MAX_ANGLE + 100), cos_lookup(100));
        assert_eq!(sin_lookup(-TRIG_MAX_ANGLE / 4), -TRIG_MAX_RATIO);
    }

    #[test]
    fn test_deg_to_trig() {
        assert_eq!(deg_to_trig(0), 0);
        assert_eq!(deg_to_trig(90), TRIG_MAX_ANGLE / 4);
        assert_eq!(deg_to_trig(360), TRIG_MAX_ANGLE);
    }

    #[test]
    fn test_polar_offset_clockwise_from_twelve() {
        assert_eq!(polar_offset(0, 10), (0, -10)); // 12 o'clock
        assert_eq!(polar_offset(deg_to_trig(90), 10), (10, 0)); // 3 o'clock
        assert_eq!(polar_offset(deg_to_trig(180), 10), (0, 10)); // 6 o'clock
        assert_eq!(polar_offset(deg_to_trig(270), 10), (-10, 0)); // 9 o'clock
    }
}
