//! Small numeric helpers shared by the channel mutators and scheme generators.

/// Wraps `value` into `[0, scale]`.
///
/// Values above `scale` land where removing `scale` until they fit would
/// put them, negative values where adding `scale` until non-negative would.
/// Both ends of the range are kept as-is, so `rotate_value(360.0, 360.0)` is
/// `360.0` while `rotate_value(0.0, 360.0)` is `0.0`.
///
/// The wrap is a single exact remainder, so it terminates for any input. A
/// step-by-step subtraction rounds at every step and may differ from this
/// result in the last ulp when `value` is several multiples of `scale` away.
///
/// Non-finite values and non-positive scales are returned unchanged.
///
/// # Example
///
/// ```
/// use dye_core::math::rotate_value;
///
/// assert_eq!(rotate_value(390.0, 360.0), 30.0);
/// assert_eq!(rotate_value(-30.0, 360.0), 330.0);
/// assert_eq!(rotate_value(720.0, 360.0), 360.0);
/// ```
#[inline]
pub fn rotate_value(value: f64, scale: f64) -> f64 {
    if !value.is_finite() || !(scale > 0.0) {
        return value;
    }

    if value > scale {
        let rem = value % scale;
        if rem == 0.0 { scale } else { rem }
    } else if value < 0.0 {
        // rem lies in (-scale, 0]
        let rem = value % scale;
        if rem == 0.0 { 0.0 } else { rem + scale }
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_in_range_untouched() {
        assert_eq!(rotate_value(0.0, 360.0), 0.0);
        assert_eq!(rotate_value(180.0, 360.0), 180.0);
        assert_eq!(rotate_value(360.0, 360.0), 360.0);
    }

    #[test]
    fn test_wraps_above_scale() {
        assert_eq!(rotate_value(361.0, 360.0), 1.0);
        assert_eq!(rotate_value(1080.0, 360.0), 360.0);
        assert_abs_diff_eq!(rotate_value(400.1, 360.0), 40.1, epsilon = 1e-9);
    }

    #[test]
    fn test_wraps_below_zero() {
        assert_eq!(rotate_value(-60.0, 360.0), 300.0);
        assert_eq!(rotate_value(-360.0, 360.0), 0.0);
        assert_eq!(rotate_value(-400.0, 360.0), 320.0);
    }

    #[test]
    fn test_far_values_stay_in_range() {
        for value in [1e6 + 0.25, -1e6 - 0.25, 1e15, -1e15] {
            let wrapped = rotate_value(value, 360.0);
            assert!((0.0..=360.0).contains(&wrapped), "{value} -> {wrapped}");
        }
        assert_abs_diff_eq!(rotate_value(1e6 + 0.25, 360.0), 280.25, epsilon = 1e-6);
        assert_abs_diff_eq!(rotate_value(-1e6 - 0.25, 360.0), 79.75, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(rotate_value(f64::NAN, 360.0).is_nan());
        assert_eq!(rotate_value(f64::INFINITY, 360.0), f64::INFINITY);
        assert_eq!(rotate_value(42.0, 0.0), 42.0);
    }
}
