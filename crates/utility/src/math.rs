/// Rounds `value` to `precision` decimal places, with halves rounded away from
/// zero (`2.345` becomes `2.35`, `-2.345` becomes `-2.35`). A negative
/// precision rounds to tens, hundreds and so on.
///
/// Precisions beyond what an `f64` can represent return `value` unchanged, or
/// a signed zero if the scale underflows.
pub fn round_to_precision(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    if scale == 0.0 {
        return 0.0f64.copysign(value);
    }
    let scaled = value * scale;
    if !scale.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// The smaller of both values. Returns `a` if both are equal.
pub fn min_int(a: i64, b: i64) -> i64 {
    if a <= b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_precision(2.345, 2), 2.35);
        assert_eq!(round_to_precision(-2.345, 2), -2.35);
        assert_eq!(round_to_precision(0.5, 0), 1.0);
        assert_eq!(round_to_precision(-0.5, 0), -1.0);
        assert_eq!(round_to_precision(2.5, 0), 3.0);
    }

    #[test]
    fn rounds_down_below_half() {
        assert_eq!(round_to_precision(2.344, 2), 2.34);
        assert_eq!(round_to_precision(54.32331234, 4), 54.3233);
        assert_eq!(round_to_precision(7.0, 3), 7.0);
    }

    #[test]
    fn negative_precision_rounds_to_powers_of_ten() {
        assert_eq!(round_to_precision(1234.0, -2), 1200.0);
        assert_eq!(round_to_precision(1250.0, -2), 1300.0);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let value = 1e300;
        assert_eq!(round_to_precision(value, 0), value);
    }

    #[test]
    fn extreme_precisions_stay_finite() {
        assert_eq!(round_to_precision(54.3, 307), 54.3);
        assert!(round_to_precision(1.5, 307).is_finite());
        assert!((round_to_precision(1.5, 307) - 1.5).abs() < 1e-12);
        assert_eq!(round_to_precision(1.5, 400), 1.5);
        assert_eq!(round_to_precision(0.0, 400), 0.0);
        assert_eq!(round_to_precision(-2.345, 400), -2.345);
        assert_eq!(round_to_precision(54.3, -400), 0.0);
        assert!(round_to_precision(-54.3, -400).is_sign_negative());
    }

    #[test]
    fn min_int_returns_smaller_value() {
        assert_eq!(min_int(3, 5), 3);
        assert_eq!(min_int(5, 3), 3);
        assert_eq!(min_int(4, 4), 4);
        assert_eq!(min_int(-7, 2), -7);
    }
}
