//! Numeric helpers shared by the protection calculations.

/// Line-to-phase ratio of a balanced three-phase system.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Rounds `value` to two decimal places.
///
/// Rounding is decided on the exact binary value, with exact ties going
/// away from zero. `1.005` is stored as `1.00499…` and rounds down to
/// `1.0`; `0.125` is an exact tie and rounds up to `0.13`.
///
/// # Examples
///
/// ```
/// use grid_shield::numeric::round2;
///
/// assert_eq!(round2(6.275_546), 6.28);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(1.005), 1.0);
/// ```
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // A tie at the second decimal needs an odd multiple of 1/8.
    let is_tie = (value * 8.0).fract() == 0.0 && (value * 4.0).fract() != 0.0;
    if is_tie {
        return (value * 100.0).round() / 100.0;
    }

    format!("{value:.2}").parse().unwrap_or(value)
}

/// Returns `true` when `value` lies in the closed interval `[min, max]`.
///
/// NaN is never inside a range.
pub fn within(value: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&value)
}
