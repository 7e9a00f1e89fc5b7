//! Fixed-point display helpers for dose and risk figures.
//!
//! Values are rounded half away from zero at two decimals. Rounding works on
//! the value's nine-decimal representation, so binary representation error
//! (`12.775` stored as `12.77499999…`) does not flip a tie downwards.

/// Digits kept before the final half-up step.
const GUARD_DECIMALS: usize = 9;

/// Above this magnitude the guard digits no longer fit comfortably.
const MAX_FIXED_MAGNITUDE: f64 = 1e15;

/// Formats `value` with exactly two decimals, rounding ties away from zero.
///
/// ```
/// use radrisk_core::display::format_2dp;
/// assert_eq!(format_2dp(0.625), "0.63");
/// assert_eq!(format_2dp(12.774999999999999), "12.78");
/// ```
pub fn format_2dp(value: f64) -> String {
    if !value.is_finite() || value.abs() >= MAX_FIXED_MAGNITUDE {
        return format!("{value:.2}");
    }

    let guarded = format!("{:.*}", GUARD_DECIMALS, value.abs());
    let Ok(scaled) = guarded.replace('.', "").parse::<u128>() else {
        return format!("{value:.2}");
    };

    // 10^(9 - 2): collapse the guard digits into hundredths.
    let divisor = 10u128.pow((GUARD_DECIMALS - 2) as u32);
    let hundredths = (scaled + divisor / 2) / divisor;

    let sign = if value < 0.0 && hundredths != 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Formats a flux reading in scientific notation with two decimals and a
/// signed, at least two-digit exponent (`1.23e+02`, `4.50e-07`).
pub fn format_sci(value: f64) -> String {
    let raw = format!("{value:.2e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}
