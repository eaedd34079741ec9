use std::ops::RangeInclusive;

use log::warn;

use crate::digits::errors::DigitError;

/// Widest dividend whose whole value window fits in an `i64`.
pub const MAX_SUPPORTED_DIGITS: u32 = 18;

/// # Errors
///
/// Returns an error if `digits` is zero or wider than [`MAX_SUPPORTED_DIGITS`].
pub fn digit_window(digits: u32) -> Result<RangeInclusive<i64>, DigitError> {
    if digits == 0 || digits > MAX_SUPPORTED_DIGITS {
        warn!("No value window for {} digits", digits);
        return Err(DigitError::UnsupportedDigitCount(digits));
    }

    let low = 10_i64.pow(digits - 1);
    let high = 10_i64.pow(digits) - 1;
    Ok(low..=high)
}
