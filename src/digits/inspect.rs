use log::{debug, warn};

use crate::digits::errors::DigitError;

/// Most significant decimal digit of a strictly positive integer.
///
/// # Errors
///
/// Returns an error if `n` is zero or negative.
pub fn leading_digit(n: i64) -> Result<i64, DigitError> {
    if n <= 0 {
        warn!("Leading digit requested for non-positive number {}", n);
        return Err(DigitError::NonPositive(n));
    }

    let mut rest = n;
    while rest >= 10 {
        rest /= 10;
    }
    Ok(rest)
}

/// Number of decimal digits in `n`. Zero counts as one digit and negative
/// numbers are measured by their magnitude.
pub fn digit_count(n: i64) -> u32 {
    if n == 0 {
        return 1;
    }
    if n < 0 {
        debug!("Counting digits of negative number {}", n);
    }
    n.unsigned_abs().ilog10() + 1
}
