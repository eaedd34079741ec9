use crate::digits::{DigitError, MAX_SUPPORTED_DIGITS, digit_count, digit_window, leading_digit};

#[test]
fn test_leading_digit() {
    assert_eq!(leading_digit(345), Ok(3));
    assert_eq!(leading_digit(7), Ok(7));
    assert_eq!(leading_digit(10), Ok(1));
    assert_eq!(leading_digit(99_999), Ok(9));
    assert_eq!(leading_digit(i64::MAX), Ok(9));
}

#[test]
fn test_leading_digit_rejects_non_positive() {
    assert_eq!(leading_digit(0), Err(DigitError::NonPositive(0)));
    assert_eq!(leading_digit(-42), Err(DigitError::NonPositive(-42)));
    assert!(leading_digit(i64::MIN).is_err());
}

#[test]
fn test_digit_count() {
    assert_eq!(digit_count(345), 3);
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(99), 2);
    assert_eq!(digit_count(100), 3);
    assert_eq!(digit_count(i64::MAX), 19);
}

#[test]
fn test_digit_count_negative_uses_magnitude() {
    assert_eq!(digit_count(-345), 3);
    assert_eq!(digit_count(-1), 1);
    assert_eq!(digit_count(i64::MIN), 19);
}

#[test]
fn test_digit_window() {
    assert_eq!(digit_window(1), Ok(1..=9));
    assert_eq!(digit_window(2), Ok(10..=99));
    assert_eq!(digit_window(5), Ok(10_000..=99_999));

    let widest = digit_window(MAX_SUPPORTED_DIGITS);
    assert!(widest.is_ok());
    if let Ok(range) = widest {
        assert_eq!(digit_count(*range.start()), MAX_SUPPORTED_DIGITS);
        assert_eq!(digit_count(*range.end()), MAX_SUPPORTED_DIGITS);
    }
}

#[test]
fn test_digit_window_unsupported() {
    assert_eq!(digit_window(0), Err(DigitError::UnsupportedDigitCount(0)));
    assert_eq!(
        digit_window(MAX_SUPPORTED_DIGITS + 1),
        Err(DigitError::UnsupportedDigitCount(MAX_SUPPORTED_DIGITS + 1))
    );
}
