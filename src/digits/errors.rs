use thiserror::Error;

/// Errors that can occur while inspecting digits
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigitError {
    #[error("Number must be positive, got {0}")]
    NonPositive(i64),
    #[error("Unsupported digit count: {0}")]
    UnsupportedDigitCount(u32),
}
