use thiserror::Error;

use crate::digits::DigitError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Minimum dividend digits ({min}) cannot exceed maximum ({max})")]
    InvalidDigitRange { min: u32, max: u32 },
    #[error("Unknown division type: {0}")]
    UnknownDivisionType(String),
    #[error("Digit error: {0}")]
    Digits(#[from] DigitError),
}
