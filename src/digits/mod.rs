//! Digit inspection helpers shared by the generators

mod errors;
mod inspect;
mod window;

pub use errors::DigitError;
pub use inspect::{digit_count, leading_digit};
pub use window::{MAX_SUPPORTED_DIGITS, digit_window};

#[cfg(test)]
mod tests;
