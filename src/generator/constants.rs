/// Sampling attempts allowed per requested problem before giving up.
pub const ATTEMPTS_PER_PROBLEM: usize = 1000;

pub const DEFAULT_MIN_DIVIDEND_DIGITS: u32 = 2;
pub const DEFAULT_MAX_DIVIDEND_DIGITS: u32 = 5;

/// A one-digit divisor against a one-digit dividend is not a soroban drill.
pub const MIN_DIVIDEND_DIGITS: u32 = 2;
