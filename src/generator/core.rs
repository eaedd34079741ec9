use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::digits::digit_window;
use crate::generator::constants::{
    DEFAULT_MAX_DIVIDEND_DIGITS, DEFAULT_MIN_DIVIDEND_DIGITS, MIN_DIVIDEND_DIGITS,
};
use crate::generator::errors::GeneratorError;
use crate::generator::profile::Profile;
use crate::generator::sampler::collect_problems;
use crate::generator::types::{DivisionType, GenerationRequest, Problem};

/// Generates sets of unique division drills.
///
/// Each generator owns its random source, so independent generators never
/// share state.
pub struct ProblemGenerator {
    rng: SmallRng,
}

impl ProblemGenerator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a generator whose output is fully determined by `seed`
    pub fn with_seed(seed: u64) -> Self {
        debug!("Seeding problem generator with {}", seed);
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Dispatch a request to the matching entry point
    ///
    /// # Errors
    ///
    /// Returns an error if the request's dividend window is invalid.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<Vec<Problem>, GeneratorError> {
        match request.kind {
            DivisionType::CatGreaterTwoDigit => self.cat_greater_two_digit(request.count),
            DivisionType::CatGreaterThreeDigit => self.cat_greater_three_digit(request.count),
            DivisionType::CatEqualsTwoOrThreeDigit => {
                self.cat_equals_two_or_three_digit(request.count)
            }
            DivisionType::CatSmallerTwoDigit => self.cat_smaller_two_digit(request.count),
            DivisionType::AnyDigits => {
                let (min, max) = request
                    .dividend_digits
                    .unwrap_or((DEFAULT_MIN_DIVIDEND_DIGITS, DEFAULT_MAX_DIVIDEND_DIGITS));
                self.any_digits(request.count, min, max)
            }
        }
    }

    /// Type 1: 2-digit dividend, divisor in 2..=9 greater than its leading digit
    pub fn cat_greater_two_digit(&mut self, count: usize) -> Result<Vec<Problem>, GeneratorError> {
        collect_problems(&Profile::cat_greater_two_digit(), count, &mut self.rng)
    }

    /// Type 2: 3-digit dividend, divisor in 2..=9 greater than its leading digit
    pub fn cat_greater_three_digit(
        &mut self,
        count: usize,
    ) -> Result<Vec<Problem>, GeneratorError> {
        collect_problems(&Profile::cat_greater_three_digit(), count, &mut self.rng)
    }

    /// Type 3: 2- or 3-digit dividend whose leading digit equals the divisor
    pub fn cat_equals_two_or_three_digit(
        &mut self,
        count: usize,
    ) -> Result<Vec<Problem>, GeneratorError> {
        collect_problems(&Profile::cat_equals_two_or_three_digit(), count, &mut self.rng)
    }

    /// Type 4: 2-digit dividend, divisor in 1..=8 smaller than its leading digit
    pub fn cat_smaller_two_digit(&mut self, count: usize) -> Result<Vec<Problem>, GeneratorError> {
        collect_problems(&Profile::cat_smaller_two_digit(), count, &mut self.rng)
    }

    /// Type 5: dividend of `min_digits..=max_digits` digits, any divisor in 1..=9
    ///
    /// A minimum below two digits is raised to two with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the (clamped) minimum exceeds the maximum, or if
    /// the maximum is wider than the supported dividend width.
    pub fn any_digits(
        &mut self,
        count: usize,
        min_digits: u32,
        max_digits: u32,
    ) -> Result<Vec<Problem>, GeneratorError> {
        let min_digits = if min_digits < MIN_DIVIDEND_DIGITS {
            warn!(
                "{}: minimum dividend digits {} is below {}, adjusting to {}",
                DivisionType::AnyDigits,
                min_digits,
                MIN_DIVIDEND_DIGITS,
                MIN_DIVIDEND_DIGITS
            );
            MIN_DIVIDEND_DIGITS
        } else {
            min_digits
        };

        if min_digits > max_digits {
            return Err(GeneratorError::InvalidDigitRange {
                min: min_digits,
                max: max_digits,
            });
        }
        digit_window(max_digits)?;

        let profile = Profile::any_digits(min_digits, max_digits);
        collect_problems(&profile, count, &mut self.rng)
    }

    /// Type 5 over the default 2..=5 digit window
    pub fn any_digits_default(&mut self, count: usize) -> Result<Vec<Problem>, GeneratorError> {
        self.any_digits(count, DEFAULT_MIN_DIVIDEND_DIGITS, DEFAULT_MAX_DIVIDEND_DIGITS)
    }
}

impl Default for ProblemGenerator {
    fn default() -> Self {
        Self::new()
    }
}
