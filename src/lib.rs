//! Soroban drills - A library for generating constrained division exercises
//!
//! Each exercise divides a multi-digit dividend ("mice") by a single-digit
//! divisor ("cat") with an exact answer. The five exercise types constrain the
//! dividend's width and how the divisor compares to its leading digit.

pub mod digits;
pub mod generator;
pub mod worksheet;

// Re-export the main public API
pub use digits::{DigitError, digit_count, leading_digit};
pub use generator::{DivisionType, GenerationRequest, GeneratorError, Problem, ProblemGenerator};
pub use worksheet::{Worksheet, WorksheetError, WorksheetSection};

/// Generate the problems for a single request
///
/// This is a convenience function that creates a generator, seeded when a
/// seed is given, and runs the request through it.
///
/// # Arguments
///
/// * `request` - The division type, count and optional dividend window
/// * `seed` - Seed for reproducible output, or `None` for system entropy
///
/// # Returns
///
/// Up to `request.count` unique problems in ascending order. Fewer are
/// returned, with a logged warning, when the type runs out of distinct
/// problems within its attempt budget.
///
/// # Errors
///
/// This function will return an error if the dividend window of a
/// [`DivisionType::AnyDigits`] request is inverted or too wide.
///
/// # Examples
///
/// ```
/// use soroban_drills::{DivisionType, GenerationRequest, generate, leading_digit};
///
/// let request = GenerationRequest::new(DivisionType::CatGreaterTwoDigit, 5);
/// let problems = generate(&request, Some(42)).unwrap_or_default();
/// for problem in &problems {
///     assert_eq!(problem.dividend % problem.divisor, 0);
///     assert!(leading_digit(problem.dividend).is_ok_and(|d| d < problem.divisor));
/// }
/// ```
pub fn generate(
    request: &GenerationRequest,
    seed: Option<u64>,
) -> Result<Vec<Problem>, GeneratorError> {
    let mut generator = match seed {
        Some(seed) => ProblemGenerator::with_seed(seed),
        None => ProblemGenerator::new(),
    };
    generator.generate(request)
}
