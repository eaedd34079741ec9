use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::digits::{digit_count, digit_window, leading_digit};
use crate::generator::constants::ATTEMPTS_PER_PROBLEM;
use crate::generator::errors::GeneratorError;
use crate::generator::profile::{Profile, Relation};
use crate::generator::types::Problem;

/// Quotients that keep `divisor * q` inside `window`, or `None` when the
/// window holds no multiple of `divisor`.
pub fn quotient_range(window: &RangeInclusive<i64>, divisor: i64) -> Option<RangeInclusive<i64>> {
    let min_quotient = (window.start() + divisor - 1) / divisor;
    let max_quotient = window.end() / divisor;

    if min_quotient > max_quotient {
        return None;
    }
    Some(min_quotient..=max_quotient)
}

/// Collect up to `count` distinct problems for `profile`, giving up after
/// `count * ATTEMPTS_PER_PROBLEM` attempts. A shortfall is logged, not
/// returned as an error.
pub fn collect_problems<R: Rng + ?Sized>(
    profile: &Profile,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Problem>, GeneratorError> {
    let budget = count.saturating_mul(ATTEMPTS_PER_PROBLEM);
    debug!(
        "Generating {} problems of {} with a budget of {} attempts",
        count, profile.kind, budget
    );

    let mut problems = BTreeSet::new();
    let mut attempts = 0;
    while problems.len() < count && attempts < budget {
        attempts += 1;
        if let Some(problem) = sample_once(profile, rng)? {
            problems.insert(problem);
        }
    }

    if problems.len() < count {
        warn!(
            "{}: generated only {} of {} requested problems after {} attempts",
            profile.kind,
            problems.len(),
            count,
            attempts
        );
    } else {
        info!(
            "{}: generated {} problems in {} attempts",
            profile.kind, count, attempts
        );
    }

    Ok(problems.into_iter().collect())
}

/// One sampling attempt. `Ok(None)` means the attempt was abandoned.
fn sample_once<R: Rng + ?Sized>(
    profile: &Profile,
    rng: &mut R,
) -> Result<Option<Problem>, GeneratorError> {
    let divisor = rng.gen_range(profile.divisors.clone());
    let digits = profile.digits.pick(rng);
    let window = digit_window(digits)?;

    let Some(quotients) = quotient_range(&window, divisor) else {
        return Ok(None);
    };

    let quotient = match profile.relation {
        Some(relation) => {
            let accepted = matching_quotients(relation, divisor, quotients)?;
            match accepted.choose(rng) {
                Some(&quotient) => quotient,
                None => return Ok(None),
            }
        }
        None => rng.gen_range(quotients),
    };

    let dividend = divisor * quotient;
    if digit_count(dividend) != digits {
        debug!(
            "Discarding {} / {}: expected {} digits",
            dividend, divisor, digits
        );
        return Ok(None);
    }

    Ok(Some(Problem::new(dividend, divisor)))
}

/// Every quotient whose dividend satisfies `relation` against `divisor`.
fn matching_quotients(
    relation: Relation,
    divisor: i64,
    quotients: RangeInclusive<i64>,
) -> Result<Vec<i64>, GeneratorError> {
    let mut accepted = Vec::new();
    for quotient in quotients {
        let leading = leading_digit(divisor * quotient)?;
        if relation.holds(divisor, leading) {
            accepted.push(quotient);
        }
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotient_range_two_digits() {
        assert_eq!(quotient_range(&(10..=99), 7), Some(2..=14));
        assert_eq!(quotient_range(&(10..=99), 1), Some(10..=99));
        assert_eq!(quotient_range(&(10..=99), 9), Some(2..=11));
    }

    #[test]
    fn test_quotient_range_empty() {
        assert_eq!(quotient_range(&(10..=12), 9), None);
    }

    #[test]
    fn test_matching_quotients() {
        let result = matching_quotients(Relation::DivisorGreater, 3, 4..=33);
        assert_eq!(result, Ok(vec![4, 5, 6, 7, 8, 9]));

        let result = matching_quotients(Relation::DivisorEqual, 9, 2..=11);
        assert_eq!(result, Ok(vec![10, 11]));

        let result = matching_quotients(Relation::DivisorLess, 8, 2..=12);
        assert_eq!(result, Ok(vec![12]));
    }
}
