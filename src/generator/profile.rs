use std::ops::RangeInclusive;

use rand::Rng;

use crate::generator::types::DivisionType;

/// How the divisor must compare to the dividend's leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    DivisorGreater,
    DivisorEqual,
    DivisorLess,
}

impl Relation {
    pub fn holds(&self, divisor: i64, leading: i64) -> bool {
        match self {
            Relation::DivisorGreater => divisor > leading,
            Relation::DivisorEqual => divisor == leading,
            Relation::DivisorLess => divisor < leading,
        }
    }
}

/// Which dividend width an attempt targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitTarget {
    Fixed(u32),
    Either(u32, u32),
    Between(u32, u32),
}

impl DigitTarget {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match self {
            DigitTarget::Fixed(digits) => *digits,
            DigitTarget::Either(first, second) => {
                if rng.gen_bool(0.5) {
                    *first
                } else {
                    *second
                }
            }
            DigitTarget::Between(min, max) => rng.gen_range(*min..=*max),
        }
    }
}

/// Sampling parameters of one division type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub kind: DivisionType,
    pub divisors: RangeInclusive<i64>,
    pub digits: DigitTarget,
    pub relation: Option<Relation>,
}

// Divisor 1 can never exceed a leading digit and divisor 9 can never be
// exceeded by one, so those are left out where the relation is strict.
impl Profile {
    pub fn cat_greater_two_digit() -> Self {
        Profile {
            kind: DivisionType::CatGreaterTwoDigit,
            divisors: 2..=9,
            digits: DigitTarget::Fixed(2),
            relation: Some(Relation::DivisorGreater),
        }
    }

    pub fn cat_greater_three_digit() -> Self {
        Profile {
            kind: DivisionType::CatGreaterThreeDigit,
            divisors: 2..=9,
            digits: DigitTarget::Fixed(3),
            relation: Some(Relation::DivisorGreater),
        }
    }

    pub fn cat_equals_two_or_three_digit() -> Self {
        Profile {
            kind: DivisionType::CatEqualsTwoOrThreeDigit,
            divisors: 1..=9,
            digits: DigitTarget::Either(2, 3),
            relation: Some(Relation::DivisorEqual),
        }
    }

    pub fn cat_smaller_two_digit() -> Self {
        Profile {
            kind: DivisionType::CatSmallerTwoDigit,
            divisors: 1..=8,
            digits: DigitTarget::Fixed(2),
            relation: Some(Relation::DivisorLess),
        }
    }

    /// Unrestricted profile over an already validated digit window.
    pub fn any_digits(min_digits: u32, max_digits: u32) -> Self {
        Profile {
            kind: DivisionType::AnyDigits,
            divisors: 1..=9,
            digits: DigitTarget::Between(min_digits, max_digits),
            relation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn test_either_target_picks_both_widths() {
        let mut rng = SmallRng::seed_from_u64(17);
        let target = DigitTarget::Either(2, 3);
        let picks: Vec<u32> = (0..200).map(|_| target.pick(&mut rng)).collect();
        assert!(picks.iter().all(|d| *d == 2 || *d == 3));
        assert!(picks.contains(&2));
        assert!(picks.contains(&3));
    }

    #[test]
    fn test_comparison_profiles() {
        let profiles = [
            Profile::cat_greater_two_digit(),
            Profile::cat_greater_three_digit(),
            Profile::cat_equals_two_or_three_digit(),
            Profile::cat_smaller_two_digit(),
        ];
        let kinds: Vec<_> = profiles.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, DivisionType::ALL[..4].to_vec());
        assert!(profiles.iter().all(|p| p.relation.is_some()));

        assert_eq!(Profile::cat_greater_two_digit().divisors, 2..=9);
        assert_eq!(Profile::cat_smaller_two_digit().divisors, 1..=8);
        assert_eq!(
            Profile::cat_equals_two_or_three_digit().digits,
            DigitTarget::Either(2, 3)
        );
        assert_eq!(Profile::any_digits(2, 4).relation, None);
    }
}
