use std::fmt;
use std::str::FromStr;

use crate::generator::errors::GeneratorError;

/// A single drill: `dividend ÷ divisor` with an exact integer answer.
///
/// Ordering is by dividend first, then divisor, which gives generated sets a
/// stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Problem {
    pub dividend: i64,
    pub divisor: i64,
}

impl Problem {
    pub fn new(dividend: i64, divisor: i64) -> Self {
        Self { dividend, divisor }
    }

    /// Expected answer. Generated problems always divide exactly.
    pub fn quotient(&self) -> i64 {
        self.dividend / self.divisor
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ÷ {} =", self.dividend, self.divisor)
    }
}

/// The five exercise profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DivisionType {
    /// 2-digit dividend, divisor greater than its leading digit
    CatGreaterTwoDigit,
    /// 3-digit dividend, divisor greater than its leading digit
    CatGreaterThreeDigit,
    /// 2- or 3-digit dividend, divisor equal to its leading digit
    CatEqualsTwoOrThreeDigit,
    /// 2-digit dividend, divisor smaller than its leading digit
    CatSmallerTwoDigit,
    /// Dividend of any width in a caller window, no comparison
    AnyDigits,
}

impl DivisionType {
    pub const ALL: [DivisionType; 5] = [
        DivisionType::CatGreaterTwoDigit,
        DivisionType::CatGreaterThreeDigit,
        DivisionType::CatEqualsTwoOrThreeDigit,
        DivisionType::CatSmallerTwoDigit,
        DivisionType::AnyDigits,
    ];

    /// 1-based type number used on worksheets.
    pub fn number(&self) -> u8 {
        match self {
            DivisionType::CatGreaterTwoDigit => 1,
            DivisionType::CatGreaterThreeDigit => 2,
            DivisionType::CatEqualsTwoOrThreeDigit => 3,
            DivisionType::CatSmallerTwoDigit => 4,
            DivisionType::AnyDigits => 5,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DivisionType::CatGreaterTwoDigit => "TYPE1_CAT_GT_MICE1_2D",
            DivisionType::CatGreaterThreeDigit => "TYPE2_CAT_GT_MICE1_3D",
            DivisionType::CatEqualsTwoOrThreeDigit => "TYPE3_CAT_EQ_MICE1_2OR3D",
            DivisionType::CatSmallerTwoDigit => "TYPE4_CAT_LT_MICE1_2D",
            DivisionType::AnyDigits => "TYPE5_ANY_DIGITS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DivisionType::CatGreaterTwoDigit => {
                "2 digits / 1 digit (cat > first digit of mice)"
            }
            DivisionType::CatGreaterThreeDigit => {
                "3 digits / 1 digit (cat > first digit of mice)"
            }
            DivisionType::CatEqualsTwoOrThreeDigit => {
                "2 or 3 digits / 1 digit (cat = first digit of mice)"
            }
            DivisionType::CatSmallerTwoDigit => {
                "2 digits / 1 digit (cat < first digit of mice)"
            }
            DivisionType::AnyDigits => "Any number of digits / 1 digit (no restriction)",
        }
    }

    /// Whether problems of this type are checked against the dividend's
    /// leading digit.
    pub fn compares_leading_digit(&self) -> bool {
        !matches!(self, DivisionType::AnyDigits)
    }
}

impl fmt::Display for DivisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DivisionType {
    type Err = GeneratorError;

    /// Accepts `type1`..`type5`, bare numbers `1`..`5` and the formula codes,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DivisionType::ALL
            .into_iter()
            .find(|kind| {
                let number = kind.number().to_string();
                wanted == number
                    || wanted.eq_ignore_ascii_case(&format!("type{}", number))
                    || wanted.eq_ignore_ascii_case(kind.code())
            })
            .ok_or_else(|| GeneratorError::UnknownDivisionType(s.to_string()))
    }
}

/// Parameters of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub kind: DivisionType,
    pub count: usize,
    /// Dividend digit window for [`DivisionType::AnyDigits`]; ignored by the
    /// other types. `None` means the default window.
    pub dividend_digits: Option<(u32, u32)>,
}

impl GenerationRequest {
    pub fn new(kind: DivisionType, count: usize) -> Self {
        Self {
            kind,
            count,
            dividend_digits: None,
        }
    }

    pub fn with_dividend_digits(mut self, min: u32, max: u32) -> Self {
        self.dividend_digits = Some((min, max));
        self
    }
}
