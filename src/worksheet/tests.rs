use crate::digits::digit_count;
use crate::generator::{DivisionType, GenerationRequest, GeneratorError, Problem};
use crate::worksheet::{Worksheet, WorksheetError, WorksheetSection};

fn mixed_requests() -> Vec<GenerationRequest> {
    vec![
        GenerationRequest::new(DivisionType::CatGreaterTwoDigit, 6),
        GenerationRequest::new(DivisionType::CatEqualsTwoOrThreeDigit, 6),
        GenerationRequest::new(DivisionType::AnyDigits, 6).with_dividend_digits(4, 6),
    ]
}

#[test]
fn test_worksheet_sections_follow_requests() {
    let result = Worksheet::generate(&mixed_requests(), 11);
    assert!(result.is_ok());
    if let Ok(sheet) = result {
        assert_eq!(sheet.sections.len(), 3);
        assert_eq!(sheet.problem_count(), 18);
        assert!(sheet.sections.iter().all(|s| !s.is_short()));

        let kinds: Vec<_> = sheet.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DivisionType::CatGreaterTwoDigit,
                DivisionType::CatEqualsTwoOrThreeDigit,
                DivisionType::AnyDigits,
            ]
        );

        if let Some(section) = sheet.sections.get(2) {
            assert!(
                section
                    .problems
                    .iter()
                    .all(|p| (4..=6).contains(&digit_count(p.dividend)))
            );
        }
    }
}

#[test]
fn test_worksheet_is_reproducible() {
    let first = Worksheet::generate(&mixed_requests(), 99);
    let second = Worksheet::generate(&mixed_requests(), 99);
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn test_worksheet_reports_failing_section() {
    let requests = vec![
        GenerationRequest::new(DivisionType::CatSmallerTwoDigit, 3),
        GenerationRequest::new(DivisionType::AnyDigits, 3).with_dividend_digits(6, 3),
    ];
    assert_eq!(
        Worksheet::generate(&requests, 1),
        Err(WorksheetError::Section {
            index: 1,
            source: GeneratorError::InvalidDigitRange { min: 6, max: 3 },
        })
    );
}

#[test]
fn test_short_section() {
    let requests = vec![GenerationRequest::new(DivisionType::CatGreaterTwoDigit, 80)];
    let result = Worksheet::generate(&requests, 5);
    assert!(result.is_ok());
    if let Ok(sheet) = result {
        assert!(sheet.sections.iter().all(|s| s.is_short()));
        assert_eq!(sheet.problem_count(), 58);
    }
}

#[test]
fn test_worksheet_rendering() {
    let sheet = Worksheet {
        seed: 0,
        sections: vec![WorksheetSection {
            kind: DivisionType::CatSmallerTwoDigit,
            requested: 2,
            problems: vec![Problem::new(42, 2), Problem::new(96, 8)],
        }],
    };

    let text = sheet.to_string();
    assert!(text.starts_with("Section 1: Type 4: 2 digits / 1 digit (cat < first digit of mice)"));
    assert!(text.contains("  1. 42 ÷ 2 ="));
    assert!(text.contains("  2. 96 ÷ 8 ="));

    let key = sheet.answer_key();
    assert!(key.starts_with("Section 1 (TYPE4_CAT_LT_MICE1_2D)"));
    assert!(key.contains("  1. 42 ÷ 2 = 21"));
    assert!(key.contains("  2. 96 ÷ 8 = 12"));
}
