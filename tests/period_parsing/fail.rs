use isoperiod::{ErrorReason, PeriodType};

use super::PARSER;

/// Parses `input` with the standard type and returns the error's reason and
/// offset. Panics if parsing succeeds.
fn fail(input: &str) -> (ErrorReason, usize) {
    let err = PARSER
        .parse_period(PeriodType::standard(), input)
        .expect_err(input);
    assert!(err.is_invalid_format(), "{input}: {err}");
    (err.reason().unwrap(), err.offset().unwrap())
}

#[test]
fn time_designator_before_t() {
    let _ = crate::Logger::init();
    assert_eq!(fail("P1Y2S"), (ErrorReason::MisplacedDesignator, 4));
}

#[test]
fn designator_without_value() {
    assert_eq!(fail("PS"), (ErrorReason::InvalidNumber, 1));
    assert_eq!(fail("PTS"), (ErrorReason::InvalidNumber, 2));
    assert_eq!(fail("P1YM"), (ErrorReason::InvalidNumber, 3));
}

#[test]
fn unknown_designator() {
    assert_eq!(fail("PXS"), (ErrorReason::UnknownDesignator, 1));
    assert_eq!(fail("P1Q"), (ErrorReason::UnknownDesignator, 2));
    assert_eq!(fail("PT1D"), (ErrorReason::MisplacedDesignator, 3));
}

#[test]
fn structural() {
    assert_eq!(fail(""), (ErrorReason::MissingPeriodDesignator, 0));
    assert_eq!(fail(" P1D"), (ErrorReason::MissingPeriodDesignator, 0));
    assert_eq!(fail("P"), (ErrorReason::NoFields, 1));
    assert_eq!(fail("PT"), (ErrorReason::EmptyTimeSection, 2));
    assert_eq!(fail("P1DT"), (ErrorReason::EmptyTimeSection, 4));
    assert_eq!(fail("P1DT1HT"), (ErrorReason::MisplacedDesignator, 6));
    assert_eq!(fail("P1W1Y"), (ErrorReason::MisplacedDesignator, 4));
    assert_eq!(fail("P1D1D"), (ErrorReason::DuplicateDesignator, 4));
    assert_eq!(fail("P1DT1S "), (ErrorReason::UnparsedInput, 6));
}

#[test]
fn numbers() {
    assert_eq!(fail("P2147483648D"), (ErrorReason::NumberTooBig, 1));
    assert_eq!(fail("P1YT-2147483649H"), (ErrorReason::NumberTooBig, 4));
    assert_eq!(fail("P-D"), (ErrorReason::InvalidNumber, 1));
    assert_eq!(fail("PT1,S"), (ErrorReason::InvalidNumber, 3));
    assert_eq!(fail("PT1.5H"), (ErrorReason::UnsupportedFraction, 5));
}
