use isoperiod::{
    fmt::iso8601::PeriodParser, ErrorReason, FieldType, Period, PeriodType,
};

mod fail;

type Result = anyhow::Result<()>;

static PARSER: PeriodParser = PeriodParser::new();

/// Builds a period of type `ty` from eight values in display order.
///
/// Values for fields the type doesn't support must be zero.
fn period(ty: PeriodType, values: [i32; 8]) -> anyhow::Result<Period> {
    let mut period = Period::new(ty);
    for (field, value) in FieldType::ALL.into_iter().zip(values) {
        if value != 0 || ty.is_supported(field) {
            period = period.with_field(field, value)?;
        }
    }
    Ok(period)
}

fn standard(values: [i32; 8]) -> anyhow::Result<Period> {
    period(PeriodType::standard(), values)
}

fn parse_standard<I: AsRef<[u8]>>(
    input: I,
) -> std::result::Result<Period, isoperiod::Error> {
    PARSER.parse_period(PeriodType::standard(), input)
}

#[test]
fn standard_all_fields() -> Result {
    let _ = crate::Logger::init();

    let got = parse_standard("P1Y2M3W4DT5H6M7.008S")?;
    assert_eq!(got, standard([1, 2, 3, 4, 5, 6, 7, 8])?);
    Ok(())
}

#[test]
fn standard_explicit_zero_dates() -> Result {
    let got = parse_standard("P0Y0M0W0DT5H6M7.008S")?;
    assert_eq!(got, standard([0, 0, 0, 0, 5, 6, 7, 8])?);
    Ok(())
}

#[test]
fn standard_zero_days_with_time() -> Result {
    let got = parse_standard("P0DT5H6M7.008S")?;
    assert_eq!(got, standard([0, 0, 0, 0, 5, 6, 7, 8])?);
    Ok(())
}

#[test]
fn standard_skipped_dates() -> Result {
    let got = parse_standard("P2Y3DT5H6M7.008S")?;
    assert_eq!(got, standard([2, 0, 0, 3, 5, 6, 7, 8])?);

    let got = parse_standard("P2YT5H6M7.008S")?;
    assert_eq!(got, standard([2, 0, 0, 0, 5, 6, 7, 8])?);
    Ok(())
}

#[test]
fn standard_time_only() -> Result {
    let got = parse_standard("PT5H6M7.008S")?;
    assert_eq!(got, standard([0, 0, 0, 0, 5, 6, 7, 8])?);

    let got = parse_standard("PT5H6M7S")?;
    assert_eq!(got, standard([0, 0, 0, 0, 5, 6, 7, 0])?);
    Ok(())
}

#[test]
fn standard_date_only() -> Result {
    let got = parse_standard("P1Y2M3W4D")?;
    assert_eq!(got, standard([1, 2, 3, 4, 0, 0, 0, 0])?);
    Ok(())
}

#[test]
fn standard_zero() -> Result {
    let zero = standard([0; 8])?;
    for input in ["PT0S", "P0D", "P0Y"] {
        let got = parse_standard(input)?;
        assert_eq!(got, zero, "{input}");
        assert!(got.is_zero());
    }
    Ok(())
}

#[test]
fn year_day_time() -> Result {
    let ty = PeriodType::year_day_time();

    let got = PARSER.parse_period(ty, "P1Y4DT5H6M7.008S")?;
    assert_eq!(got, period(ty, [1, 0, 0, 4, 5, 6, 7, 8])?);
    assert_eq!(got.get(FieldType::Months), None);
    assert_eq!(got.get(FieldType::Weeks), None);

    let got = PARSER.parse_period(ty, "P0D")?;
    assert_eq!(got, period(ty, [0; 8])?);
    assert_ne!(got, standard([0; 8])?);

    let err = PARSER.parse_period(ty, "P1Y2M3W4D").unwrap_err();
    assert_eq!(err.reason(), Some(ErrorReason::UnsupportedField));
    assert_eq!(err.offset(), Some(4));
    Ok(())
}

#[test]
fn single_field_types() -> Result {
    let cases = [
        (PeriodType::years(), "P5Y", FieldType::Years),
        (PeriodType::months(), "P5M", FieldType::Months),
        (PeriodType::weeks(), "P5W", FieldType::Weeks),
        (PeriodType::days(), "P5D", FieldType::Days),
        (PeriodType::hours(), "PT5H", FieldType::Hours),
        (PeriodType::minutes(), "PT5M", FieldType::Minutes),
        (PeriodType::seconds(), "PT5S", FieldType::Seconds),
    ];
    for (ty, input, field) in cases {
        let got = PARSER.parse_period(ty, input)?;
        assert_eq!(got.fields().collect::<Vec<_>>(), [(field, 5)], "{input}");

        // Every other single field type rejects it.
        for (other, _, _) in cases {
            if other == ty {
                continue;
            }
            let err = PARSER.parse_period(other, input).unwrap_err();
            assert_eq!(
                err.reason(),
                Some(ErrorReason::UnsupportedField),
                "{input} with {other}",
            );
        }
    }

    // Milliseconds can only be written as a fraction of seconds, and
    // seconds themselves are required to do so.
    let err = PARSER.parse_period(PeriodType::millis(), "PT0.5S").unwrap_err();
    assert_eq!(err.reason(), Some(ErrorReason::UnsupportedField));
    let ty = PeriodType::seconds().with(FieldType::Millis);
    assert_eq!(PARSER.parse_period(ty, "PT0.5S")?.millis(), 500);
    Ok(())
}

#[test]
fn months_and_minutes() -> Result {
    let got = parse_standard("P1MT1M")?;
    assert_eq!(got, standard([0, 1, 0, 0, 0, 1, 0, 0])?);

    let got = PARSER.parse_period(PeriodType::time(), "PT1M")?;
    assert_eq!(got.minutes(), 1);

    let err = PARSER.parse_period(PeriodType::time(), "P1M").unwrap_err();
    assert_eq!(err.reason(), Some(ErrorReason::UnsupportedField));
    Ok(())
}

#[test]
fn lowercase() -> Result {
    let got = parse_standard("p1y2m3w4dt5h6m7,008s")?;
    assert_eq!(got, standard([1, 2, 3, 4, 5, 6, 7, 8])?);
    Ok(())
}

#[test]
fn negative_values() -> Result {
    let got = parse_standard("P-1Y2M-3DT-4H5M-6.7S")?;
    assert_eq!(got, standard([-1, 2, 0, -3, -4, 5, -6, -700])?);

    let got = parse_standard("PT-0.250S")?;
    assert_eq!(got, standard([0, 0, 0, 0, 0, 0, 0, -250])?);

    let got = parse_standard("PT-0S")?;
    assert!(got.is_zero());
    Ok(())
}

#[test]
fn prefix() -> Result {
    let parsed = PARSER.parse_period_prefix(
        PeriodType::standard(),
        b"P1DT12H/2024-06-01",
    )?;
    assert_eq!(parsed.value, standard([0, 0, 0, 1, 12, 0, 0, 0])?);
    assert_eq!(parsed.input, b"/2024-06-01");

    let err = parsed.into_full().unwrap_err();
    assert_eq!(err.reason(), Some(ErrorReason::UnparsedInput));
    Ok(())
}

#[test]
fn from_str_and_parse_agree() -> Result {
    for input in ["P1Y", "PT1.5S", "P1Y2M3W4DT5H6M7.008S", "pt0s"] {
        let a: Period = input.parse()?;
        let b = Period::parse(PeriodType::standard(), input)?;
        let c = parse_standard(input.as_bytes())?;
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
    Ok(())
}
