use isoperiod::{FieldType, Period, PeriodType};

#[derive(Debug, serde::Deserialize)]
struct Config {
    interval: Period,
    unit: FieldType,
}

#[test]
fn deserialize_period() -> anyhow::Result<()> {
    let _ = crate::Logger::init();

    let json = r#"{"interval": "P1DT12H", "unit": "hours"}"#;
    let config: Config = serde_json::from_str(json)?;
    assert_eq!(config.interval.period_type(), PeriodType::standard());
    assert_eq!(config.interval.days(), 1);
    assert_eq!(config.interval.hours(), 12);
    assert_eq!(config.unit, FieldType::Hours);

    let config: Config =
        serde_json::from_str(r#"{"interval": "PT0.5S", "unit": "second"}"#)?;
    assert_eq!(config.interval.millis(), 500);
    assert_eq!(config.unit, FieldType::Seconds);
    Ok(())
}

#[test]
fn deserialize_invalid() {
    let json = r#"{"interval": "P1Y2S", "unit": "hours"}"#;
    let err = serde_json::from_str::<Config>(json).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.starts_with(
            "failed to parse \"P1Y2S\" as an ISO 8601 period \
             (at byte offset 4): found time designator `S` before the time \
             designator `T`, but time units must come after it",
        ),
        "{msg}",
    );

    let json = r#"{"interval": "P1Y", "unit": "fortnights"}"#;
    assert!(serde_json::from_str::<Config>(json).is_err());
}
