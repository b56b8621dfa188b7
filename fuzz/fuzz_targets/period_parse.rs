#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use isoperiod::{fmt::iso8601::PeriodParser, FieldType, PeriodType};

mod shim;

/// Picks a period type from a bitset over `FieldType::ALL`.
fn period_type(bits: u8) -> PeriodType {
    let fields: Vec<FieldType> = FieldType::ALL
        .into_iter()
        .filter(|&field| bits & (1 << field as u8) != 0)
        .collect();
    PeriodType::from_fields(&fields)
}

fn do_fuzz(data: &[u8]) {
    const PARSER: PeriodParser = PeriodParser::new();

    let Some((&bits, input)) = data.split_first() else { return };
    let ty = period_type(bits);

    let prefix = PARSER.parse_period_prefix(ty, input);
    let full = PARSER.parse_period(ty, input);
    match (prefix, full) {
        (Ok(parsed), Ok(period)) => {
            assert!(parsed.input.is_empty());
            assert_eq!(parsed.value, period);
            assert_eq!(period.period_type(), ty);
            for field in FieldType::ALL {
                assert_eq!(
                    period.get(field).is_some(),
                    ty.is_supported(field),
                    "unsupported field {field:?} is observable in {period:?}",
                );
            }
        }
        (Ok(parsed), Err(err)) => {
            assert!(!parsed.input.is_empty(), "{err}");
            assert_eq!(
                err.offset(),
                Some(input.len() - parsed.input.len()),
                "{err}",
            );
        }
        (Err(_), Ok(period)) => {
            panic!("prefix parse failed, but full parse gave {period:?}");
        }
        (Err(err1), Err(err2)) => {
            assert_eq!(err1.reason(), err2.reason());
            assert_eq!(err1.offset(), err2.offset());
            let offset = err2.offset().expect("parse errors have an offset");
            assert!(offset <= input.len(), "{err2}");
        }
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
