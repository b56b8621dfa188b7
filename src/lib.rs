/*!
Parse ISO 8601 period strings into structured, typed periods.

This crate converts strings like `P1Y2M3W4DT5H6M7.008S` into a [`Period`]: a
record of up to eight discrete fields (years, months, weeks, days, hours,
minutes, seconds and milliseconds). Which fields a period may carry is
decided by a [`PeriodType`] given at parse time. A string that uses a field
outside of the requested type is rejected instead of silently dropped or
folded into another field.

Values are stored exactly as written. This crate does no calendar
arithmetic and no normalization: `PT90M` is 90 minutes.

# Example

```
use isoperiod::{ErrorReason, FieldType, Period, PeriodType};

// Parse against the standard type, which supports all eight fields.
let period: Period = "P1Y2M3W4DT5H6M7.008S".parse()?;
assert_eq!(period.years(), 1);
assert_eq!(period.minutes(), 6);
assert_eq!(period.millis(), 8);

// Parse against a type without months or weeks.
let ty = PeriodType::year_day_time();
let period = Period::parse(ty, "P2Y3DT5H6M7.008S")?;
assert_eq!(period.get(FieldType::Days), Some(3));
assert_eq!(period.get(FieldType::Weeks), None);

// Using a field outside of the type is an error, even when it is zero.
let err = Period::parse(ty, "P0W").unwrap_err();
assert!(err.is_invalid_format());
assert_eq!(err.reason(), Some(ErrorReason::UnsupportedField));
assert_eq!(err.offset(), Some(2));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, [`Error`] implements
`std::error::Error`. When disabled, this crate only requires `alloc`.
* **logging** - When enabled, the `log` crate is used to emit messages about
periods accepted (at `TRACE` level) and rejected (at `DEBUG` level).
* **serde** - When enabled, [`Period`] implements `serde::Deserialize` by
parsing an ISO 8601 period string with [`PeriodType::standard`], and
[`FieldType`] implements it by parsing a field name.
* **perf-inline** (enabled by default) - When enabled, the scanner's hot
paths are aggressively inlined. Disabling it may reduce code size at the
cost of some parsing speed.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// The error type allocates. Nothing else does.
extern crate alloc;

pub use crate::{
    error::{Error, ErrorReason},
    field::FieldType,
    fmt::iso8601::PeriodParser,
    period::Period,
    period_type::PeriodType,
};

#[macro_use]
mod logging;

mod error;
mod field;
pub mod fmt;
mod period;
mod period_type;
mod util;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_smoke() {
        let _ = env_logger::try_init();
        let ty = PeriodType::standard();
        assert!(Period::parse(ty, "P1Y2M3W4DT5H6M7.008S").is_ok());
        assert!(Period::parse(ty, "P1Y2S").is_err());
    }
}
