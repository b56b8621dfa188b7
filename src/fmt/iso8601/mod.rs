/*!
Parsing of ISO 8601 periods with respect to a [`PeriodType`].

An ISO 8601 period (often called a "duration") looks like
`P1Y2M3W4DT5H6M7.008S`. It is made up of a `P` designator, followed by
zero or more date units, optionally followed by a `T` designator and one or
more time units. Each unit is a signed decimal integer followed by a single
letter designator.

# Grammar

The grammar accepted by [`PeriodParser`] is as follows:

```text
Period :::
  PeriodDesignator DateUnits? (TimeDesignator TimeUnits)?

DateUnits :::
  (Value DateUnitDesignator)+

TimeUnits :::
  (Value TimeUnitDesignator)+
  (Value TimeUnitDesignator)* Value SecondsFraction SecondsDesignator

Value :::
  -? DecimalDigit+

SecondsFraction :::
  DecimalSeparator DecimalDigit+

PeriodDesignator ::: one of
  P p

TimeDesignator ::: one of
  T t

DateUnitDesignator ::: one of
  Y y M m W w D d

TimeUnitDesignator ::: one of
  H h M m S s

SecondsDesignator ::: one of
  S s

DecimalSeparator ::: one of
  . ,
```

Beyond the grammar, the following rules are enforced:

* Each unit may appear at most once, and units must be written from
largest to smallest.
* There must be at least one unit after `P`. If `T` is present, then there
must be at least one time unit after it.
* Every unit must be supported by the period type given. This is true even
when the unit's value is zero.
* A fractional value is only permitted on seconds, and only when the period
type supports milliseconds.
* Every value must fit into a signed 32-bit integer.

# Interpretation

The `M` designator means months before `T` and minutes after it.

A fractional seconds value is truncated (not rounded) to whole
milliseconds, so `PT1.9999S` is one second and 999 milliseconds. Any number
of fractional digits is accepted. A `-` sign on seconds applies to the
fraction as well: `PT-1.5S` is negative one second and negative 500
milliseconds, while `PT-0.5S` is zero seconds and negative 500
milliseconds.

# Example

```
use isoperiod::{fmt::iso8601::PeriodParser, PeriodType};

static PARSER: PeriodParser = PeriodParser::new();

let period = PARSER.parse_period(PeriodType::standard(), "P1Y2M3W4DT5H6M7.008S")?;
assert_eq!(period.years(), 1);
assert_eq!(period.months(), 2);
assert_eq!(period.weeks(), 3);
assert_eq!(period.days(), 4);
assert_eq!(period.hours(), 5);
assert_eq!(period.minutes(), 6);
assert_eq!(period.seconds(), 7);
assert_eq!(period.millis(), 8);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{
    error::{fmt::iso8601::Error as E, Error, ErrorContext},
    fmt::Parsed,
    period::Period,
    period_type::PeriodType,
};

use self::parser::Scanner;

mod parser;

/// A parser for ISO 8601 periods.
///
/// A parser holds no state between calls and is cheap to construct. Since
/// [`PeriodParser::new`] is `const`, it can be used to build a parser in a
/// `static`.
///
/// Every call is given the [`PeriodType`] to parse against. The period
/// returned always has exactly that type.
///
/// # Example
///
/// Parsing against a period type without weeks rejects a week designator:
///
/// ```
/// use isoperiod::{fmt::iso8601::PeriodParser, ErrorReason, PeriodType};
///
/// static PARSER: PeriodParser = PeriodParser::new();
///
/// let ty = PeriodType::year_day_time();
/// let period = PARSER.parse_period(ty, "P2Y4DT5M")?;
/// assert_eq!(period.period_type(), ty);
/// assert_eq!((period.years(), period.days(), period.minutes()), (2, 4, 5));
///
/// let err = PARSER.parse_period(ty, "P1W").unwrap_err();
/// assert_eq!(err.reason(), Some(ErrorReason::UnsupportedField));
/// assert_eq!(
///     err.to_string(),
///     "failed to parse \"P1W\" as an ISO 8601 period (at byte offset 2): \
///      found value for unit week, but it is not supported by period type \
///      YearDayTime",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PeriodParser {
    _priv: (),
}

impl PeriodParser {
    /// Create a new ISO 8601 period parser.
    pub const fn new() -> PeriodParser {
        PeriodParser { _priv: () }
    }

    /// Parse an ISO 8601 period string into a [`Period`] of type `ty`.
    ///
    /// The entire input must be a period. Use
    /// [`PeriodParser::parse_period_prefix`] to parse a period at the start
    /// of a larger string.
    ///
    /// # Errors
    ///
    /// This returns an error when the input is not a valid ISO 8601 period
    /// for `ty`. The error reports the byte offset at which the problem was
    /// detected via [`Error::offset`](crate::Error::offset).
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{fmt::iso8601::PeriodParser, PeriodType};
    ///
    /// static PARSER: PeriodParser = PeriodParser::new();
    ///
    /// let period = PARSER.parse_period(PeriodType::standard(), "pt-1.5s")?;
    /// assert_eq!(period.seconds(), -1);
    /// assert_eq!(period.millis(), -500);
    ///
    /// assert!(PARSER.parse_period(PeriodType::standard(), "P1D ").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_period<I: AsRef<[u8]>>(
        &self,
        ty: PeriodType,
        input: I,
    ) -> Result<Period, Error> {
        #[inline(never)]
        fn imp(ty: PeriodType, input: &[u8]) -> Result<Period, Error> {
            let parsed = Scanner::new(ty, input).parse()?;
            let offset = input.len() - parsed.input.len();
            parsed.into_full().with_context(|| E::failed(input, offset))
        }
        imp(ty, input.as_ref())
    }

    /// Parse an ISO 8601 period from the beginning of `input`.
    ///
    /// Parsing stops at the first byte that cannot continue the period,
    /// e.g., whitespace or punctuation. The remaining input is returned
    /// along with the period.
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{fmt::iso8601::PeriodParser, PeriodType};
    ///
    /// static PARSER: PeriodParser = PeriodParser::new();
    ///
    /// let parsed = PARSER.parse_period_prefix(
    ///     PeriodType::day_time(),
    ///     b"P1DT2H, every day",
    /// )?;
    /// assert_eq!(parsed.value.days(), 1);
    /// assert_eq!(parsed.value.hours(), 2);
    /// assert_eq!(parsed.input, b", every day");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_period_prefix<'i>(
        &self,
        ty: PeriodType,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Period>, Error> {
        Scanner::new(ty, input).parse()
    }
}
