use crate::{
    error::{fmt::iso8601::Error as E, Error, ErrorContext},
    fmt::Parsed,
    util::parse,
};

/// The number of fractional second digits that are kept.
const MILLIS_PRECISION: usize = 3;

/// Parses an optional fractional seconds value from the start of `input`.
///
/// If `input` does not begin with a `.` (or a `,`), then this returns `None`
/// and no input is consumed. Otherwise, at least one ASCII digit must follow
/// the separator. All digits are consumed, but only the first three are
/// kept: the result is the fraction in whole milliseconds, truncated toward
/// zero. The sign is not applied here.
pub(crate) fn parse_millis_fraction<'i>(
    input: &'i [u8],
) -> Result<Parsed<'i, Option<i32>>, Error> {
    // SecondsFraction :::
    //   DecimalSeparator DecimalDigit+
    //
    // DecimalSeparator ::: one of
    //   . ,
    let Some((&first, rest)) = input.split_first() else {
        return Ok(Parsed { value: None, input });
    };
    if first != b'.' && first != b',' {
        return Ok(Parsed { value: None, input });
    }
    let (digits, rest) = parse::digits(rest);
    let millis =
        parse::fraction(digits, MILLIS_PRECISION).context(E::FailedFraction)?;
    Ok(Parsed { value: Some(millis), input: rest })
}
