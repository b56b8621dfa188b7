use crate::error::util::{ParseFractionError, ParseIntError};

/// Splits `input` into its longest prefix of ASCII digits and the rest.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn digits(input: &[u8]) -> (&[u8], &[u8]) {
    let len = input.iter().take_while(|b| b.is_ascii_digit()).count();
    input.split_at(len)
}

/// Parses `bytes` as a decimal integer, negating it when `negative` is set.
///
/// Every byte must be an ASCII digit and there must be at least one. The
/// value is accumulated with checked arithmetic in the direction of its
/// sign, so that `i32::MIN` is representable and anything beyond `i32`'s
/// range is reported as `TooBig` instead of wrapping.
pub(crate) fn i32(bytes: &[u8], negative: bool) -> Result<i32, ParseIntError> {
    if bytes.is_empty() {
        return Err(ParseIntError::NoDigitsFound);
    }
    let mut n: i32 = 0;
    for &byte in bytes {
        let digit = match byte.checked_sub(b'0') {
            Some(digit) if digit <= 9 => i32::from(digit),
            _ => return Err(ParseIntError::InvalidDigit(byte)),
        };
        n = n.checked_mul(10).ok_or(ParseIntError::TooBig)?;
        let next =
            if negative { n.checked_sub(digit) } else { n.checked_add(digit) };
        n = next.ok_or(ParseIntError::TooBig)?;
    }
    Ok(n)
}

/// Parses `bytes` as the digits after a decimal point and returns the
/// fraction scaled to `precision` decimal places.
///
/// Digits beyond `precision` are discarded (truncation, not rounding), but
/// they must still be ASCII digits. Fewer digits than `precision` are scaled
/// up, e.g., `5` at a precision of `3` is `500`.
///
/// `precision` must be at most `9`.
pub(crate) fn fraction(
    bytes: &[u8],
    precision: usize,
) -> Result<i32, ParseFractionError> {
    debug_assert!(precision <= 9);
    if bytes.is_empty() {
        return Err(ParseFractionError::NoDigitsFound);
    }
    let mut n: i32 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let digit = match byte.checked_sub(b'0') {
            Some(digit) if digit <= 9 => i32::from(digit),
            _ => return Err(ParseFractionError::InvalidDigit(byte)),
        };
        if i < precision {
            // Can't overflow since at most 9 digits are accumulated.
            n = n * 10 + digit;
        }
    }
    for _ in bytes.len()..precision {
        n *= 10;
    }
    Ok(n)
}
