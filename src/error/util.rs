use crate::{error, util::escape::Byte};

#[derive(Clone, Debug)]
pub(crate) enum ParseIntError {
    NoDigitsFound,
    InvalidDigit(u8),
    TooBig,
}

impl From<ParseIntError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseIntError) -> error::Error {
        error::ErrorKind::ParseInt(err).into()
    }
}

impl error::IntoError for ParseIntError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseIntError::*;

        match *self {
            NoDigitsFound => f.write_str("invalid number, no digits found"),
            InvalidDigit(got) => {
                write!(f, "invalid digit, expected 0-9 but got {}", Byte(got))
            }
            TooBig => f.write_str(
                "number too big (or small) to fit into \
                 a signed 32-bit integer",
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum ParseFractionError {
    NoDigitsFound,
    InvalidDigit(u8),
}

impl From<ParseFractionError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseFractionError) -> error::Error {
        error::ErrorKind::ParseFraction(err).into()
    }
}

impl error::IntoError for ParseFractionError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for ParseFractionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseFractionError::*;

        match *self {
            NoDigitsFound => f.write_str(
                "found decimal separator after seconds value, \
                 but did not find any digits after it",
            ),
            InvalidDigit(got) => write!(
                f,
                "invalid fractional digit, expected 0-9 but got {}",
                Byte(got),
            ),
        }
    }
}
