use alloc::boxed::Box;

use crate::{
    error::{self, ErrorReason},
    util::escape,
    FieldType, PeriodType,
};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DateDesignatorInTime { byte: u8 },
    Duplicate { field: FieldType },
    EmptyTimeSection,
    ExpectedDesignatorFoundByte { byte: u8 },
    ExpectedDesignatorFoundEndOfInput,
    ExpectedPeriodDesignatorFoundByte { byte: u8 },
    ExpectedPeriodDesignatorFoundEndOfInput,
    Failed { input: Box<[u8]>, offset: usize },
    FailedFraction,
    FailedValue,
    FractionOnNonSeconds { field: FieldType },
    FractionWithoutMillis { ty: PeriodType },
    MissingValue { byte: u8 },
    NoFields,
    OutOfOrder { field: FieldType, after: FieldType },
    RepeatedTimeDesignator,
    TimeDesignatorInDate { byte: u8 },
    UnknownDesignator { byte: u8 },
    UnsupportedField { field: FieldType, ty: PeriodType },
}

impl Error {
    pub(crate) fn failed(input: &[u8], offset: usize) -> Error {
        Error::Failed { input: input.into(), offset }
    }

    pub(crate) fn reason(&self) -> Option<ErrorReason> {
        use self::Error::*;

        let reason = match *self {
            ExpectedPeriodDesignatorFoundByte { .. }
            | ExpectedPeriodDesignatorFoundEndOfInput => {
                ErrorReason::MissingPeriodDesignator
            }
            ExpectedDesignatorFoundByte { .. }
            | ExpectedDesignatorFoundEndOfInput
            | UnknownDesignator { .. } => ErrorReason::UnknownDesignator,
            DateDesignatorInTime { .. }
            | TimeDesignatorInDate { .. }
            | RepeatedTimeDesignator
            | OutOfOrder { .. } => ErrorReason::MisplacedDesignator,
            Duplicate { .. } => ErrorReason::DuplicateDesignator,
            UnsupportedField { .. } => ErrorReason::UnsupportedField,
            FractionOnNonSeconds { .. } | FractionWithoutMillis { .. } => {
                ErrorReason::UnsupportedFraction
            }
            MissingValue { .. } => ErrorReason::InvalidNumber,
            NoFields => ErrorReason::NoFields,
            EmptyTimeSection => ErrorReason::EmptyTimeSection,
            // These only ever wrap a more specific cause.
            Failed { .. } | FailedFraction | FailedValue => return None,
        };
        Some(reason)
    }

    pub(crate) fn offset(&self) -> Option<usize> {
        match *self {
            Error::Failed { offset, .. } => Some(offset),
            _ => None,
        }
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::FmtIso8601(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            DateDesignatorInTime { byte } => write!(
                f,
                "found date designator `{byte}` after the time \
                 designator `T`, but date units must come before it",
                byte = escape::Byte(byte),
            ),
            Duplicate { field } => write!(
                f,
                "found a second value for unit {unit}, \
                 but each unit may only be written once",
                unit = field.singular(),
            ),
            EmptyTimeSection => f.write_str(
                "found a time designator (`T`) in an ISO 8601 period \
                 string, but did not find any time units after it",
            ),
            ExpectedDesignatorFoundByte { byte } => write!(
                f,
                "expected to find a unit designator after value, \
                 but found `{byte}` instead",
                byte = escape::Byte(byte),
            ),
            ExpectedDesignatorFoundEndOfInput => f.write_str(
                "expected to find a unit designator after value, \
                 but found end of input",
            ),
            ExpectedPeriodDesignatorFoundByte { byte } => write!(
                f,
                "expected to find period beginning with `P`, \
                 but found `{byte}` instead",
                byte = escape::Byte(byte),
            ),
            ExpectedPeriodDesignatorFoundEndOfInput => f.write_str(
                "expected to find period beginning with `P`, \
                 but found end of input",
            ),
            Failed { ref input, offset } => write!(
                f,
                "failed to parse {input:?} as an ISO 8601 period \
                 (at byte offset {offset})",
                input = escape::Bytes(input),
            ),
            FailedFraction => {
                f.write_str("failed to parse fractional seconds value")
            }
            FailedValue => f.write_str("failed to parse unit value"),
            FractionOnNonSeconds { field } => write!(
                f,
                "found fractional value for unit {unit}, \
                 but only seconds may have a fractional part",
                unit = field.singular(),
            ),
            FractionWithoutMillis { ty } => write!(
                f,
                "found fractional seconds, but period type {ty} \
                 does not support milliseconds",
            ),
            MissingValue { byte } => write!(
                f,
                "found unit designator `{byte}` without a value before it",
                byte = escape::Byte(byte),
            ),
            NoFields => f.write_str(
                "found period designator (`P`), \
                 but did not find any units after it",
            ),
            OutOfOrder { field, after } => write!(
                f,
                "found value with unit {field} after unit {after}, \
                 but units must be written from largest to smallest",
                field = field.singular(),
                after = after.singular(),
            ),
            RepeatedTimeDesignator => f.write_str(
                "found a second time designator (`T`), \
                 but it may only appear once",
            ),
            TimeDesignatorInDate { byte } => write!(
                f,
                "found time designator `{byte}` before the time \
                 designator `T`, but time units must come after it",
                byte = escape::Byte(byte),
            ),
            UnknownDesignator { byte } => write!(
                f,
                "found unrecognized designator `{byte}` \
                 (expected one of `Y`, `M`, `W`, `D`, `T`, `H` or `S`)",
                byte = escape::Byte(byte),
            ),
            UnsupportedField { field, ty } => write!(
                f,
                "found value for unit {unit}, \
                 but it is not supported by period type {ty}",
                unit = field.singular(),
            ),
        }
    }
}
