use crate::{error, FieldType, PeriodType};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ConvertUnsupported { field: FieldType, value: i32, ty: PeriodType },
    SetUnsupported { field: FieldType, ty: PeriodType },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Period(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ConvertUnsupported { field, value, ty } => write!(
                f,
                "cannot convert period to type {ty} since it has \
                 non-zero {unit} ({value}) and {ty} does not support them",
                unit = field.plural(),
            ),
            SetUnsupported { field, ty } => write!(
                f,
                "cannot set {unit} on a period of type {ty}",
                unit = field.plural(),
            ),
        }
    }
}
