use alloc::boxed::Box;

use crate::{error, util::escape};

pub(crate) mod iso8601;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    IntoFull { unparsed: Box<[u8]> },
}

impl Error {
    pub(crate) fn into_full_error(unparsed: &[u8]) -> Error {
        Error::IntoFull { unparsed: unparsed.into() }
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
        error::ErrorKind::Fmt(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            IntoFull { ref unparsed } => write!(
                f,
                "parsed period, but unparsed input {unparsed:?} \
                 remains (expected no unparsed input)",
                unparsed = escape::Bytes(unparsed),
            ),
        }
    }
}
