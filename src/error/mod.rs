use alloc::sync::Arc;

pub(crate) mod fmt;
pub(crate) mod period;
pub(crate) mod util;

/// An error that can occur in this crate.
///
/// Nearly every error is the result of parsing a string that isn't a valid
/// ISO 8601 period for the period type requested. The only other source of
/// errors is setting a field on a [`Period`](crate::Period) whose type
/// doesn't support it.
///
/// # Introspection
///
/// Every parse failure reports `true` for [`Error::is_invalid_format`].
/// The specific rule that was violated is available via
/// [`Error::reason`], and the byte offset into the input at which the
/// violation was detected via [`Error::offset`].
///
/// The `Display` impl renders a human readable message that includes the
/// input, the offset and the underlying reason.
///
/// # Design
///
/// This crate uses a single error type for all operations. It is cheap to
/// clone (an `Arc` internally) and is one word in size.
///
/// # Example
///
/// ```
/// use isoperiod::{ErrorReason, PeriodType};
///
/// let err = isoperiod::Period::parse(PeriodType::standard(), "P1Y2S")
///     .unwrap_err();
/// assert!(err.is_invalid_format());
/// assert_eq!(err.reason(), Some(ErrorReason::MisplacedDesignator));
/// assert_eq!(err.offset(), Some(4));
/// ```
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

/// The specific rule an ISO 8601 period string violated.
///
/// This is returned by [`Error::reason`]. All of these are reported as
/// "invalid format" errors.
///
/// This enum may grow new variants in semver compatible releases.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorReason {
    /// The input did not begin with the `P` period designator.
    MissingPeriodDesignator,
    /// A designator letter was not recognized, or no designator followed a
    /// value.
    UnknownDesignator,
    /// A designator appeared somewhere the grammar doesn't permit it. For
    /// example, a date designator after `T`, a second `T` or units written
    /// smallest to largest.
    MisplacedDesignator,
    /// The same designator occurred more than once.
    DuplicateDesignator,
    /// A designator names a field that isn't in the requested period type.
    UnsupportedField,
    /// A fractional value was given, but it cannot be represented. Either
    /// the period type has no milliseconds field or the fraction was not
    /// attached to seconds.
    UnsupportedFraction,
    /// A numeric value was missing or malformed.
    InvalidNumber,
    /// A numeric value did not fit into a signed 32-bit integer.
    NumberTooBig,
    /// No fields were found after the `P` designator.
    NoFields,
    /// The `T` designator was found, but no time fields followed it.
    EmptyTimeSection,
    /// A valid period was parsed, but unparsed input remains.
    UnparsedInput,
}

impl Error {
    /// Returns true when this error was caused by a string that isn't a
    /// valid ISO 8601 period for the requested period type.
    pub fn is_invalid_format(&self) -> bool {
        self.reason().is_some()
    }

    /// Returns the specific grammar or field rule that was violated, if this
    /// error came from parsing.
    pub fn reason(&self) -> Option<ErrorReason> {
        use self::{
            fmt::Error as FmtError,
            util::ParseIntError,
            ErrorKind::*,
        };

        match *self.root().kind() {
            FmtIso8601(ref err) => err.reason(),
            Fmt(FmtError::IntoFull { .. }) => {
                Some(ErrorReason::UnparsedInput)
            }
            ParseInt(ParseIntError::TooBig) => Some(ErrorReason::NumberTooBig),
            ParseInt(_) | ParseFraction(_) => Some(ErrorReason::InvalidNumber),
            Period(_) => None,
        }
    }

    /// Returns the byte offset into the parsed input at which the failure
    /// was detected.
    ///
    /// This is `None` for errors that didn't come from parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{ErrorReason, Period, PeriodType};
    ///
    /// let err = Period::parse(PeriodType::standard(), "P1Y1Y").unwrap_err();
    /// assert_eq!(err.reason(), Some(ErrorReason::DuplicateDesignator));
    /// assert_eq!(err.offset(), Some(4));
    /// ```
    pub fn offset(&self) -> Option<usize> {
        self.chain().find_map(|err| match *err.kind() {
            ErrorKind::FmtIso8601(ref err) => err.offset(),
            _ => None,
        })
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, mut consequent: Error) -> Error {
        // An error causal chain is a linked list, not a tree, so a
        // consequent can't already have a cause.
        let inner = Arc::get_mut(&mut consequent.inner)
            .filter(|inner| inner.cause.is_none());
        match inner {
            Some(inner) => {
                inner.cause = Some(self);
                consequent
            }
            None => self,
        }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let err = next?;
            next = err.inner.cause.as_ref();
            Some(err)
        })
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Fmt(self::fmt::Error),
    FmtIso8601(self::fmt::iso8601::Error),
    ParseInt(self::util::ParseIntError),
    ParseFraction(self::util::ParseFractionError),
    Period(self::period::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Fmt(ref err) => err.fmt(f),
            FmtIso8601(ref err) => err.fmt(f),
            ParseInt(ref err) => err.fmt(f),
            ParseFraction(ref err) => err.fmt(f),
            Period(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists so that `Error::context` can accept any of this crate's
/// internal error enums without public `From` impls for them.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// Use this when the consequent allocates, so that the happy path
    /// doesn't pay for it.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
