/*!
Parsing of textual period representations.

Currently the only supported format is the ISO 8601 period (or "duration")
format, e.g., `P1Y2M3W4DT5H6M7.008S`. See the [`iso8601`] module.

Formatting periods back into strings is not supported.
*/

use crate::{
    error::{fmt::Error as E, Error},
    util::escape,
};

pub mod iso8601;
mod util;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the remaining input that was not
/// consumed. This makes it possible to parse a period as a prefix of some
/// larger string without knowing ahead of time where it ends.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Parsed<'i, V> {
    /// The value parsed.
    pub value: V,
    /// The remaining unparsed input.
    pub input: &'i [u8],
}

impl<'i, V> Parsed<'i, V> {
    /// Ensures that the parsed value represents the entire input. This occurs
    /// precisely when the `input` on this parsed value is empty.
    ///
    /// This is useful when one expects a parsed value to consume the entire
    /// input, and to consider it an error if it doesn't.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub fn into_full(self) -> Result<V, Error> {
        if self.input.is_empty() {
            return Ok(self.value);
        }
        Err(Error::from(E::into_full_error(self.input)))
    }
}

impl<'i, V: core::fmt::Debug> core::fmt::Debug for Parsed<'i, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Parsed")
            .field("value", &self.value)
            .field("input", &escape::Bytes(self.input))
            .finish()
    }
}
