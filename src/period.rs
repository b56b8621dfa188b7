use crate::{
    error::{period::Error as E, Error},
    field::FieldType,
    fmt::iso8601::PeriodParser,
    period_type::PeriodType,
};

/// The parser used by `Period`'s `FromStr` and `Deserialize` impls.
static DEFAULT_PERIOD_PARSER: PeriodParser = PeriodParser::new();

/// A period of time made up of discrete calendar and time fields.
///
/// A period has eight fields: years, months, weeks, days, hours, minutes,
/// seconds and milliseconds. Which of these are present is determined by the
/// period's [`PeriodType`]. A field that isn't supported by the type is not
/// merely zero, it is absent: [`Period::get`] returns `None` for it and
/// [`Period::fields`] skips it.
///
/// Every field is a signed 32-bit integer and is stored exactly as written.
/// No normalization occurs, so `PT90M` is 90 minutes, not 1 hour and 30
/// minutes. Signs may differ between fields.
///
/// # Parsing
///
/// A `Period` is usually created by parsing an ISO 8601 period string, either
/// with [`Period::parse`] (for a specific period type) or via its `FromStr`
/// impl (for [`PeriodType::standard`]):
///
/// ```
/// use isoperiod::{Period, PeriodType};
///
/// let period: Period = "P1Y2M3W4DT5H6M7.008S".parse()?;
/// assert_eq!(period.years(), 1);
/// assert_eq!(period.millis(), 8);
///
/// let period = Period::parse(PeriodType::time(), "PT36H")?;
/// assert_eq!(period.hours(), 36);
/// assert_eq!(period.get(isoperiod::FieldType::Days), None);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Equality
///
/// Two periods are equal when they have the same period type and the same
/// value in every field. In particular, periods of different types are never
/// equal, even if all of their values are zero.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Period {
    ty: PeriodType,
    /// Indexed by `FieldType`. Slots not supported by `ty` are always zero.
    values: [i32; 8],
}

impl Period {
    /// Creates a period of the given type with every field set to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{Period, PeriodType};
    ///
    /// let period = Period::new(PeriodType::day_time());
    /// assert!(period.is_zero());
    /// assert_eq!(period.fields().count(), 5);
    /// ```
    #[inline]
    pub fn new(ty: PeriodType) -> Period {
        Period { ty, values: [0; 8] }
    }

    /// Parses an ISO 8601 period string into a period of type `ty`.
    ///
    /// This is a convenience for [`PeriodParser::parse_period`].
    ///
    /// # Errors
    ///
    /// This returns an error when `input` isn't a valid ISO 8601 period or
    /// when it uses a field that `ty` doesn't support.
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{ErrorReason, Period, PeriodType};
    ///
    /// let period = Period::parse(PeriodType::year_day_time(), "P2Y3DT5H")?;
    /// assert_eq!((period.years(), period.days(), period.hours()), (2, 3, 5));
    ///
    /// let ty = PeriodType::year_day_time();
    /// let err = Period::parse(ty, "P1W").unwrap_err();
    /// assert_eq!(err.reason(), Some(ErrorReason::UnsupportedField));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(
        ty: PeriodType,
        input: I,
    ) -> Result<Period, Error> {
        DEFAULT_PERIOD_PARSER.parse_period(ty, input)
    }

    /// Builds a period from raw values.
    ///
    /// Callers must ensure every slot unsupported by `ty` is zero.
    pub(crate) fn from_parts(ty: PeriodType, values: [i32; 8]) -> Period {
        debug_assert!(FieldType::ALL
            .iter()
            .all(|&f| ty.is_supported(f) || values[f.index()] == 0));
        Period { ty, values }
    }

    /// Returns the type of this period.
    #[inline]
    pub fn period_type(&self) -> PeriodType {
        self.ty
    }

    /// Returns the value of the given field, or `None` if this period's type
    /// doesn't support it.
    #[inline]
    pub fn get(&self, field: FieldType) -> Option<i32> {
        if !self.ty.is_supported(field) {
            return None;
        }
        Some(self.values[field.index()])
    }

    /// Returns the number of years in this period, or zero if years are
    /// unsupported.
    #[inline]
    pub fn years(&self) -> i32 {
        self.values[FieldType::Years.index()]
    }

    /// Returns the number of months in this period, or zero if months are
    /// unsupported.
    #[inline]
    pub fn months(&self) -> i32 {
        self.values[FieldType::Months.index()]
    }

    /// Returns the number of weeks in this period, or zero if weeks are
    /// unsupported.
    #[inline]
    pub fn weeks(&self) -> i32 {
        self.values[FieldType::Weeks.index()]
    }

    /// Returns the number of days in this period, or zero if days are
    /// unsupported.
    #[inline]
    pub fn days(&self) -> i32 {
        self.values[FieldType::Days.index()]
    }

    /// Returns the number of hours in this period, or zero if hours are
    /// unsupported.
    #[inline]
    pub fn hours(&self) -> i32 {
        self.values[FieldType::Hours.index()]
    }

    /// Returns the number of minutes in this period, or zero if minutes are
    /// unsupported.
    #[inline]
    pub fn minutes(&self) -> i32 {
        self.values[FieldType::Minutes.index()]
    }

    /// Returns the number of seconds in this period, or zero if seconds are
    /// unsupported.
    #[inline]
    pub fn seconds(&self) -> i32 {
        self.values[FieldType::Seconds.index()]
    }

    /// Returns the number of milliseconds in this period, or zero if
    /// milliseconds are unsupported.
    #[inline]
    pub fn millis(&self) -> i32 {
        self.values[FieldType::Millis.index()]
    }

    /// Returns every supported field along with its value, in display order.
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{FieldType, Period, PeriodType};
    ///
    /// let period = Period::parse(PeriodType::day_time(), "P1DT2H")?;
    /// assert_eq!(period.fields().collect::<Vec<_>>(), vec![
    ///     (FieldType::Days, 1),
    ///     (FieldType::Hours, 2),
    ///     (FieldType::Minutes, 0),
    ///     (FieldType::Seconds, 0),
    ///     (FieldType::Millis, 0),
    /// ]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn fields(&self) -> impl Iterator<Item = (FieldType, i32)> + '_ {
        self.ty.fields().map(move |field| (field, self.values[field.index()]))
    }

    /// Returns true when every field in this period is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }

    /// Returns a copy of this period with the given field set to `value`.
    ///
    /// # Errors
    ///
    /// This returns an error when this period's type doesn't support
    /// `field`.
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{FieldType, Period, PeriodType};
    ///
    /// let period = Period::new(PeriodType::time())
    ///     .with_field(FieldType::Minutes, 30)?;
    /// assert_eq!(period.minutes(), 30);
    ///
    /// assert!(period.with_field(FieldType::Days, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_field(
        self,
        field: FieldType,
        value: i32,
    ) -> Result<Period, Error> {
        if !self.ty.is_supported(field) {
            return Err(Error::from(E::SetUnsupported { field, ty: self.ty }));
        }
        let mut values = self.values;
        values[field.index()] = value;
        Ok(Period { ty: self.ty, values })
    }

    /// Returns this period with its type changed to `ty`.
    ///
    /// Fields supported by both types keep their values. Fields only
    /// supported by `ty` are zero.
    ///
    /// # Errors
    ///
    /// This returns an error when this period has a non-zero value in a
    /// field that `ty` doesn't support. Values are never silently dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use isoperiod::{Period, PeriodType};
    ///
    /// let period = Period::parse(PeriodType::standard(), "P3DT4H")?;
    /// let converted = period.with_period_type(PeriodType::day_time())?;
    /// assert_eq!((converted.days(), converted.hours()), (3, 4));
    ///
    /// assert!(period.with_period_type(PeriodType::time()).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_period_type(self, ty: PeriodType) -> Result<Period, Error> {
        let unsupported = self
            .fields()
            .find(|&(field, value)| value != 0 && !ty.is_supported(field));
        if let Some((field, value)) = unsupported {
            let err = E::ConvertUnsupported { field, value, ty };
            return Err(Error::from(err));
        }
        Ok(Period::from_parts(ty, self.values))
    }
}

impl Default for Period {
    /// Returns a zero period of the standard type.
    fn default() -> Period {
        Period::new(PeriodType::standard())
    }
}

impl core::fmt::Debug for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Period {{ type: {}", self.ty)?;
        for (field, value) in self.fields() {
            write!(f, ", {}: {}", field.plural(), value)?;
        }
        f.write_str(" }")
    }
}

impl core::str::FromStr for Period {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Period, Error> {
        DEFAULT_PERIOD_PARSER.parse_period(PeriodType::standard(), string)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Period {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Period, D::Error> {
        use serde::de;

        struct PeriodVisitor;

        impl<'de> de::Visitor<'de> for PeriodVisitor {
            type Value = Period;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 period string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Period, E> {
                DEFAULT_PERIOD_PARSER
                    .parse_period(PeriodType::standard(), value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Period, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(PeriodVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Period {
    fn arbitrary(g: &mut quickcheck::Gen) -> Period {
        let ty = PeriodType::arbitrary(g);
        let mut values = [0; 8];
        for field in ty.fields() {
            values[field.index()] = i32::arbitrary(g);
        }
        Period::from_parts(ty, values)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::ErrorReason;

    use super::*;

    #[test]
    fn unsupported_fields_are_absent() {
        let period = Period::parse(PeriodType::year_day_time(), "P1Y2D")
            .unwrap();
        assert_eq!(period.get(FieldType::Years), Some(1));
        assert_eq!(period.get(FieldType::Months), None);
        assert_eq!(period.get(FieldType::Weeks), None);
        assert_eq!(period.get(FieldType::Millis), Some(0));
        assert_eq!(period.months(), 0);
        let fields: Vec<FieldType> = period.fields().map(|(f, _)| f).collect();
        assert!(!fields.contains(&FieldType::Months));
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn from_str_uses_standard() {
        let period: Period = "P1Y2M3W4DT5H6M7.008S".parse().unwrap();
        assert_eq!(period.period_type(), PeriodType::standard());
        assert_eq!(
            period.fields().map(|(_, v)| v).collect::<Vec<_>>(),
            [1, 2, 3, 4, 5, 6, 7, 8],
        );

        let err = "P1Y junk".parse::<Period>().unwrap_err();
        assert_eq!(err.reason(), Some(ErrorReason::UnparsedInput));
        assert_eq!(err.offset(), Some(3));
    }

    #[test]
    fn zero_periods_of_different_types() {
        let a = Period::parse(PeriodType::standard(), "P0D").unwrap();
        let b = Period::parse(PeriodType::day_time(), "P0D").unwrap();
        assert!(a.is_zero());
        assert!(b.is_zero());
        assert_ne!(a, b);
        assert_eq!(a, Period::default());
    }

    #[test]
    fn with_field() {
        let period = Period::new(PeriodType::year_day_time())
            .with_field(FieldType::Days, -3)
            .unwrap();
        assert_eq!(period.days(), -3);
        assert!(!period.is_zero());

        let err = period.with_field(FieldType::Weeks, 1).unwrap_err();
        assert!(!err.is_invalid_format());
        insta::assert_snapshot!(
            err,
            @"cannot set weeks on a period of type YearDayTime",
        );
    }

    #[test]
    fn with_period_type() {
        let period = Period::parse(PeriodType::standard(), "P1Y0MT5S")
            .unwrap();
        let converted =
            period.with_period_type(PeriodType::year_day_time()).unwrap();
        assert_eq!(converted.period_type(), PeriodType::year_day_time());
        assert_eq!(converted.years(), 1);
        assert_eq!(converted.seconds(), 5);

        let err = period.with_period_type(PeriodType::time()).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"cannot convert period to type Time since it has non-zero years (1) and Time does not support them",
        );
    }

    #[test]
    fn debug() {
        let period = Period::parse(PeriodType::time(), "PT1H2.5S").unwrap();
        insta::assert_debug_snapshot!(
            period,
            @"Period { type: Time, hours: 1, minutes: 0, seconds: 2, milliseconds: 500 }",
        );
        let ty =
            PeriodType::from_fields(&[FieldType::Weeks]).with(FieldType::Hours);
        insta::assert_debug_snapshot!(
            Period::new(ty),
            @"Period { type: [weeks, hours], weeks: 0, hours: 0 }",
        );
        assert_eq!(
            alloc::format!("{:?}", Period::new(PeriodType::millis())),
            "Period { type: Millis, milliseconds: 0 }",
        );
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Period>();
        assert_send_sync::<PeriodType>();
        assert_send_sync::<FieldType>();
        assert_send_sync::<PeriodParser>();
    }

    quickcheck::quickcheck! {
        fn prop_convert_to_self(period: Period) -> bool {
            period.with_period_type(period.period_type()).ok() == Some(period)
        }

        fn prop_convert_to_standard_and_back(period: Period) -> bool {
            let standard = period.with_period_type(PeriodType::standard());
            standard
                .and_then(|p| p.with_period_type(period.period_type()))
                .ok()
                == Some(period)
        }

        fn prop_with_field_respects_type(
            period: Period,
            field: FieldType,
            value: i32
        ) -> bool {
            match period.with_field(field, value) {
                Ok(updated) => {
                    period.period_type().is_supported(field)
                        && updated.get(field) == Some(value)
                        && updated.period_type() == period.period_type()
                }
                Err(err) => {
                    !period.period_type().is_supported(field)
                        && !err.is_invalid_format()
                }
            }
        }

        fn prop_unsupported_is_none(period: Period) -> bool {
            FieldType::ALL.iter().all(|&field| {
                period.get(field).is_some()
                    == period.period_type().is_supported(field)
            })
        }
    }
}
