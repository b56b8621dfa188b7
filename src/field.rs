/// A single field of a [`Period`](crate::Period).
///
/// There are exactly eight fields. Their declaration order is also the fixed
/// display order used everywhere in this crate: from years down to
/// milliseconds. A [`PeriodType`](crate::PeriodType) is a subset of these
/// fields.
///
/// # Example
///
/// ```
/// use isoperiod::FieldType;
///
/// assert_eq!(FieldType::Weeks.plural(), "weeks");
/// assert_eq!(FieldType::Minutes.designator(), Some(b'M'));
/// assert_eq!(FieldType::Millis.designator(), None);
/// assert!(FieldType::Days > FieldType::Years);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum FieldType {
    /// Calendar years, written with the `Y` designator.
    Years = 0,
    /// Calendar months, written with the `M` designator before `T`.
    Months = 1,
    /// Weeks, written with the `W` designator.
    Weeks = 2,
    /// Days, written with the `D` designator.
    Days = 3,
    /// Hours, written with the `H` designator after `T`.
    Hours = 4,
    /// Minutes, written with the `M` designator after `T`.
    Minutes = 5,
    /// Seconds, written with the `S` designator after `T`.
    Seconds = 6,
    /// Milliseconds.
    ///
    /// This field has no designator of its own. It can only be populated
    /// by a fractional seconds value, e.g., the `008` in `PT7.008S`.
    Millis = 7,
}

impl FieldType {
    /// All fields in display order.
    pub const ALL: [FieldType; 8] = [
        FieldType::Years,
        FieldType::Months,
        FieldType::Weeks,
        FieldType::Days,
        FieldType::Hours,
        FieldType::Minutes,
        FieldType::Seconds,
        FieldType::Millis,
    ];

    /// Returns the singular human readable name of this field.
    pub fn singular(self) -> &'static str {
        match self {
            FieldType::Years => "year",
            FieldType::Months => "month",
            FieldType::Weeks => "week",
            FieldType::Days => "day",
            FieldType::Hours => "hour",
            FieldType::Minutes => "minute",
            FieldType::Seconds => "second",
            FieldType::Millis => "millisecond",
        }
    }

    /// Returns the plural human readable name of this field.
    pub fn plural(self) -> &'static str {
        match self {
            FieldType::Years => "years",
            FieldType::Months => "months",
            FieldType::Weeks => "weeks",
            FieldType::Days => "days",
            FieldType::Hours => "hours",
            FieldType::Minutes => "minutes",
            FieldType::Seconds => "seconds",
            FieldType::Millis => "milliseconds",
        }
    }

    /// Returns the upper case ISO 8601 designator for this field.
    ///
    /// Note that `M` is returned for both months and minutes. Which one is
    /// meant depends on whether it appears before or after the `T` time
    /// designator.
    ///
    /// Milliseconds have no designator and `None` is returned.
    pub fn designator(self) -> Option<u8> {
        match self {
            FieldType::Years => Some(b'Y'),
            FieldType::Months => Some(b'M'),
            FieldType::Weeks => Some(b'W'),
            FieldType::Days => Some(b'D'),
            FieldType::Hours => Some(b'H'),
            FieldType::Minutes => Some(b'M'),
            FieldType::Seconds => Some(b'S'),
            FieldType::Millis => None,
        }
    }

    /// Returns true if this field is written before the `T` designator.
    pub fn is_date(self) -> bool {
        self <= FieldType::Days
    }

    /// Returns the index of this field in display order.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Returns the bit for this field in a `PeriodType` bitset.
    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub(crate) fn from_usize(n: usize) -> Option<FieldType> {
        FieldType::ALL.get(n).copied()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldType {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<FieldType, D::Error> {
        use serde::de;

        struct FieldTypeVisitor;

        impl<'de> de::Visitor<'de> for FieldTypeVisitor {
            type Value = FieldType;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a period field name, like `years` or `hours`")
            }

            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<FieldType, E> {
                FieldType::ALL
                    .into_iter()
                    .find(|field| {
                        field.plural() == value || field.singular() == value
                    })
                    .ok_or_else(|| {
                        E::invalid_value(de::Unexpected::Str(value), &self)
                    })
            }
        }

        deserializer.deserialize_str(FieldTypeVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for FieldType {
    fn arbitrary(g: &mut quickcheck::Gen) -> FieldType {
        FieldType::from_usize(usize::arbitrary(g) % 8).unwrap()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            (*self as usize)
                .shrink()
                .map(|n| FieldType::from_usize(n % 8).unwrap()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order() {
        for (i, field) in FieldType::ALL.into_iter().enumerate() {
            assert_eq!(i, field.index());
            assert_eq!(Some(field), FieldType::from_usize(i));
        }
        assert_eq!(None, FieldType::from_usize(8));
    }

    #[test]
    fn date_fields() {
        let date: alloc::vec::Vec<FieldType> =
            FieldType::ALL.into_iter().filter(|f| f.is_date()).collect();
        assert_eq!(
            date,
            [
                FieldType::Years,
                FieldType::Months,
                FieldType::Weeks,
                FieldType::Days,
            ],
        );
    }

    #[test]
    fn bits_are_distinct() {
        let all = FieldType::ALL.into_iter().fold(0u8, |acc, f| acc | f.bit());
        assert_eq!(all, 0xFF);
    }
}
