use crate::field::FieldType;

/// A descriptor of which fields a [`Period`](crate::Period) may carry.
///
/// A period type is an immutable set of [`FieldType`] values. Its fields are
/// always reported in the fixed display order (years, months, weeks, days,
/// hours, minutes, seconds, milliseconds), regardless of the order in which
/// they were given when the type was built.
///
/// Parsing a period string is always done with respect to a period type. A
/// designator for a field outside of the type is an error, even when its
/// value is zero.
///
/// # Well-known types
///
/// The most common period types have named constructors, like
/// [`PeriodType::standard`] (all eight fields) or
/// [`PeriodType::year_day_time`] (everything except months and weeks).
/// Types built from an arbitrary set of fields via
/// [`PeriodType::from_fields`] pick up the name of a well-known type when
/// their field sets coincide.
///
/// # Example
///
/// ```
/// use isoperiod::{FieldType, PeriodType};
///
/// let ty = PeriodType::from_fields(&[
///     FieldType::Seconds,
///     FieldType::Days,
///     FieldType::Years,
/// ]);
/// assert_eq!(ty.fields().collect::<Vec<_>>(), vec![
///     FieldType::Years,
///     FieldType::Days,
///     FieldType::Seconds,
/// ]);
/// assert!(!ty.is_supported(FieldType::Weeks));
/// assert_eq!(ty.index_of(FieldType::Seconds), Some(2));
/// assert_eq!(ty.name(), None);
///
/// let ty = PeriodType::standard().without(FieldType::Weeks);
/// assert_eq!(ty, PeriodType::year_month_day_time());
/// assert_eq!(ty.name(), Some("YearMonthDayTime"));
/// ```
#[derive(Clone, Copy)]
pub struct PeriodType {
    bits: u8,
    name: Option<&'static str>,
}

const Y: u8 = 1 << (FieldType::Years as u8);
const MO: u8 = 1 << (FieldType::Months as u8);
const W: u8 = 1 << (FieldType::Weeks as u8);
const D: u8 = 1 << (FieldType::Days as u8);
const H: u8 = 1 << (FieldType::Hours as u8);
const MI: u8 = 1 << (FieldType::Minutes as u8);
const S: u8 = 1 << (FieldType::Seconds as u8);
const MS: u8 = 1 << (FieldType::Millis as u8);

const TIME: u8 = H | MI | S | MS;

/// Every named period type, used to name types built from raw field sets.
const NAMED: &[(u8, &str)] = &[
    (Y | MO | W | D | TIME, "Standard"),
    (Y | MO | D | TIME, "YearMonthDayTime"),
    (Y | W | D | TIME, "YearWeekDayTime"),
    (Y | D | TIME, "YearDayTime"),
    (D | TIME, "DayTime"),
    (TIME, "Time"),
    (Y, "Years"),
    (MO, "Months"),
    (W, "Weeks"),
    (D, "Days"),
    (H, "Hours"),
    (MI, "Minutes"),
    (S, "Seconds"),
    (MS, "Millis"),
];

impl PeriodType {
    const fn named(bits: u8, name: &'static str) -> PeriodType {
        PeriodType { bits, name: Some(name) }
    }

    /// Creates a period type from a raw bitset, looking up a well-known name.
    fn from_bits(bits: u8) -> PeriodType {
        let name = NAMED
            .iter()
            .find(|&&(named_bits, _)| named_bits == bits)
            .map(|&(_, name)| name);
        PeriodType { bits, name }
    }

    /// All eight fields: years, months, weeks, days, hours, minutes,
    /// seconds and milliseconds.
    pub const fn standard() -> PeriodType {
        PeriodType::named(Y | MO | W | D | TIME, "Standard")
    }

    /// Every field except weeks.
    pub const fn year_month_day_time() -> PeriodType {
        PeriodType::named(Y | MO | D | TIME, "YearMonthDayTime")
    }

    /// Every field except months.
    pub const fn year_week_day_time() -> PeriodType {
        PeriodType::named(Y | W | D | TIME, "YearWeekDayTime")
    }

    /// Every field except months and weeks.
    pub const fn year_day_time() -> PeriodType {
        PeriodType::named(Y | D | TIME, "YearDayTime")
    }

    /// Days and every time field.
    pub const fn day_time() -> PeriodType {
        PeriodType::named(D | TIME, "DayTime")
    }

    /// Hours, minutes, seconds and milliseconds.
    pub const fn time() -> PeriodType {
        PeriodType::named(TIME, "Time")
    }

    /// Only years.
    pub const fn years() -> PeriodType {
        PeriodType::named(Y, "Years")
    }

    /// Only months.
    pub const fn months() -> PeriodType {
        PeriodType::named(MO, "Months")
    }

    /// Only weeks.
    pub const fn weeks() -> PeriodType {
        PeriodType::named(W, "Weeks")
    }

    /// Only days.
    pub const fn days() -> PeriodType {
        PeriodType::named(D, "Days")
    }

    /// Only hours.
    pub const fn hours() -> PeriodType {
        PeriodType::named(H, "Hours")
    }

    /// Only minutes.
    pub const fn minutes() -> PeriodType {
        PeriodType::named(MI, "Minutes")
    }

    /// Only seconds.
    pub const fn seconds() -> PeriodType {
        PeriodType::named(S, "Seconds")
    }

    /// Only milliseconds.
    ///
    /// Note that no ISO 8601 period string can be parsed with this type,
    /// since milliseconds can only be written as a fraction of seconds.
    pub const fn millis() -> PeriodType {
        PeriodType::named(MS, "Millis")
    }

    /// Creates a period type supporting exactly the fields given.
    ///
    /// Duplicates are ignored and order doesn't matter. An empty slice
    /// produces a type with no fields, against which every parse fails.
    pub fn from_fields(fields: &[FieldType]) -> PeriodType {
        let bits = fields.iter().fold(0, |bits, field| bits | field.bit());
        PeriodType::from_bits(bits)
    }

    /// Returns a copy of this type that also supports `field`.
    pub fn with(self, field: FieldType) -> PeriodType {
        PeriodType::from_bits(self.bits | field.bit())
    }

    /// Returns a copy of this type that does not support `field`.
    pub fn without(self, field: FieldType) -> PeriodType {
        PeriodType::from_bits(self.bits & !field.bit())
    }

    /// Returns true if this type supports the given field.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub fn is_supported(&self, field: FieldType) -> bool {
        self.bits & field.bit() != 0
    }

    /// Returns the supported fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = FieldType> + '_ {
        FieldType::ALL
            .into_iter()
            .filter(move |&field| self.is_supported(field))
    }

    /// Returns the number of supported fields.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true when this type supports no fields at all.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the position of `field` among this type's supported fields.
    ///
    /// If the field isn't supported, then `None` is returned.
    pub fn index_of(&self, field: FieldType) -> Option<usize> {
        if !self.is_supported(field) {
            return None;
        }
        let below = self.bits & (field.bit() - 1);
        Some(below.count_ones() as usize)
    }

    /// Returns the name of this type, if it is one of the well-known types.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl Default for PeriodType {
    fn default() -> PeriodType {
        PeriodType::standard()
    }
}

impl Eq for PeriodType {}

impl PartialEq for PeriodType {
    fn eq(&self, other: &PeriodType) -> bool {
        self.bits == other.bits
    }
}

impl core::hash::Hash for PeriodType {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl core::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if let Some(name) = self.name {
            return f.write_str(name);
        }
        f.write_str("[")?;
        for (i, field) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.plural())?;
        }
        f.write_str("]")
    }
}

impl core::fmt::Debug for PeriodType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "PeriodType({self})")
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for PeriodType {
    fn arbitrary(g: &mut quickcheck::Gen) -> PeriodType {
        PeriodType::from_bits(u8::arbitrary(g))
    }
}
