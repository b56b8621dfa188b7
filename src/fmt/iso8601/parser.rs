use crate::{
    error::{fmt::iso8601::Error as E, Error, ErrorContext},
    field::FieldType,
    fmt::{util::parse_millis_fraction, Parsed},
    period::Period,
    period_type::PeriodType,
    util::parse,
};

/// The bits of every field written after the `T` designator.
const TIME_BITS: u8 = (1 << (FieldType::Hours as u8))
    | (1 << (FieldType::Minutes as u8))
    | (1 << (FieldType::Seconds as u8))
    | (1 << (FieldType::Millis as u8));

/// Which side of the `T` designator the scanner is on.
///
/// The only transition is `Date -> Time`, taken on `T`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Section {
    Date,
    Time,
}

impl Section {
    /// Resolves a designator to a field using this section's table.
    ///
    /// This is where the ambiguity of `M` is resolved.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn field(self, designator: u8) -> Option<FieldType> {
        let field = match (self, designator.to_ascii_uppercase()) {
            (Section::Date, b'Y') => FieldType::Years,
            (Section::Date, b'M') => FieldType::Months,
            (Section::Date, b'W') => FieldType::Weeks,
            (Section::Date, b'D') => FieldType::Days,
            (Section::Time, b'H') => FieldType::Hours,
            (Section::Time, b'M') => FieldType::Minutes,
            (Section::Time, b'S') => FieldType::Seconds,
            _ => return None,
        };
        Some(field)
    }

    fn other(self) -> Section {
        match self {
            Section::Date => Section::Time,
            Section::Time => Section::Date,
        }
    }
}

/// The working state of a single parse.
///
/// Values are stored by field index. A field's bit in `set` is turned on
/// the first time it is given a value, which is also how duplicates and
/// ordering violations are detected.
#[derive(Debug)]
struct Accumulator {
    ty: PeriodType,
    values: [i32; 8],
    set: u8,
    section: Section,
}

impl Accumulator {
    fn new(ty: PeriodType) -> Accumulator {
        Accumulator { ty, values: [0; 8], set: 0, section: Section::Date }
    }

    /// Records a value for the given field.
    ///
    /// This fails if the field was already given, if a smaller field was
    /// already given or if the period type doesn't support it.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn set(&mut self, field: FieldType, value: i32) -> Result<(), Error> {
        if self.set & field.bit() != 0 {
            return Err(Error::from(E::Duplicate { field }));
        }
        if let Some(after) = self.smallest() {
            if after > field {
                return Err(Error::from(E::OutOfOrder { field, after }));
            }
        }
        if !self.ty.is_supported(field) {
            let ty = self.ty;
            return Err(Error::from(E::UnsupportedField { field, ty }));
        }
        self.values[field.index()] = value;
        self.set |= field.bit();
        Ok(())
    }

    /// Returns the smallest field given a value so far.
    fn smallest(&self) -> Option<FieldType> {
        if self.set == 0 {
            return None;
        }
        let index = 7 - self.set.leading_zeros() as usize;
        FieldType::from_usize(index)
    }

    /// Freezes the accumulated values into a period.
    fn finish(&self) -> Result<Period, Error> {
        if self.section == Section::Time && self.set & TIME_BITS == 0 {
            return Err(Error::from(E::EmptyTimeSection));
        }
        if self.set == 0 {
            return Err(Error::from(E::NoFields));
        }
        Ok(Period::from_parts(self.ty, self.values))
    }
}

/// A single-use scanner over an ISO 8601 period string.
///
/// The scanner only ever moves forward. When a rule is violated, the cursor
/// is left at the token that violated it, which is how error offsets are
/// reported.
#[derive(Debug)]
pub(super) struct Scanner<'i> {
    /// The entire input given.
    input: &'i [u8],
    /// The cursor. This is always a suffix of `input`.
    inp: &'i [u8],
    acc: Accumulator,
}

impl<'i> Scanner<'i> {
    pub(super) fn new(ty: PeriodType, input: &'i [u8]) -> Scanner<'i> {
        Scanner { input, inp: input, acc: Accumulator::new(ty) }
    }

    /// Parses a period from the beginning of the input.
    ///
    /// On success, the remaining unparsed input is returned along with the
    /// period. On failure, the error includes the input and the offset at
    /// which parsing stopped.
    pub(super) fn parse(mut self) -> Result<Parsed<'i, Period>, Error> {
        match self.parse_period() {
            Ok(period) => {
                trace!(
                    "parsed {input:?} as {period:?} \
                     with {rest} bytes left over",
                    input = crate::util::escape::Bytes(self.input),
                    rest = self.inp.len(),
                );
                Ok(Parsed { value: period, input: self.inp })
            }
            Err(err) => {
                let offset = self.offset();
                debug!(
                    "rejected {input:?} at byte offset {offset}: {err}",
                    input = crate::util::escape::Bytes(self.input),
                );
                Err(err.context(E::failed(self.input, offset)))
            }
        }
    }

    fn offset(&self) -> usize {
        self.input.len() - self.inp.len()
    }

    // Period :::
    //   PeriodDesignator DateUnits? (TimeDesignator TimeUnits)?
    fn parse_period(&mut self) -> Result<Period, Error> {
        self.parse_period_designator()?;
        while let Some(&byte) = self.inp.first() {
            match byte {
                b'T' | b't' => self.parse_time_designator()?,
                b'0'..=b'9' | b'-' => self.parse_unit()?,
                _ if byte.is_ascii_alphabetic() => {
                    return Err(self.missing_value(byte));
                }
                _ => break,
            }
        }
        self.acc.finish()
    }

    // PeriodDesignator ::: one of
    //   P p
    fn parse_period_designator(&mut self) -> Result<(), Error> {
        let (&first, rest) = self
            .inp
            .split_first()
            .ok_or(E::ExpectedPeriodDesignatorFoundEndOfInput)?;
        if !matches!(first, b'P' | b'p') {
            return Err(Error::from(E::ExpectedPeriodDesignatorFoundByte {
                byte: first,
            }));
        }
        self.inp = rest;
        Ok(())
    }

    // TimeDesignator ::: one of
    //   T t
    fn parse_time_designator(&mut self) -> Result<(), Error> {
        if self.acc.section == Section::Time {
            return Err(Error::from(E::RepeatedTimeDesignator));
        }
        self.acc.section = Section::Time;
        self.inp = &self.inp[1..];
        Ok(())
    }

    // Unit :::
    //   Value Designator
    //   Value SecondsFraction SecondsDesignator
    //
    // Value :::
    //   -? DecimalDigit+
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn parse_unit(&mut self) -> Result<(), Error> {
        let (negative, unsigned) = match self.inp.split_first() {
            Some((&b'-', rest)) => (true, rest),
            _ => (false, self.inp),
        };
        let (digits, rest) = parse::digits(unsigned);
        let value = parse::i32(digits, negative).context(E::FailedValue)?;
        self.inp = rest;

        let Parsed { value: fraction, input: rest } =
            parse_millis_fraction(self.inp)?;
        self.inp = rest;

        let designator = *self
            .inp
            .first()
            .ok_or(E::ExpectedDesignatorFoundEndOfInput)?;
        let field = self.resolve_designator(designator)?;
        if fraction.is_some() && field != FieldType::Seconds {
            return Err(Error::from(E::FractionOnNonSeconds { field }));
        }
        self.acc.set(field, value)?;
        if let Some(millis) = fraction {
            if !self.acc.ty.is_supported(FieldType::Millis) {
                return Err(Error::from(E::FractionWithoutMillis {
                    ty: self.acc.ty,
                }));
            }
            // A fraction shares the sign of its seconds, including for
            // `-0.5`, whose seconds value can't carry the sign itself.
            let millis = if negative { -millis } else { millis };
            self.acc.set(FieldType::Millis, millis)?;
        }
        self.inp = &self.inp[1..];
        Ok(())
    }

    /// Maps a designator following a value to its field in the current
    /// section, or explains why it can't be.
    fn resolve_designator(&self, designator: u8) -> Result<FieldType, Error> {
        let section = self.acc.section;
        if let Some(field) = section.field(designator) {
            return Ok(field);
        }
        let err = if section.other().field(designator).is_some() {
            match section {
                Section::Date => {
                    E::TimeDesignatorInDate { byte: designator }
                }
                Section::Time => {
                    E::DateDesignatorInTime { byte: designator }
                }
            }
        } else if designator.is_ascii_alphabetic()
            && !matches!(designator, b'T' | b't' | b'P' | b'p')
        {
            E::UnknownDesignator { byte: designator }
        } else {
            E::ExpectedDesignatorFoundByte { byte: designator }
        };
        Err(Error::from(err))
    }

    /// Builds the error for a letter found where a value was expected.
    fn missing_value(&self, byte: u8) -> Error {
        let is_designator = Section::Date.field(byte).is_some()
            || Section::Time.field(byte).is_some();
        if is_designator {
            Error::from(E::MissingValue { byte })
        } else {
            Error::from(E::UnknownDesignator { byte })
        }
    }
}
