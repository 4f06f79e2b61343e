//! This module implements the civil `Date` value and its day
//! arithmetic.
//!
//! A `Date` is a year/month/day triple with a fractional time of day,
//! tagged with the calendar it is reckoned in. Construction resolves
//! the calendar from the historical 1582 reform and validates every
//! field, so a live `Date` always satisfies its invariants.

use crate::calendar::{CalendarKind, DAYS_BEFORE_MONTH};
use crate::error::{DateError, ErrorMessage};
use crate::options::ReformPolicy;
use crate::DateResult;

/// Number of seconds in a civil day.
pub(crate) const SECONDS_PER_DAY: u32 = 86_400;

// The reform boundary, keyed as year * 10000 + month * 100 + day.
// 1582-10-04 was the last Julian civil date; 1582-10-15 the first
// Gregorian one.
const LAST_JULIAN_YMD: i64 = 15_821_004;
const FIRST_GREGORIAN_YMD: i64 = 15_821_015;

/// A civil calendar date with a fractional time of day.
///
/// Years are proleptic and use astronomical numbering: year 0 is 1 BC,
/// year -1 is 2 BC, and so on. The calendar tag is resolved at
/// construction from the 1582 reform boundary and never changes
/// afterwards; [`Date::add_days`] stays within it even when the
/// arithmetic passes through the reform.
///
/// ```rust
/// use julian_rs::Date;
///
/// let j2000 = Date::try_new(2000, 1, 1, 0.5).unwrap();
/// assert_eq!(j2000.julian_day().as_f64(), 2451545.0);
///
/// let next = j2000.add_days(366);
/// assert_eq!((next.year(), next.month(), next.day()), (2001, 1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDate")
)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
    day_offset: f64,
    calendar: CalendarKind,
}

// ==== Private API ====

impl Date {
    /// Create a new `Date` from validated fields.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(
        year: i32,
        month: u8,
        day: u8,
        day_offset: f64,
        calendar: CalendarKind,
    ) -> Self {
        Self {
            year,
            month,
            day,
            day_offset,
            calendar,
        }
    }

    fn new_julian(year: i32, month: u8, day: u8, day_offset: f64) -> DateResult<Self> {
        validate_date(year, month, day, day_offset, CalendarKind::Julian)?;
        Ok(Self::new_unchecked(
            year,
            month,
            day,
            day_offset,
            CalendarKind::Julian,
        ))
    }

    fn new_gregorian(year: i32, month: u8, day: u8, day_offset: f64) -> DateResult<Self> {
        validate_date(year, month, day, day_offset, CalendarKind::Gregorian)?;
        Ok(Self::new_unchecked(
            year,
            month,
            day,
            day_offset,
            CalendarKind::Gregorian,
        ))
    }
}

// ==== Public API ====

impl Date {
    /// Creates a new `Date`, rejecting civil dates inside the reform
    /// gap.
    ///
    /// The calendar is resolved from the 1582 reform boundary: dates up
    /// to 1582-10-04 are Julian, dates from 1582-10-15 on are
    /// Gregorian, and the ten dates in between fail with
    /// `NonexistentDate`.
    pub fn try_new(year: i32, month: u8, day: u8, day_offset: f64) -> DateResult<Self> {
        Self::try_new_with_policy(year, month, day, day_offset, ReformPolicy::Reject)
    }

    /// Creates a new `Date`, remapping civil dates inside the reform
    /// gap onto the Gregorian calendar.
    ///
    /// A requested 1582-10-05 through 1582-10-14 is read as a
    /// Julian-reckoned day and shifted ten days forward, so 1582-10-05
    /// resolves to the Gregorian 1582-10-15.
    pub fn new(year: i32, month: u8, day: u8, day_offset: f64) -> DateResult<Self> {
        Self::try_new_with_policy(year, month, day, day_offset, ReformPolicy::Remap)
    }

    /// Creates a new `Date` with an explicit [`ReformPolicy`].
    pub fn try_new_with_policy(
        year: i32,
        month: u8,
        day: u8,
        day_offset: f64,
        policy: ReformPolicy,
    ) -> DateResult<Self> {
        let ymd = i64::from(year) * 10_000 + i64::from(month) * 100 + i64::from(day);
        if ymd <= LAST_JULIAN_YMD {
            Self::new_julian(year, month, day, day_offset)
        } else if ymd >= FIRST_GREGORIAN_YMD {
            Self::new_gregorian(year, month, day, day_offset)
        } else {
            match policy {
                ReformPolicy::Reject => {
                    Err(DateError::nonexistent_date().with_enum(ErrorMessage::ReformGap))
                }
                ReformPolicy::Remap => {
                    #[cfg(feature = "log")]
                    log::debug!(
                        "remapping {year}-{month:02}-{day:02} out of the reform gap to {year}-{month:02}-{:02}",
                        day + 10
                    );
                    Self::new_gregorian(year, month, day + 10, day_offset)
                }
            }
        }
    }

    /// Returns this `Date`'s year value.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns this `Date`'s month value.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns this `Date`'s day value.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the fraction of the day elapsed since local midnight.
    #[inline]
    #[must_use]
    pub const fn day_offset(&self) -> f64 {
        self.day_offset
    }

    /// Returns the calendar this `Date` is reckoned in.
    #[inline]
    #[must_use]
    pub const fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    /// Returns the date `delta` whole days away from this one, forward
    /// or backward.
    ///
    /// The arithmetic stays within this date's own calendar: stepping a
    /// Gregorian date backward through October 1582 keeps counting in
    /// proleptic Gregorian days rather than switching to Julian
    /// reckoning. The day fraction and calendar tag carry over
    /// unchanged.
    ///
    /// Deltas large enough to push the year outside `i32` are not
    /// bounds-checked.
    #[must_use]
    pub fn add_days(self, delta: i64) -> Self {
        let mut day_number =
            i64::from(DAYS_BEFORE_MONTH[usize::from(self.month - 1)]) + i64::from(self.day);
        if self.month > 2 && self.calendar.is_leap_year(self.year) {
            day_number += 1;
        }

        let mut year = self.year;
        let mut remaining = delta;
        if remaining >= 0 {
            while remaining > 0 {
                if remaining >= 365 {
                    remaining -= 365;
                    day_number += 365;
                } else {
                    day_number += remaining;
                    remaining = 0;
                }

                let length = i64::from(self.calendar.days_in_year(year));
                if day_number > length {
                    year += 1;
                    day_number -= length;
                }
            }
        } else {
            while remaining < 0 {
                if remaining <= -365 {
                    remaining += 365;
                    day_number -= 365;
                } else {
                    day_number += remaining;
                    remaining = 0;
                }

                if day_number <= 0 {
                    year -= 1;
                    day_number += i64::from(self.calendar.days_in_year(year));
                }
            }
        }

        let mut month = 1u8;
        for length in self.calendar.month_lengths(year) {
            if day_number <= i64::from(length) {
                break;
            }
            day_number -= i64::from(length);
            month += 1;
        }

        Self {
            year,
            month,
            day: day_number as u8,
            ..self
        }
    }
}

/// Computes the fraction of a day elapsed since local midnight.
///
/// Midnight maps to `0.0` and noon to `0.5`; 04:48:00 has covered
/// 17280 of the day's 86400 seconds and maps to `0.2`.
#[must_use]
pub fn day_offset_from_clock(hour: u8, minute: u8, second: u8) -> f64 {
    let seconds = u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second);
    f64::from(seconds) / f64::from(SECONDS_PER_DAY)
}

// ==== Serde support ====

/// Field-for-field mirror of `Date`. Deserialization lands here first
/// and reaches `Date` only through the validating [`TryFrom`] below,
/// so a decoded `Date` upholds the same invariants as a constructed
/// one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Date")]
struct RawDate {
    year: i32,
    month: u8,
    day: u8,
    day_offset: f64,
    calendar: CalendarKind,
}

// The calendar tag is taken as stored rather than re-resolved from the
// reform boundary: day arithmetic can legitimately carry a date past
// the boundary within its own calendar, and those values must
// round-trip.
#[cfg(feature = "serde")]
impl TryFrom<RawDate> for Date {
    type Error = DateError;

    fn try_from(raw: RawDate) -> DateResult<Self> {
        validate_date(raw.year, raw.month, raw.day, raw.day_offset, raw.calendar)?;
        Ok(Self::new_unchecked(
            raw.year,
            raw.month,
            raw.day,
            raw.day_offset,
            raw.calendar,
        ))
    }
}

// ==== Date validation utilities ====

/// Validates civil date fields, checking the day fraction, then the
/// month, then the day.
fn validate_date(
    year: i32,
    month: u8,
    day: u8,
    day_offset: f64,
    calendar: CalendarKind,
) -> DateResult<()> {
    if !(0.0..1.0).contains(&day_offset) {
        return Err(DateError::invalid_offset().with_enum(ErrorMessage::OffsetNotInUnitInterval));
    }

    if !(1..=12).contains(&month) {
        return Err(DateError::invalid_month().with_enum(ErrorMessage::MonthOutOfRange));
    }

    if !(1..=calendar.days_in_month(year, month)).contains(&day) {
        return Err(DateError::invalid_day().with_enum(ErrorMessage::DayOutOfRange));
    }

    Ok(())
}
