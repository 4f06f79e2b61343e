//! This module implements the two supported calendar reckonings and
//! their leap-year and month-length rules.

use core::fmt;
use core::str::FromStr;

/// Month lengths of a common year.
pub(crate) const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Cumulative day counts preceding each month of a common year.
pub(crate) const DAYS_BEFORE_MONTH: [u16; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// The calendar reckoning a [`Date`][crate::Date] is expressed in.
///
/// Both calendars are proleptic: their rules extend to year 0 and to
/// negative years (astronomical numbering, where year 0 is 1 BC). The
/// tag is fixed when a `Date` is constructed and every operation on the
/// date stays within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarKind {
    /// Proleptic Julian reckoning.
    Julian,
    /// Proleptic Gregorian reckoning.
    Gregorian,
}

impl CalendarKind {
    /// Returns whether `year` is a leap year under this reckoning.
    ///
    /// Under the Julian rules every year divisible by 4 is leap,
    /// centuries included. The Gregorian rules exempt centuries unless
    /// they are divisible by 400.
    #[must_use]
    pub fn is_leap_year(self, year: i32) -> bool {
        if year % 100 == 0 {
            return matches!(self, Self::Julian) || year % 400 == 0;
        }
        year % 4 == 0
    }

    /// Returns the number of days in `year`.
    #[must_use]
    pub fn days_in_year(self, year: i32) -> u16 {
        if self.is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// Returns the twelve month lengths of `year`, with February's
    /// entry adjusted for leap years.
    #[must_use]
    pub fn month_lengths(self, year: i32) -> [u8; 12] {
        let mut lengths = MONTH_LENGTHS;
        lengths[1] += u8::from(self.is_leap_year(year));
        lengths
    }

    // Callers validate the month before reaching this lookup.
    pub(crate) fn days_in_month(self, year: i32, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 28 + u8::from(self.is_leap_year(year)),
            _ => unreachable!("days_in_month called with an unvalidated month."),
        }
    }
}

/// A parsing error for `CalendarKind`
#[derive(Debug, Clone, Copy)]
pub struct ParseCalendarKindError;

impl fmt::Display for ParseCalendarKindError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid calendar kind")
    }
}

impl FromStr for CalendarKind {
    type Err = ParseCalendarKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "julian" => Ok(Self::Julian),
            "gregorian" => Ok(Self::Gregorian),
            _ => Err(ParseCalendarKindError),
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Julian => "julian",
            Self::Gregorian => "gregorian",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        let cases = [
            (2004, CalendarKind::Gregorian, true),
            (2004, CalendarKind::Julian, true),
            (1900, CalendarKind::Gregorian, false),
            (1900, CalendarKind::Julian, true),
            (2000, CalendarKind::Gregorian, true),
            (2000, CalendarKind::Julian, true),
            (1999, CalendarKind::Gregorian, false),
            (1999, CalendarKind::Julian, false),
        ];

        for (year, calendar, expected) in cases {
            assert_eq!(
                calendar.is_leap_year(year),
                expected,
                "year {year} on the {calendar} calendar"
            );
        }
    }

    #[test]
    fn leap_years_proleptic() {
        // Astronomical numbering: year 0 is 1 BC, year -1 is 2 BC.
        assert!(CalendarKind::Julian.is_leap_year(0));
        assert!(CalendarKind::Gregorian.is_leap_year(0));
        assert!(!CalendarKind::Julian.is_leap_year(-1));
        assert!(CalendarKind::Julian.is_leap_year(-4));
        assert!(CalendarKind::Julian.is_leap_year(-1000));
        assert!(!CalendarKind::Gregorian.is_leap_year(-100));
        assert!(CalendarKind::Julian.is_leap_year(-100));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(CalendarKind::Gregorian.days_in_year(2000), 366);
        assert_eq!(CalendarKind::Gregorian.days_in_year(1900), 365);
        assert_eq!(CalendarKind::Julian.days_in_year(1900), 366);
        assert_eq!(CalendarKind::Gregorian.days_in_year(1999), 365);
    }

    #[test]
    fn month_lengths_follow_leap_years() {
        let common = CalendarKind::Gregorian.month_lengths(1999);
        assert_eq!(common, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);

        let leap = CalendarKind::Gregorian.month_lengths(2000);
        assert_eq!(leap[1], 29);
        assert_eq!(leap.iter().map(|d| u16::from(*d)).sum::<u16>(), 366);

        // 1900 is leap under Julian reckoning only.
        assert_eq!(CalendarKind::Julian.month_lengths(1900)[1], 29);
        assert_eq!(CalendarKind::Gregorian.month_lengths(1900)[1], 28);
    }

    #[test]
    fn cumulative_table_matches_month_lengths() {
        let mut sum = 0u16;
        for (month, length) in MONTH_LENGTHS.iter().enumerate() {
            assert_eq!(DAYS_BEFORE_MONTH[month], sum);
            sum += u16::from(*length);
        }
    }

    #[test]
    fn from_str_round_trip() {
        for kind in [CalendarKind::Julian, CalendarKind::Gregorian] {
            let rendered = alloc::format!("{kind}");
            assert_eq!(CalendarKind::from_str(&rendered).ok(), Some(kind));
        }
        assert!(CalendarKind::from_str("islamic").is_err());
    }
}
