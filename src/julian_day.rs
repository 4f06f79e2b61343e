//! This module implements the continuous astronomical day counts: the
//! Julian Day and its modified variant.
//!
//! A Julian Day is a real-valued count of days since noon of the
//! proleptic Julian date -4712-01-01; civil noon of that date is
//! exactly `JD 0.0`. The Modified Julian Day shifts the zero point by
//! `2400000.5` days, putting `MJD 0.0` at midnight of 1858-11-17 and
//! keeping present-day values small.

use core::fmt;

#[allow(unused_imports)] // unused when std supplies the inherent float methods
use core_maths::CoreFloat;

use crate::calendar::CalendarKind;
use crate::date::Date;

/// The Julian Day of the J2000 reference epoch, 2000-01-01 12:00
/// (Gregorian).
pub const J2000: JulianDay = JulianDay(2_451_545.0);

/// Offset between the Julian Day and Modified Julian Day zero points.
pub(crate) const MJD_EPOCH_OFFSET: f64 = 2_400_000.5;

/// A continuous count of elapsed days since the Julian Day epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDay(pub(crate) f64);

impl JulianDay {
    /// Creates a `JulianDay` from a raw day count.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the day count as an `f64`.
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Shifts this day count onto the Modified Julian Day zero point.
    #[inline]
    #[must_use]
    pub fn modified(self) -> ModifiedJulianDay {
        ModifiedJulianDay(self.0 - MJD_EPOCH_OFFSET)
    }
}

impl From<f64> for JulianDay {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

/// A day count on the Modified Julian Day zero point, `JD - 2400000.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModifiedJulianDay(pub(crate) f64);

impl ModifiedJulianDay {
    /// Creates a `ModifiedJulianDay` from a raw day count.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the day count as an `f64`.
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Shifts this day count back onto the Julian Day zero point.
    #[inline]
    #[must_use]
    pub fn julian_day(self) -> JulianDay {
        JulianDay(self.0 + MJD_EPOCH_OFFSET)
    }
}

impl From<f64> for ModifiedJulianDay {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ModifiedJulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MJD {}", self.0)
    }
}

impl Date {
    /// Computes the Julian Day of this date.
    ///
    /// Uses the civil-to-Julian-Day formulation of Meeus, *Astronomical
    /// Algorithms*, chapter 7: January and February count as months 13
    /// and 14 of the preceding year, and the century correction `b` is
    /// applied only under Gregorian reckoning.
    #[must_use]
    pub fn julian_day(&self) -> JulianDay {
        let mut year = f64::from(self.year());
        let mut month = f64::from(self.month());
        if self.month() < 3 {
            year -= 1.0;
            month += 12.0;
        }

        let b = match self.calendar() {
            CalendarKind::Gregorian => {
                let a = (year / 100.0).floor();
                (2.0 - a + (a / 4.0).floor()).floor()
            }
            CalendarKind::Julian => 0.0,
        };
        let d = f64::from(self.day()) + self.day_offset();

        JulianDay(
            (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + d + b
                - 1524.5,
        )
    }

    /// Computes the Modified Julian Day of this date.
    #[inline]
    #[must_use]
    pub fn mjd(&self) -> ModifiedJulianDay {
        self.julian_day().modified()
    }
}
