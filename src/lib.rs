//! The `julian_rs` crate converts civil calendar dates, Julian or
//! Gregorian, to and from continuous astronomical day counts and
//! performs calendar-correct day arithmetic on them.
//!
//! ```rust
//! use julian_rs::{day_offset_from_clock, CalendarKind, Date, J2000};
//!
//! // Civil noon of 2000-01-01 is the J2000 reference epoch.
//! let epoch = Date::try_new(2000, 1, 1, day_offset_from_clock(12, 0, 0)).unwrap();
//! assert_eq!(epoch.julian_day(), J2000);
//!
//! // Dates before the 1582 reform resolve to the Julian calendar.
//! let medieval = Date::try_new(1000, 2, 29, 0.0).unwrap();
//! assert_eq!(medieval.calendar(), CalendarKind::Julian);
//!
//! // Day arithmetic is leap-year aware and stays in the date's own
//! // calendar.
//! let later = medieval.add_days(366);
//! assert_eq!((later.year(), later.month(), later.day()), (1001, 3, 1));
//! ```
//!
//! The 1582 reform removed the civil dates October 5 through
//! October 14; construction of those dates is governed by a
//! [`ReformPolicy`]. Time zones and civil-date formatting are out of
//! scope, as is the inverse conversion from a Julian Day back to a
//! civil date.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

extern crate alloc;
extern crate core;

pub mod calendar;
pub mod date;
pub mod error;
pub mod julian_day;
pub mod options;

#[doc(inline)]
pub use error::DateError;

/// The `julian_rs` result type
pub type DateResult<T> = Result<T, DateError>;

pub use calendar::CalendarKind;
pub use date::{day_offset_from_clock, Date};
pub use julian_day::{JulianDay, ModifiedJulianDay, J2000};
pub use options::ReformPolicy;
