//! This module implements `DateError`.

use core::fmt;

/// `DateError`'s error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The day fraction was outside the half-open interval [0, 1).
    InvalidOffset,
    /// The month was outside the range 1 through 12.
    InvalidMonth,
    /// The day was outside the valid range for its month and year.
    InvalidDay,
    /// The civil date falls inside the 1582 Gregorian reform gap.
    NonexistentDate,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOffset => "InvalidOffset",
            Self::InvalidMonth => "InvalidMonth",
            Self::InvalidDay => "InvalidDay",
            Self::NonexistentDate => "NonexistentDate",
        }
        .fmt(f)
    }
}

/// The error type for `julian_rs`.
///
/// All errors are raised synchronously at `Date` construction time and
/// indicate caller input error; none are retryable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl DateError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create an invalid day-fraction error.
    #[inline]
    #[must_use]
    pub const fn invalid_offset() -> Self {
        Self::new(ErrorKind::InvalidOffset)
    }

    /// Create an invalid month error.
    #[inline]
    #[must_use]
    pub const fn invalid_month() -> Self {
        Self::new(ErrorKind::InvalidMonth)
    }

    /// Create an invalid day error.
    #[inline]
    #[must_use]
    pub const fn invalid_day() -> Self {
        Self::new(ErrorKind::InvalidDay)
    }

    /// Create a nonexistent date error.
    #[inline]
    #[must_use]
    pub const fn nonexistent_date() -> Self {
        Self::new(ErrorKind::NonexistentDate)
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.to_string()
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_string();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

/// The error message
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum ErrorMessage {
    OffsetNotInUnitInterval,
    MonthOutOfRange,
    DayOutOfRange,
    ReformGap,

    None,
}

impl ErrorMessage {
    pub fn to_string(self) -> &'static str {
        match self {
            Self::OffsetNotInUnitInterval => "day fraction must be within [0, 1).",
            Self::MonthOutOfRange => "month must be within 1 through 12.",
            Self::DayOutOfRange => "day exceeds the length of the month.",
            Self::ReformGap => {
                "civil date was skipped by the 1582 Julian to Gregorian reform."
            }
            Self::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_is_preserved() {
        assert_eq!(DateError::invalid_offset().kind(), ErrorKind::InvalidOffset);
        assert_eq!(DateError::invalid_month().kind(), ErrorKind::InvalidMonth);
        assert_eq!(DateError::invalid_day().kind(), ErrorKind::InvalidDay);
        assert_eq!(
            DateError::nonexistent_date().kind(),
            ErrorKind::NonexistentDate
        );
    }

    #[test]
    fn error_display() {
        let err = DateError::invalid_month().with_enum(ErrorMessage::MonthOutOfRange);
        assert_eq!(
            alloc::format!("{err}"),
            "InvalidMonth: month must be within 1 through 12."
        );

        let bare = DateError::invalid_day();
        assert_eq!(alloc::format!("{bare}"), "InvalidDay");
    }

    #[test]
    fn error_message_extraction() {
        let err = DateError::nonexistent_date().with_enum(ErrorMessage::ReformGap);
        assert_eq!(
            err.into_message(),
            "civil date was skipped by the 1582 Julian to Gregorian reform."
        );
    }
}
