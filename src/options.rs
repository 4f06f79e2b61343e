//! Construction options for civil dates.
//!
//! The only operation that takes an option is `Date` construction,
//! which must decide what to do with civil dates that fall inside the
//! Gregorian reform gap.

use core::fmt;
use core::str::FromStr;

/// `ReformPolicy` decides how to treat a civil date inside the
/// Gregorian reform gap, 1582 October 5 through October 14.
///
/// Those ten dates never existed in the adopting regions: Thursday
/// 1582-10-04 (Julian) was followed directly by Friday 1582-10-15
/// (Gregorian). It consists of the "reject" and "remap" options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReformPolicy {
    /// Reject option: constructing a gap date fails with
    /// `NonexistentDate`.
    #[default]
    Reject,
    /// Remap option: the requested day is read as Julian-reckoned and
    /// shifted ten days forward onto the equivalent Gregorian date.
    Remap,
}

/// A parsing error for `ReformPolicy`
#[derive(Debug, Clone, Copy)]
pub struct ParseReformPolicyError;

impl fmt::Display for ParseReformPolicyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid reform policy value")
    }
}

impl FromStr for ReformPolicy {
    type Err = ParseReformPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "remap" => Ok(Self::Remap),
            _ => Err(ParseReformPolicyError),
        }
    }
}

impl fmt::Display for ReformPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Reject => "reject",
            Self::Remap => "remap",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_rejects() {
        assert_eq!(ReformPolicy::default(), ReformPolicy::Reject);
    }

    #[test]
    fn from_str_round_trip() {
        for policy in [ReformPolicy::Reject, ReformPolicy::Remap] {
            let rendered = alloc::format!("{policy}");
            assert_eq!(ReformPolicy::from_str(&rendered).ok(), Some(policy));
        }
        assert!(ReformPolicy::from_str("constrain").is_err());
    }
}
