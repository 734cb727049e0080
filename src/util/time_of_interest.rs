//! Utils to define the time of interest when evaluating revocation information

use core::{fmt, time::Duration};

/// Time of interest for the evaluation of a revocation statement, i.e., the time at which the
/// statement is required to constitute usable evidence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct TimeOfInterest(pub der::DateTime);

impl fmt::Display for TimeOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TimeOfInterest {
    /// Create a [`TimeOfInterest`] from Unix epoch
    pub fn from_unix_secs(v: u64) -> der::Result<Self> {
        Ok(Self(der::DateTime::from_unix_duration(
            Duration::from_secs(v),
        )?))
    }

    /// Return Unix epoch (in seconds) for this value
    pub fn as_unix_secs(&self) -> u64 {
        self.0.unix_duration().as_secs()
    }

    /// Returns the number of seconds from `other` to `self`, negative when `self` precedes `other`
    pub fn seconds_since(&self, other: &TimeOfInterest) -> i64 {
        self.as_unix_secs() as i64 - other.as_unix_secs() as i64
    }
}

impl From<x509_cert::time::Time> for TimeOfInterest {
    fn from(t: x509_cert::time::Time) -> Self {
        Self(t.to_date_time())
    }
}

impl From<der::asn1::GeneralizedTime> for TimeOfInterest {
    fn from(t: der::asn1::GeneralizedTime) -> Self {
        Self(t.to_date_time())
    }
}

#[cfg(feature = "std")]
mod std {
    use super::*;

    impl TimeOfInterest {
        /// Creates a [`TimeOfInterest`] for the current time
        pub fn now() -> Self {
            Self(
                der::DateTime::from_system_time(::std::time::SystemTime::now())
                    // NOTE(safety): only values before 1970 or after 9999 are rejected
                    .expect("Could not create a DateTime from the system time"),
            )
        }
    }

    impl Default for TimeOfInterest {
        fn default() -> Self {
            Self::now()
        }
    }
}
