//! Proof of existence records for revocation information

use crate::TimeOfInterest;

/// `PoeType` describes the strength of evidence that a revocation statement existed at a
/// particular time, independent of the timestamps asserted inside the statement itself. A party
/// that controls the clock used to produce a statement cannot forge this external evidence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PoeType {
    /// No external evidence of existence is available
    Unknown,
    /// The statement was covered by a trusted timestamp, e.g., within an archival container
    Timestamped,
    /// The statement was fetched at validation time
    FreshlyFetched,
}

/// `ProofOfExistence` records when a piece of revocation information is known to have existed.
/// Instances are immutable once constructed; an archive timestamp is present exactly when the
/// statement was covered by a trusted timestamp.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ProofOfExistence {
    poe_type: PoeType,
    archive_timestamp: Option<TimeOfInterest>,
}

impl ProofOfExistence {
    /// Creates a [`ProofOfExistence`] conveying that no external evidence of existence is
    /// available
    pub fn unknown() -> Self {
        Self {
            poe_type: PoeType::Unknown,
            archive_timestamp: None,
        }
    }

    /// Creates a [`ProofOfExistence`] for a statement fetched at validation time
    pub fn freshly_fetched() -> Self {
        Self {
            poe_type: PoeType::FreshlyFetched,
            archive_timestamp: None,
        }
    }

    /// Creates a [`ProofOfExistence`] for a statement whose existence at `archive_timestamp` was
    /// attested by a trusted third party
    pub fn timestamped(archive_timestamp: TimeOfInterest) -> Self {
        Self {
            poe_type: PoeType::Timestamped,
            archive_timestamp: Some(archive_timestamp),
        }
    }

    /// Returns the type of evidence conveyed by this record
    pub fn poe_type(&self) -> PoeType {
        self.poe_type
    }

    /// Returns the time attested by a trusted third party, present only for
    /// [`PoeType::Timestamped`] records
    pub fn archive_timestamp(&self) -> Option<TimeOfInterest> {
        self.archive_timestamp
    }
}
