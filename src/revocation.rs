//! Revocation information freshness evaluation
//!
//! The revocation module determines whether a CRL or OCSP response constitutes usable evidence of
//! a certificate's revocation status at a time of interest. Statements are wrapped together with a
//! [`ProofOfExistence`](poe/struct.ProofOfExistence.html) describing when the statement is known
//! to have existed, and assessed against a
//! [`RevocationTrustPolicy`](../policy/struct.RevocationTrustPolicy.html) via
//! [`usable_at`](evidence/enum.RevocationEvidence.html#method.usable_at) or directly via
//! [`judge_revinfo`](freshness/fn.judge_revinfo.html).
//!
//! ```
//! use core::time::Duration;
//! use revval::{judge_revinfo, PoeType, ProofOfExistence, RevocationTrustPolicy, TimeOfInterest};
//!
//! let policy = RevocationTrustPolicy::default();
//!
//! // a weekly CRL evaluated midway through its validity window
//! let this_update = TimeOfInterest::from_unix_secs(1704067200).unwrap();
//! let next_update = TimeOfInterest::from_unix_secs(1704672000).unwrap();
//! let validation_time = TimeOfInterest::from_unix_secs(1704412800).unwrap();
//!
//! let rating = judge_revinfo(
//!     Some(this_update),
//!     Some(next_update),
//!     validation_time,
//!     &policy,
//!     Duration::from_secs(60),
//!     None,
//! );
//! assert!(rating.usable());
//!
//! let poe = ProofOfExistence::freshly_fetched();
//! assert_eq!(PoeType::FreshlyFetched, poe.poe_type());
//! ```
//!
//! Outcomes other than [`UsabilityRating::Ok`](freshness/enum.UsabilityRating.html) are never
//! errors. In particular, insufficient data degrades to `UsabilityRating::Unclear`; the caller
//! decides whether indecision is fatal for the validation at hand.

pub mod evidence;
pub mod freshness;
pub mod poe;

pub use crate::revocation::{evidence::*, freshness::*, poe::*};
