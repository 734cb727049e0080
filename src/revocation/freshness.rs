//! Freshness assessment for revocation information

use core::time::Duration;

use crate::{FreshnessReqType, RevocationTrustPolicy, TimeOfInterest};

/// `UsabilityRating` is the outcome of assessing a revocation statement against a
/// [`RevocationTrustPolicy`] at a time of interest. Ratings carry no identity across evaluations;
/// every call to [`judge_revinfo`] computes a fresh rating from its inputs alone.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UsabilityRating {
    /// The statement is usable evidence at the time of interest
    Ok,
    /// The statement is too old relative to the policy
    Stale,
    /// The statement precedes the window required by the policy, i.e., it was issued too late to
    /// vouch for the time of interest
    TooNew,
    /// The statement carries insufficient data for the selected rule, or the data needed to
    /// decide could not be located
    Unclear,
}

impl UsabilityRating {
    /// Returns true only for [`UsabilityRating::Ok`]
    pub fn usable(self) -> bool {
        self == UsabilityRating::Ok
    }
}

/// Computes the effective freshness window: the explicit policy interval when present, otherwise
/// the thisUpdate/nextUpdate span of the statement when well-formed. The tolerance is folded in so
/// comparisons absorb clock drift between the producer of the statement and the caller.
fn freshness_window(
    policy: &RevocationTrustPolicy,
    this_update: TimeOfInterest,
    next_update: Option<TimeOfInterest>,
    time_tolerance: Duration,
) -> Option<Duration> {
    let window = match policy.freshness {
        Some(window) => Some(window),
        None => match next_update {
            Some(nu) if nu >= this_update => {
                Some(Duration::from_secs(nu.seconds_since(&this_update) as u64))
            }
            _ => None,
        },
    };
    window.map(|w| w + time_tolerance)
}

/// `judge_revinfo` determines whether a revocation statement bearing the given
/// thisUpdate/nextUpdate values is usable evidence at `validation_time` under `policy`. The
/// assessment is a pure function of its arguments; it performs no I/O and never fails. Statements
/// that cannot be judged, e.g., because `this_update` is absent or the selected rule has no
/// freshness window to compare against, yield [`UsabilityRating::Unclear`].
///
/// `signature_poe_time` supplies the reference time for the
/// [`FreshnessReqType::TimeAfterSignature`] rule, typically the proof-of-existence time of the
/// signature under validation; `validation_time` stands in when no such anchor is available.
pub fn judge_revinfo(
    this_update: Option<TimeOfInterest>,
    next_update: Option<TimeOfInterest>,
    validation_time: TimeOfInterest,
    policy: &RevocationTrustPolicy,
    time_tolerance: Duration,
    signature_poe_time: Option<TimeOfInterest>,
) -> UsabilityRating {
    // no statement can be judged without its own issuance time
    let this_update = match this_update {
        Some(tu) => tu,
        None => return UsabilityRating::Unclear,
    };

    // see 5.2.5.4 in ETSI EN 319 102-1
    match policy.freshness_req_type {
        FreshnessReqType::TimeAfterSignature => {
            // the statement must have been generated sufficiently long after the (presumptive)
            // signature time
            let window = match freshness_window(policy, this_update, next_update, time_tolerance) {
                Some(w) => w,
                None => return UsabilityRating::Unclear,
            };
            let anchor = signature_poe_time.unwrap_or(validation_time);
            if this_update.seconds_since(&anchor) < window.as_secs() as i64 {
                UsabilityRating::Stale
            } else {
                UsabilityRating::Ok
            }
        }
        FreshnessReqType::MaxDiffRevocationValidation => {
            // the difference between thisUpdate and the time of interest must be small enough,
            // with the sign of the difference distinguishing stale from premature use
            let window = match freshness_window(policy, this_update, next_update, time_tolerance) {
                Some(w) => w,
                None => return UsabilityRating::Unclear,
            };
            let delta = validation_time.seconds_since(&this_update);
            if delta.unsigned_abs() > window.as_secs() {
                if delta > 0 {
                    UsabilityRating::Stale
                } else {
                    UsabilityRating::TooNew
                }
            } else {
                UsabilityRating::Ok
            }
        }
        FreshnessReqType::Default => {
            // classical validity window semantics: the time of interest must fall within
            // thisUpdate/nextUpdate widened by the tolerance (non-AdES)
            let next_update = match next_update {
                Some(nu) => nu,
                None => return UsabilityRating::Unclear,
            };
            let tolerance = time_tolerance.as_secs() as i64;
            if !policy.retroactive_revinfo
                && validation_time.seconds_since(&this_update) < -tolerance
            {
                return UsabilityRating::TooNew;
            }
            if validation_time.seconds_since(&next_update) > tolerance {
                return UsabilityRating::Stale;
            }
            UsabilityRating::Ok
        }
    }
}
