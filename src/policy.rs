//! Structures related to configuring how revocation information freshness is assessed

use core::time::Duration;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// `FreshnessReqType` selects which freshness rule governs whether a revocation statement is
/// usable at a given time of interest. The non-default rules correspond to the revocation
/// freshness checks described in clause 5.2.5.4 of ETSI EN 319 102-1.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum FreshnessReqType {
    /// Default indicates that a statement is usable only when the time of interest falls within
    /// the thisUpdate/nextUpdate window asserted by the statement, widened by the tolerance.
    Default,
    /// TimeAfterSignature indicates that a statement is usable only when it was issued
    /// sufficiently long after the signature whose certificate is being checked, so that it can
    /// corroborate the status of the certificate at signing time.
    TimeAfterSignature,
    /// MaxDiffRevocationValidation indicates that a statement is usable only when the difference
    /// between its thisUpdate and the time of interest is small enough.
    MaxDiffRevocationValidation,
}

/// `RevocationTrustPolicy` conveys the freshness requirements that revocation information must
/// meet before being accepted as evidence during certification path processing. Instances are
/// treated as read-only for the duration of an evaluation and may be shared across threads.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct RevocationTrustPolicy {
    /// The freshness rule to apply
    pub freshness_req_type: FreshnessReqType,
    /// Explicit freshness interval. When absent, the interval is derived from the
    /// thisUpdate/nextUpdate window of the statement under evaluation, where the selected rule
    /// permits doing so.
    pub freshness: Option<Duration>,
    /// When true, a statement issued after the time of interest may vouch for the status at that
    /// earlier time, i.e., the lower bound of the validity window is waived under the default
    /// rule.
    pub retroactive_revinfo: bool,
}

impl Default for RevocationTrustPolicy {
    fn default() -> Self {
        Self {
            freshness_req_type: FreshnessReqType::Default,
            freshness: None,
            retroactive_revinfo: false,
        }
    }
}
