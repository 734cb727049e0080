//! Revocation statements paired with proof of existence

use core::time::Duration;

use const_oid::db::rfc6960::ID_PKIX_OCSP_BASIC;
use der::Decode;
use log::debug;
use x509_cert::crl::CertificateList;
use x509_ocsp::{BasicOcspResponse, OcspResponse, OcspResponseStatus, SingleResponse};

use crate::{
    judge_revinfo, ProofOfExistence, RevocationTrustPolicy, TimeOfInterest, UsabilityRating,
};

/// `OcspEvidence` pairs a decoded OCSP response with proof of its existence. Instances are
/// immutable once constructed and own the wrapped response for their lifetime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OcspEvidence {
    poe: ProofOfExistence,
    response: OcspResponse,
}

impl OcspEvidence {
    /// Creates an [`OcspEvidence`] taking ownership of the given response
    pub fn new(response: OcspResponse, poe: ProofOfExistence) -> Self {
        Self { poe, response }
    }

    /// Returns the proof of existence recorded when the response was accepted into the
    /// validation process
    pub fn retrieve_poe(&self) -> ProofOfExistence {
        self.poe
    }

    /// Returns the basic response conveyed by the wrapped OCSP response, or None when the
    /// response indicates failure, carries no response bytes, carries response bytes of a type
    /// other than basic, or carries a body that cannot be decoded. These are data quality
    /// conditions rather than faults.
    pub fn extract_basic_ocsp_response(&self) -> Option<BasicOcspResponse> {
        if self.response.response_status != OcspResponseStatus::Successful {
            debug!(
                "OcspResponse indicates failure ({:?})",
                self.response.response_status
            );
            return None;
        }

        let rb = match &self.response.response_bytes {
            Some(rb) => rb,
            None => {
                debug!("OcspResponse contained no response bytes");
                return None;
            }
        };
        if rb.response_type != ID_PKIX_OCSP_BASIC {
            debug!(
                "OcspResponse contained response bytes other than basic type ({})",
                rb.response_type
            );
            return None;
        }

        match BasicOcspResponse::from_der(rb.response.as_bytes()) {
            Ok(bor) => Some(bor),
            Err(e) => {
                debug!("OcspResponse contained a BasicOcspResponse that could not be parsed with: {}", e);
                None
            }
        }
    }

    /// Returns the per-certificate response when the wrapped response contains exactly one. Multi
    /// certificate responses yield no unique answer and are treated the same as responses from
    /// which no basic response can be extracted.
    fn extract_unique_response(&self) -> Option<SingleResponse> {
        let basic = self.extract_basic_ocsp_response()?;
        let mut responses = basic.tbs_response_data.responses;
        if responses.len() != 1 {
            debug!(
                "BasicOcspResponse contained {} single responses where exactly one was expected",
                responses.len()
            );
            return None;
        }
        responses.pop()
    }

    /// Assesses whether the wrapped response is usable evidence at `validation_time` under
    /// `policy`. Responses from which no unique per-certificate response can be extracted rate
    /// [`UsabilityRating::Unclear`] regardless of any timestamps present.
    pub fn usable_at(
        &self,
        validation_time: TimeOfInterest,
        policy: &RevocationTrustPolicy,
        time_tolerance: Duration,
        signature_poe_time: Option<TimeOfInterest>,
    ) -> UsabilityRating {
        let sr = match self.extract_unique_response() {
            Some(sr) => sr,
            None => return UsabilityRating::Unclear,
        };

        judge_revinfo(
            Some(TimeOfInterest::from(sr.this_update.0)),
            sr.next_update.map(|nu| TimeOfInterest::from(nu.0)),
            validation_time,
            policy,
            time_tolerance,
            signature_poe_time,
        )
    }
}

/// `CrlEvidence` pairs a decoded certificate revocation list with proof of its existence.
/// Instances are immutable once constructed and own the wrapped list for their lifetime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrlEvidence {
    poe: ProofOfExistence,
    crl: CertificateList,
}

impl CrlEvidence {
    /// Creates a [`CrlEvidence`] taking ownership of the given CRL
    pub fn new(crl: CertificateList, poe: ProofOfExistence) -> Self {
        Self { poe, crl }
    }

    /// Returns the proof of existence recorded when the CRL was accepted into the validation
    /// process
    pub fn retrieve_poe(&self) -> ProofOfExistence {
        self.poe
    }

    /// Assesses whether the wrapped CRL is usable evidence at `validation_time` under `policy`.
    /// CRLs carry exactly one thisUpdate/nextUpdate pair, so no extraction ambiguity arises.
    pub fn usable_at(
        &self,
        validation_time: TimeOfInterest,
        policy: &RevocationTrustPolicy,
        time_tolerance: Duration,
        signature_poe_time: Option<TimeOfInterest>,
    ) -> UsabilityRating {
        let tbs_cert_list = &self.crl.tbs_cert_list;
        judge_revinfo(
            Some(TimeOfInterest::from(tbs_cert_list.this_update)),
            tbs_cert_list.next_update.map(TimeOfInterest::from),
            validation_time,
            policy,
            time_tolerance,
            signature_poe_time,
        )
    }
}

/// `RevocationEvidence` is the closed set of revocation statement kinds that can vouch for a
/// certificate's status. Both variants expose their proof of existence and a freshness assessment
/// at a time of interest; adding a kind is a compile-time checked, exhaustive change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RevocationEvidence {
    /// Evidence backed by an OCSP response
    Ocsp(OcspEvidence),
    /// Evidence backed by a certificate revocation list
    Crl(CrlEvidence),
}

impl RevocationEvidence {
    /// Returns the proof of existence recorded when the statement was accepted into the
    /// validation process
    pub fn retrieve_poe(&self) -> ProofOfExistence {
        match self {
            RevocationEvidence::Ocsp(ocsp) => ocsp.retrieve_poe(),
            RevocationEvidence::Crl(crl) => crl.retrieve_poe(),
        }
    }

    /// Assesses whether the wrapped statement is usable evidence at `validation_time` under
    /// `policy`
    pub fn usable_at(
        &self,
        validation_time: TimeOfInterest,
        policy: &RevocationTrustPolicy,
        time_tolerance: Duration,
        signature_poe_time: Option<TimeOfInterest>,
    ) -> UsabilityRating {
        match self {
            RevocationEvidence::Ocsp(ocsp) => {
                ocsp.usable_at(validation_time, policy, time_tolerance, signature_poe_time)
            }
            RevocationEvidence::Crl(crl) => {
                crl.usable_at(validation_time, policy, time_tolerance, signature_poe_time)
            }
        }
    }
}
