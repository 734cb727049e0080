//! Evidence wrapper tests over programmatically constructed CRLs and OCSP responses

use core::time::Duration;

use der::asn1::{BitString, GeneralizedTime, Null, ObjectIdentifier, OctetString};
use der::{DateTime, Encode};
use spki::AlgorithmIdentifierOwned;
use x509_cert::certificate::Version;
use x509_cert::crl::{CertificateList, TbsCertList};
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::time::Time;
use x509_ocsp::{
    BasicOcspResponse, CertId, CertStatus, OcspGeneralizedTime, OcspResponse, OcspResponseStatus,
    ResponderId, ResponseBytes, ResponseData, SingleResponse, Version as OcspVersion,
};

use revval::{
    CrlEvidence, OcspEvidence, PoeType, ProofOfExistence, RevocationEvidence,
    RevocationTrustPolicy, TimeOfInterest, UsabilityRating,
};


const ID_PKIX_OCSP_BASIC: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.48.1.1");
const SHA_256_WITH_RSA_ENCRYPTION: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");
const ID_SHA_1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.14.3.2.26");

fn dt(year: u16, month: u8, day: u8) -> DateTime {
    DateTime::new(year, month, day, 0, 0, 0).unwrap()
}

fn toi(year: u16, month: u8, day: u8) -> TimeOfInterest {
    TimeOfInterest(dt(year, month, day))
}

fn alg(oid: ObjectIdentifier) -> AlgorithmIdentifierOwned {
    AlgorithmIdentifierOwned {
        oid,
        parameters: None,
    }
}

fn crl(this_update: DateTime, next_update: Option<DateTime>) -> CertificateList {
    CertificateList {
        tbs_cert_list: TbsCertList {
            version: Version::V2,
            signature: alg(SHA_256_WITH_RSA_ENCRYPTION),
            issuer: Name::default(),
            this_update: Time::GeneralTime(GeneralizedTime::from_date_time(this_update)),
            next_update: next_update
                .map(|nu| Time::GeneralTime(GeneralizedTime::from_date_time(nu))),
            revoked_certificates: None,
            crl_extensions: None,
        },
        signature_algorithm: alg(SHA_256_WITH_RSA_ENCRYPTION),
        signature: BitString::from_bytes(&[]).unwrap(),
    }
}

fn single_response(this_update: DateTime, next_update: Option<DateTime>) -> SingleResponse {
    SingleResponse {
        cert_id: CertId {
            hash_algorithm: alg(ID_SHA_1),
            issuer_name_hash: OctetString::new([0u8; 20].as_slice()).unwrap(),
            issuer_key_hash: OctetString::new([0u8; 20].as_slice()).unwrap(),
            serial_number: SerialNumber::new(&[42]).unwrap(),
        },
        cert_status: CertStatus::Good(Null),
        this_update: OcspGeneralizedTime(GeneralizedTime::from_date_time(this_update)),
        next_update: next_update.map(|nu| OcspGeneralizedTime(GeneralizedTime::from_date_time(nu))),
        single_extensions: None,
    }
}

fn ocsp_response(entries: Vec<SingleResponse>) -> OcspResponse {
    let basic = BasicOcspResponse {
        tbs_response_data: ResponseData {
            version: OcspVersion::V1,
            responder_id: ResponderId::ByName(Name::default()),
            produced_at: OcspGeneralizedTime(GeneralizedTime::from_date_time(dt(2024, 1, 1))),
            responses: entries,
            response_extensions: None,
        },
        signature_algorithm: alg(SHA_256_WITH_RSA_ENCRYPTION),
        signature: BitString::from_bytes(&[]).unwrap(),
        certs: None,
    };
    OcspResponse {
        response_status: OcspResponseStatus::Successful,
        response_bytes: Some(ResponseBytes {
            response_type: ID_PKIX_OCSP_BASIC,
            response: OctetString::new(basic.to_der().unwrap()).unwrap(),
        }),
    }
}

#[test]
fn crl_within_window() {
    let evidence = RevocationEvidence::Crl(CrlEvidence::new(
        crl(dt(2024, 1, 1), Some(dt(2024, 1, 8))),
        ProofOfExistence::freshly_fetched(),
    ));
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Ok, rating);
    assert!(rating.usable());
}

#[test]
fn crl_after_window_is_stale() {
    let evidence = RevocationEvidence::Crl(CrlEvidence::new(
        crl(dt(2024, 1, 1), Some(dt(2024, 1, 8))),
        ProofOfExistence::unknown(),
    ));
    let rating = evidence.usable_at(
        toi(2024, 1, 10),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Stale, rating);
}

#[test]
fn crl_before_window_depends_on_retroactivity() {
    let evidence = RevocationEvidence::Crl(CrlEvidence::new(
        crl(dt(2024, 1, 1), Some(dt(2024, 1, 8))),
        ProofOfExistence::unknown(),
    ));
    let rating = evidence.usable_at(
        toi(2023, 12, 31),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::TooNew, rating);

    let retroactive = RevocationTrustPolicy {
        retroactive_revinfo: true,
        ..Default::default()
    };
    let rating = evidence.usable_at(toi(2023, 12, 31), &retroactive, Duration::ZERO, None);
    assert_eq!(UsabilityRating::Ok, rating);
}

#[test]
fn crl_without_next_update_is_unclear() {
    let evidence = CrlEvidence::new(crl(dt(2024, 1, 1), None), ProofOfExistence::unknown());
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Unclear, rating);
}

#[test]
fn ocsp_with_unique_response_within_window() {
    let evidence = RevocationEvidence::Ocsp(OcspEvidence::new(
        ocsp_response(vec![single_response(dt(2024, 1, 1), Some(dt(2024, 1, 8)))]),
        ProofOfExistence::freshly_fetched(),
    ));
    let policy = RevocationTrustPolicy::default();

    let rating = evidence.usable_at(toi(2024, 1, 5), &policy, Duration::ZERO, None);
    assert_eq!(UsabilityRating::Ok, rating);

    // evaluation is pure; an identical invocation yields an identical rating
    let again = evidence.usable_at(toi(2024, 1, 5), &policy, Duration::ZERO, None);
    assert_eq!(rating, again);

    let rating = evidence.usable_at(toi(2024, 2, 1), &policy, Duration::ZERO, None);
    assert_eq!(UsabilityRating::Stale, rating);
}

#[test]
fn ocsp_failed_status_is_unclear() {
    let evidence = OcspEvidence::new(
        OcspResponse {
            response_status: OcspResponseStatus::TryLater,
            response_bytes: None,
        },
        ProofOfExistence::freshly_fetched(),
    );
    assert!(evidence.extract_basic_ocsp_response().is_none());
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Unclear, rating);
}

#[test]
fn ocsp_missing_response_bytes_is_unclear() {
    let evidence = OcspEvidence::new(
        OcspResponse {
            response_status: OcspResponseStatus::Successful,
            response_bytes: None,
        },
        ProofOfExistence::unknown(),
    );
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Unclear, rating);
}

#[test]
fn ocsp_non_basic_response_type_is_unclear() {
    let evidence = OcspEvidence::new(
        OcspResponse {
            response_status: OcspResponseStatus::Successful,
            response_bytes: Some(ResponseBytes {
                // id-pkix-ocsp, not id-pkix-ocsp-basic
                response_type: ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.48.1"),
                response: OctetString::new([0u8; 4].as_slice()).unwrap(),
            }),
        },
        ProofOfExistence::unknown(),
    );
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Unclear, rating);
}

#[test]
fn ocsp_undecodable_body_is_unclear() {
    let evidence = OcspEvidence::new(
        OcspResponse {
            response_status: OcspResponseStatus::Successful,
            response_bytes: Some(ResponseBytes {
                response_type: ID_PKIX_OCSP_BASIC,
                response: OctetString::new([0xde, 0xad, 0xbe, 0xef].as_slice()).unwrap(),
            }),
        },
        ProofOfExistence::unknown(),
    );
    assert!(evidence.extract_basic_ocsp_response().is_none());
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Unclear, rating);
}

#[test]
fn ocsp_with_multiple_responses_is_unclear() {
    let evidence = OcspEvidence::new(
        ocsp_response(vec![
            single_response(dt(2024, 1, 1), Some(dt(2024, 1, 8))),
            single_response(dt(2024, 1, 1), Some(dt(2024, 1, 8))),
        ]),
        ProofOfExistence::freshly_fetched(),
    );
    // timestamps are perfectly fresh, yet no unique answer exists
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Unclear, rating);
}

#[test]
fn ocsp_with_no_responses_is_unclear() {
    let evidence = OcspEvidence::new(ocsp_response(vec![]), ProofOfExistence::unknown());
    let rating = evidence.usable_at(
        toi(2024, 1, 5),
        &RevocationTrustPolicy::default(),
        Duration::ZERO,
        None,
    );
    assert_eq!(UsabilityRating::Unclear, rating);
}

#[test]
fn poe_is_returned_unchanged() {
    let at = toi(2023, 6, 1);
    let evidence = RevocationEvidence::Crl(CrlEvidence::new(
        crl(dt(2024, 1, 1), Some(dt(2024, 1, 8))),
        ProofOfExistence::timestamped(at),
    ));
    let poe = evidence.retrieve_poe();
    assert_eq!(PoeType::Timestamped, poe.poe_type());
    assert_eq!(Some(at), poe.archive_timestamp());

    let evidence = RevocationEvidence::Ocsp(OcspEvidence::new(
        ocsp_response(vec![single_response(dt(2024, 1, 1), None)]),
        ProofOfExistence::freshly_fetched(),
    ));
    assert_eq!(PoeType::FreshlyFetched, evidence.retrieve_poe().poe_type());
    assert_eq!(None, evidence.retrieve_poe().archive_timestamp());
}
