//! Error types

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

/// Result type
pub type Result<T> = core::result::Result<T, Error>;

/// `Failures` collects the per-source failure descriptions that prevented a revocation status
/// verdict from being reached.
pub type Failures = Vec<String>;

/// `FailureScope` identifies where in path processing a certificate-level failure arose. Both
/// fields are carried through every [`Error::PathValidation`] so that callers can report which
/// certificate failed and in which validation context.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FailureScope {
    /// True when the failure concerns the end entity certificate rather than a CA certificate
    pub is_ee_cert: bool,
    /// True when the failure arose during an auxiliary validation, e.g., while validating the
    /// certificate of an OCSP responder or CRL issuer, rather than the primary chain
    pub is_side_validation: bool,
}

/// Error type
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum PathValidationStatus {
    /// CertificateRevoked occurs when a certificate in the path has been revoked.
    CertificateRevoked,
    /// CertificateExpired occurs when a certificate features a notAfter date that is before the
    /// time of interest.
    CertificateExpired,
    /// CertificateNotYetValid occurs when a certificate features a notBefore date that is after
    /// the time of interest.
    CertificateNotYetValid,
    /// InvalidCertificate occurs when a certificate is structurally unsuited for its role in the
    /// path, e.g., a CA certificate without basicConstraints.
    InvalidCertificate,
}

/// Error type
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// PathValidation conveys a fatal certificate-level failure along with the scope in which it
    /// was observed.
    PathValidation(PathValidationStatus, FailureScope),
    /// PathBuilding occurs when no prospective certification path could be assembled.
    PathBuilding,
    /// DuplicateCertificate occurs when the same certificate appeared more than once in a
    /// prospective path.
    DuplicateCertificate,
    /// CertificateFetch occurs when certificate retrieval failed while building a path.
    CertificateFetch,
    /// CrlFetch occurs when CRL retrieval failed.
    CrlFetch,
    /// CrlNoMatches occurs when no available CRL matched the certificate of interest.
    CrlNoMatches,
    /// OcspFetch occurs when OCSP response retrieval failed.
    OcspFetch,
    /// OcspNoMatches occurs when no available OCSP response matched the certificate of interest.
    OcspNoMatches,
    /// RevocationStatusIndeterminate occurs when none of the considered revocation sources yielded
    /// a verdict; it carries the failure observed for each candidate source.
    RevocationStatusIndeterminate(Failures),
    /// Asn1Error is used to propagate error information from the der crate.
    Asn1Error(der::Error),
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Asn1Error(err)
    }
}

impl fmt::Display for PathValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathValidationStatus::CertificateRevoked => write!(f, "CertificateRevoked"),
            PathValidationStatus::CertificateExpired => write!(f, "CertificateExpired"),
            PathValidationStatus::CertificateNotYetValid => write!(f, "CertificateNotYetValid"),
            PathValidationStatus::InvalidCertificate => write!(f, "InvalidCertificate"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PathValidation(status, scope) => {
                write!(
                    f,
                    "PathValidationError: {} (end entity: {}, side validation: {})",
                    status, scope.is_ee_cert, scope.is_side_validation
                )
            }
            Error::PathBuilding => write!(f, "PathBuilding"),
            Error::DuplicateCertificate => write!(f, "DuplicateCertificate"),
            Error::CertificateFetch => write!(f, "CertificateFetch"),
            Error::CrlFetch => write!(f, "CrlFetch"),
            Error::CrlNoMatches => write!(f, "CrlNoMatches"),
            Error::OcspFetch => write!(f, "OcspFetch"),
            Error::OcspNoMatches => write!(f, "OcspNoMatches"),
            Error::RevocationStatusIndeterminate(failures) => {
                write!(
                    f,
                    "RevocationStatusIndeterminate: {} candidate source(s) failed",
                    failures.len()
                )
            }
            Error::Asn1Error(err) => write!(f, "Asn1Error: {}", err),
        }
    }
}

#[test]
fn error_test() {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;

    let _s = format!("{}", PathValidationStatus::CertificateRevoked);
    let _s = format!("{}", PathValidationStatus::CertificateExpired);
    let _s = format!("{}", PathValidationStatus::CertificateNotYetValid);
    let _s = format!("{}", PathValidationStatus::InvalidCertificate);

    let scope = FailureScope {
        is_ee_cert: true,
        is_side_validation: false,
    };
    let _s = format!(
        "{}",
        Error::PathValidation(PathValidationStatus::CertificateRevoked, scope)
    );
    let _s = format!("{}", Error::PathBuilding);
    let _s = format!("{}", Error::DuplicateCertificate);
    let _s = format!("{}", Error::CertificateFetch);
    let _s = format!("{}", Error::CrlFetch);
    let _s = format!("{}", Error::CrlNoMatches);
    let _s = format!("{}", Error::OcspFetch);
    let _s = format!("{}", Error::OcspNoMatches);
    let _s = format!(
        "{}",
        Error::RevocationStatusIndeterminate(vec!["CrlFetch".to_string()])
    );
}
