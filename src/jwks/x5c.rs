//! X.509 certificate chain (`x5c`) decoding
//!
//! Only the leaf certificate is read. Chain validation, expiry and trust
//! are out of scope: the certificate is a container for its public key.

use crate::error::{Error, Result};
use crate::keys::RsaPublicKey;
use crate::utils::base64url;
use der::Decode;
use x509_cert::Certificate;

/// Decode one standard-Base64 `x5c` element into a certificate
pub fn decode_certificate(x5c: &str) -> Result<Certificate> {
    let der = base64url::decode_standard(x5c).map_err(|e| match e {
        Error::FormatInvalidBase64(msg) => Error::CertificateInvalidBase64(msg),
        other => other,
    })?;
    Certificate::from_der(&der).map_err(|e| Error::CertificateInvalidDer(e.to_string()))
}

/// RSA public key embedded in a `x5c` element
///
/// # Errors
///
/// Returns a certificate error when the element is not Base64, not an X.509
/// certificate, or carries a non-RSA key.
pub fn rsa_key_from_x5c(x5c: &str) -> Result<RsaPublicKey> {
    let certificate = decode_certificate(x5c)?;
    RsaPublicKey::from_spki(&certificate.tbs_certificate.subject_public_key_info)
}
