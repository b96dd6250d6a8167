//! DER encoding utilities for RSA SubjectPublicKeyInfo
//!
//! This module uses the RustCrypto `spki` and `der` crates for standards-compliant
//! DER encoding and decoding of RSA public keys.

use crate::error::{Error, Result};
use der::{asn1::UintRef, Decode, Encode, Sequence};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};

/// rsaEncryption (PKCS #1)
pub(crate) const RSA_ENCRYPTION_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const ED25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");
const ED448_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.113");

fn encoding_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::EncodingFailed(format!("der: {operation}: {details}"))
}

/// RSA public key structure for DER encoding
///
/// Represents RSAPublicKey as defined in RFC 8017:
/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER   -- e
/// }
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    /// RSA modulus (n)
    modulus: UintRef<'a>,
    /// RSA public exponent (e)
    public_exponent: UintRef<'a>,
}

/// Build SubjectPublicKeyInfo for RSA from modulus (n) and exponent (e) bytes
///
/// Inputs are big-endian magnitudes; `UintRef` adds the `0x00` prefix DER
/// needs when the high bit is set.
pub(crate) fn rsa_spki_from_n_e(n: &[u8], e: &[u8]) -> Result<SubjectPublicKeyInfoOwned> {
    use der::asn1::BitString;

    if n.is_empty() || e.is_empty() {
        return Err(encoding_error("rsa key missing n or e", "empty integer"));
    }

    let n_uint = UintRef::new(n).map_err(|e| encoding_error("failed to encode RSA modulus", e))?;
    let e_uint =
        UintRef::new(e).map_err(|e| encoding_error("failed to encode RSA exponent", e))?;

    let rsa_pubkey = RsaPublicKey {
        modulus: n_uint,
        public_exponent: e_uint,
    };

    let rsa_pubkey_der = rsa_pubkey
        .to_der()
        .map_err(|e| encoding_error("failed to encode RSA public key", e))?;

    let algorithm = AlgorithmIdentifierOwned {
        oid: RSA_ENCRYPTION_OID,
        parameters: Some(der::asn1::AnyRef::NULL.into()),
    };

    let subject_public_key = BitString::new(0, rsa_pubkey_der)
        .map_err(|e| encoding_error("failed to create bit string", e))?;

    Ok(SubjectPublicKeyInfoOwned {
        algorithm,
        subject_public_key,
    })
}

/// Encode SubjectPublicKeyInfo to DER bytes
pub(crate) fn spki_to_der(spki: &SubjectPublicKeyInfoOwned) -> Result<Vec<u8>> {
    spki.to_der()
        .map_err(|e| encoding_error("failed to encode SPKI", e))
}

/// Extract modulus and exponent magnitudes from an RSA SubjectPublicKeyInfo
///
/// Fails with a certificate error when the key algorithm is not
/// rsaEncryption or the inner RSAPublicKey is malformed.
pub(crate) fn rsa_n_e_from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<(Vec<u8>, Vec<u8>)> {
    let oid = spki.algorithm.oid;
    if oid != RSA_ENCRYPTION_OID {
        return Err(Error::CertificateKeyMismatch {
            expected: "RSA".into(),
            found: key_algorithm_name(&oid),
        });
    }

    let bits = spki.subject_public_key.as_bytes().ok_or_else(|| {
        Error::CertificateInvalidKey("subject public key has unused bits".into())
    })?;

    let rsa_pubkey = RsaPublicKey::from_der(bits)
        .map_err(|e| Error::CertificateInvalidKey(format!("RSAPublicKey: {e}")))?;

    Ok((
        rsa_pubkey.modulus.as_bytes().to_vec(),
        rsa_pubkey.public_exponent.as_bytes().to_vec(),
    ))
}

/// Human-readable name for a SubjectPublicKeyInfo algorithm
pub(crate) fn key_algorithm_name(oid: &ObjectIdentifier) -> String {
    let name = if *oid == RSA_ENCRYPTION_OID {
        "RSA"
    } else if *oid == EC_PUBLIC_KEY_OID {
        "EC"
    } else if *oid == ED25519_OID {
        "Ed25519"
    } else if *oid == ED448_OID {
        "Ed448"
    } else {
        return oid.to_string();
    };
    name.into()
}
