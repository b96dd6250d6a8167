//! RSA public key, the pivot between JWK members, certificates and PEM
//!
//! A key is an unsigned modulus and exponent. It can be built from JWK
//! `n`/`e` members or from a SubjectPublicKeyInfo, and written back out as
//! either.

use crate::error::{Error, Result};
use crate::limits::MAX_RSA_MODULUS_BITS;
use crate::utils::bigint::{self, magnitude_bytes};
use crate::utils::der;
use rsa::traits::PublicKeyParts;
use rsa::BigUint;
use spki::SubjectPublicKeyInfoOwned;

/// RSA public key (modulus and exponent)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    inner: rsa::RsaPublicKey,
}

impl RsaPublicKey {
    /// Assemble a key from its components
    ///
    /// # Errors
    ///
    /// Returns `Error::FormatInvalidKey` for a zero modulus, an exponent
    /// outside `2..2^33`, or a modulus above the size limit.
    pub fn new(modulus: BigUint, exponent: BigUint) -> Result<Self> {
        if modulus.bits() == 0 {
            return Err(Error::FormatInvalidKey("modulus must be positive".into()));
        }
        let inner = rsa::RsaPublicKey::new_with_max_size(modulus, exponent, MAX_RSA_MODULUS_BITS)
            .map_err(|e| Error::FormatInvalidKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Build from Base64URL JWK members (padding optional)
    pub fn from_jwk_members(n: &str, e: &str) -> Result<Self> {
        let modulus = bigint::decode_unsigned(n).map_err(|err| invalid_member("n", err))?;
        let exponent = bigint::decode_unsigned(e).map_err(|err| invalid_member("e", err))?;
        Self::new(modulus, exponent)
    }

    /// Build from a SubjectPublicKeyInfo, typically a certificate's
    ///
    /// The key is taken as the certificate carries it: only a zero modulus
    /// is rejected, as `Error::CertificateInvalidKey`. Exponent and size
    /// limits do not apply.
    pub fn from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Self> {
        let (n, e) = der::rsa_n_e_from_spki(spki)?;
        let modulus = BigUint::from_bytes_be(&n);
        if modulus.bits() == 0 {
            return Err(Error::CertificateInvalidKey("modulus must be positive".into()));
        }
        let inner = rsa::RsaPublicKey::new_unchecked(modulus, BigUint::from_bytes_be(&e));
        Ok(Self { inner })
    }

    /// Modulus (n)
    pub fn modulus(&self) -> &BigUint {
        self.inner.n()
    }

    /// Public exponent (e)
    pub fn exponent(&self) -> &BigUint {
        self.inner.e()
    }

    /// Modulus length in bits
    pub fn bits(&self) -> usize {
        self.modulus().bits()
    }

    /// Unpadded Base64URL modulus, as written to a JWK `n` member
    pub fn jwk_n(&self) -> String {
        bigint::encode_unsigned(self.modulus())
    }

    /// Unpadded Base64URL exponent, as written to a JWK `e` member
    pub fn jwk_e(&self) -> String {
        bigint::encode_unsigned(self.exponent())
    }

    /// SubjectPublicKeyInfo with the rsaEncryption algorithm identifier
    pub fn to_spki(&self) -> Result<SubjectPublicKeyInfoOwned> {
        der::rsa_spki_from_n_e(
            &magnitude_bytes(self.modulus()),
            &magnitude_bytes(self.exponent()),
        )
    }

    /// DER-encoded SubjectPublicKeyInfo
    pub fn to_public_key_der(&self) -> Result<Vec<u8>> {
        der::spki_to_der(&self.to_spki()?)
    }
}

fn invalid_member(field: &str, err: Error) -> Error {
    let reason = match err {
        Error::FormatInvalidBase64(msg) => msg,
        other => other.to_string(),
    };
    Error::FormatInvalidField {
        field: field.into(),
        reason,
    }
}
