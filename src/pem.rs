//! JWK to PEM conversion
//!
//! The RSA `n`/`e` members of a JWK are wrapped in a SubjectPublicKeyInfo
//! and written as an RFC 7468 `PUBLIC KEY` block: 64-character Base64 lines,
//! LF line endings and a trailing newline.

use crate::error::{Error, Result};
use crate::jwks::Jwk;
use crate::keys::RsaPublicKey;
use crate::limits::MAX_INPUT_SIZE;
use crate::utils::bounds::validate_input_size;
use der::pem::LineEnding;
use der::EncodePem;
use tracing::debug;

/// Convert a JSON-encoded RSA JWK into a PEM `PUBLIC KEY` block
///
/// Only `n` and `e` are read; `kty` and any other members are ignored.
///
/// # Example
///
/// ```
/// let jwk = r#"{"kty":"RSA","e":"AQAB","n":"0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw"}"#;
/// let pem = jwkpem::convert_jwk_to_pem(jwk)?;
/// assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
/// assert!(pem.ends_with("-----END PUBLIC KEY-----\n"));
/// # Ok::<(), jwkpem::Error>(())
/// ```
///
/// # Errors
///
/// - `Error::InputTooLarge` if the input exceeds [`MAX_INPUT_SIZE`]
/// - `Error::FormatInvalidJson` if the input is not a JSON object
/// - `Error::FormatMissingField` if `n` or `e` is absent
/// - `Error::FormatInvalidField` if `n` or `e` is not a Base64URL string
/// - `Error::FormatInvalidKey` if the values do not form an RSA key
pub fn convert_jwk_to_pem(jwk_json: &str) -> Result<String> {
    validate_input_size(jwk_json, MAX_INPUT_SIZE)?;

    let jwk = Jwk::from_json(jwk_json)?;
    let key = jwk.to_rsa_key()?;
    debug!(
        kid = jwk.kid().unwrap_or_default(),
        bits = key.bits(),
        "converting jwk to pem"
    );
    encode_public_key_pem(&key)
}

/// PEM-encode an RSA public key as a SubjectPublicKeyInfo
pub fn encode_public_key_pem(key: &RsaPublicKey) -> Result<String> {
    let mut pem = key
        .to_spki()?
        .to_pem(LineEnding::LF)
        .map_err(|e| Error::EncodingFailed(format!("pem: {e}")))?;
    if !pem.ends_with('\n') {
        pem.push('\n');
    }
    Ok(pem)
}
