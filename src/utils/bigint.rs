//! Unsigned big-integer codec
//!
//! JWK `n`/`e` values are big-endian magnitudes. Signed encodings (DER
//! INTEGER, two's-complement byte arrays) prefix a `0x00` byte when the top
//! bit of the magnitude is set; that byte is never part of the value and is
//! dropped before anything is written out.

use crate::error::Result;
use crate::utils::base64url;
use rsa::BigUint;

/// Decode a Base64URL big-endian magnitude (padding optional)
///
/// A leading byte with the high bit set is part of the magnitude, never a
/// sign. Empty input decodes to zero.
pub fn decode_unsigned(input: &str) -> Result<BigUint> {
    let bytes = base64url::decode_bytes(input)?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Encode as unpadded Base64URL, the form RFC 7517 requires for `n` and `e`
pub fn encode_unsigned(value: &BigUint) -> String {
    base64url::encode_bytes(&magnitude_bytes(value))
}

/// Encode as padded standard Base64
///
/// Some legacy consumers expect this form. It is not interchangeable with
/// [`encode_unsigned`].
pub fn encode_unsigned_standard(value: &BigUint) -> String {
    base64url::encode_standard(&magnitude_bytes(value))
}

/// Minimal big-endian bytes of `value`
pub(crate) fn magnitude_bytes(value: &BigUint) -> Vec<u8> {
    strip_sign_byte(&value.to_bytes_be()).to_vec()
}

/// Drop exactly one leading `0x00` sign byte, keeping a lone zero intact
pub(crate) fn strip_sign_byte(bytes: &[u8]) -> &[u8] {
    match bytes {
        [0x00, rest @ ..] if !rest.is_empty() => rest,
        _ => bytes,
    }
}
