//! Base64 / Base64URL encoding and decoding per RFC 4648
//!
//! JWK members (`n`, `e`) use the URL-safe alphabet, `x5c` members use the
//! standard alphabet. Decoding accepts input with or without trailing
//! padding because producers disagree on it; encoding follows the target
//! format exactly.

use crate::error::{Error, Result};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a Base64URL string (padded or unpadded) to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(e.to_string()))
}

/// Encode bytes as unpadded Base64URL
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(input)
}

/// Decode a standard-alphabet Base64 string (padded or unpadded) to bytes
pub fn decode_standard(input: &str) -> Result<Vec<u8>> {
    STANDARD_LENIENT
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(e.to_string()))
}

/// Encode bytes as padded standard-alphabet Base64
pub fn encode_standard(input: &[u8]) -> String {
    STANDARD_LENIENT.encode(input)
}
