//! Error types for key conversion
//!
//! Every failure is detected where the malformed input is read and returned
//! to the caller as a typed [`Error`]. [`Error::kind`] groups the variants
//! into the four families callers usually branch on.

use std::fmt;
use thiserror::Error;

/// jwkpem Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Input too large: {size} bytes (maximum: {max} bytes)")]
    InputTooLarge { size: usize, max: usize },

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Missing required field: {0}")]
    FormatMissingField(String),

    #[error("Invalid field '{field}': {reason}")]
    FormatInvalidField { field: String, reason: String },

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("Invalid RSA public key: {0}")]
    FormatInvalidKey(String),

    // ============================================================================
    // Certificate Errors
    // ============================================================================
    #[error("Certificate Base64 decoding failed: {0}")]
    CertificateInvalidBase64(String),

    #[error("Certificate parsing failed: {0}")]
    CertificateInvalidDer(String),

    #[error("Certificate public key is {found}, expected {expected}")]
    CertificateKeyMismatch { expected: String, found: String },

    #[error("Certificate RSA public key is invalid: {0}")]
    CertificateInvalidKey(String),

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    // ============================================================================
    // Callout Configuration Errors
    // ============================================================================
    #[error("source not specified")]
    SourceNotSpecified,

    #[error("source variable resolves to null")]
    SourceUnresolved,

    #[error("empty jwk content")]
    SourceEmpty,
}

/// Error families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete JSON input, or a key that cannot be assembled
    Format,
    /// Undecodable or unusable `x5c` leaf certificate
    Certificate,
    /// DER or PEM serialization failure
    Encoding,
    /// Callout wiring problem (missing or unresolved source)
    Configuration,
}

impl Error {
    /// The family this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InputTooLarge { .. }
            | Error::FormatInvalidJson(_)
            | Error::FormatMissingField(_)
            | Error::FormatInvalidField { .. }
            | Error::FormatInvalidBase64(_)
            | Error::FormatInvalidKey(_) => ErrorKind::Format,
            Error::CertificateInvalidBase64(_)
            | Error::CertificateInvalidDer(_)
            | Error::CertificateKeyMismatch { .. }
            | Error::CertificateInvalidKey(_) => ErrorKind::Certificate,
            Error::EncodingFailed(_) => ErrorKind::Encoding,
            Error::SourceNotSpecified | Error::SourceUnresolved | Error::SourceEmpty => {
                ErrorKind::Configuration
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Format => "FormatError",
            ErrorKind::Certificate => "CertificateError",
            ErrorKind::Encoding => "EncodingError",
            ErrorKind::Configuration => "ConfigurationError",
        };
        f.write_str(name)
    }
}

/// Result type alias for jwkpem operations
pub type Result<T> = std::result::Result<T, Error>;
