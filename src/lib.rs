//! # jwkpem - RSA JWK to PEM conversion and JWKS `x5c` normalization
//!
//! > Turn RSA JSON Web Keys into PEM public keys, and fill in the `n`/`e`
//! > members of JWKS entries that only publish an `x5c` certificate chain.
//!
//! ## Overview
//!
//! JWK ([RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517)) describes
//! RSA public keys by their modulus `n` and exponent `e`, both unsigned
//! big-endian integers in unpadded Base64URL. Many consumers want the same
//! key as a PEM `PUBLIC KEY` block instead, and some JWKS providers only
//! publish the certificate chain (`x5c`) from which `n`/`e` must be read.
//!
//! **jwkpem** covers both directions:
//!
//! - [`convert_jwk_to_pem`] reads `n`/`e` from a JWK and writes an RFC 7468
//!   PEM SubjectPublicKeyInfo.
//! - [`normalize_jwks`] walks a JWKS, decodes the leaf certificate of every
//!   RSA entry with an `x5c` chain and writes its `n`/`e` back into the entry.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwkpem::{convert_jwk_to_pem, JwksNormalizer};
//!
//! let pem = convert_jwk_to_pem(jwk_json)?;
//!
//! let jwks = JwksNormalizer::new()
//!     .overwrite_existing(false)
//!     .normalize(jwks_json)?;
//! ```
//!
//! ## Conversion Flow
//!
//! ```text
//! JWK JSON ─► Jwk ─► RsaPublicKey ─► SubjectPublicKeyInfo ─► PEM
//!                        ▲
//! x5c leaf (Base64 DER) ─┘ ─► n / e written back into the JWKS entry
//! ```
//!
//! ## Host Integration
//!
//! The [`callout`] module wraps both operations for gateway-style hosts that
//! exchange data through named flow variables and report failures through
//! `jwks_error` / `jwks_exception` variables instead of return values.
//!
//! ## Limits
//!
//! Inputs above [`limits::MAX_INPUT_SIZE`] and moduli above
//! [`limits::MAX_RSA_MODULUS_SIZE`] bytes are rejected before any work is done.
//!
//! ## References
//!
//! - [RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517) - JSON Web Key (JWK)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518) - JSON Web Algorithms (JWA)
//! - [RFC 5280](https://datatracker.ietf.org/doc/html/rfc5280) - X.509 Certificates
//! - [RFC 7468](https://datatracker.ietf.org/doc/html/rfc7468) - Textual Encodings (PEM)

// Core modules
pub mod error;
pub mod limits;
pub mod utils;

// Keys and key sets
pub mod jwks;
pub mod keys;
pub mod pem;

// Host integration
pub mod callout;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use jwks::{normalize_jwks, Jwk, JwksNormalizer};
pub use keys::RsaPublicKey;
pub use pem::{convert_jwk_to_pem, encode_public_key_pem};
