//! JSON Web Key Set (JWKS) module
//!
//! Parsing of single JWKs and normalization of JWKS documents whose RSA
//! entries only carry an `x5c` certificate chain, as described in
//! [RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517).

mod jwk;
mod normalize;
pub mod x5c;

pub use jwk::*;
pub use normalize::*;
