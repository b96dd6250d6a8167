//! Size limit constants for input validation

/// Maximum size for a JWK or JWKS JSON document (512KB)
pub const MAX_INPUT_SIZE: usize = 512 * 1024;

/// Maximum size for a decoded RSA modulus (8192 bytes)
/// 65536-bit keys are far beyond practical use but still accepted
pub const MAX_RSA_MODULUS_SIZE: usize = 8192;

/// Maximum RSA modulus length in bits
pub(crate) const MAX_RSA_MODULUS_BITS: usize = MAX_RSA_MODULUS_SIZE * 8;
