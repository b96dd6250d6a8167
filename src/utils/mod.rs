pub mod base64url;
pub mod bigint;

pub(crate) mod bounds;
pub(crate) mod der;

pub use bigint::{decode_unsigned, encode_unsigned, encode_unsigned_standard};
