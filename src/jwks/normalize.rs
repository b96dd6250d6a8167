//! JWKS `x5c` normalization
//!
//! Some JWKS providers publish RSA keys as an `x5c` certificate chain only,
//! leaving out the `n` and `e` members most JWK consumers require. The
//! normalizer reads the RSA public key from each such entry's leaf
//! certificate and writes `n`/`e` back into the entry.
//!
//! The document is edited in place as a `serde_json::Value`, so unknown
//! members and member order survive the round trip.

use crate::error::{Error, Result};
use crate::jwks::{jwk, x5c};
use crate::limits::MAX_INPUT_SIZE;
use crate::utils::bounds::validate_input_size;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Outcome for a single JWKS entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryAction {
    /// `n`/`e` written from the leaf certificate
    Populated,
    /// Entry left untouched
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    NotRsa,
    NoCertificateChain,
    HasComponents,
}

/// Fills in `n`/`e` for RSA JWKS entries that only carry `x5c`
///
/// # Example
///
/// ```
/// use jwkpem::JwksNormalizer;
///
/// let jwks = r#"{"keys":[{"kty":"EC","crv":"P-256","x":"AA","y":"AA"}]}"#;
/// let out = JwksNormalizer::new().normalize(jwks)?;
/// assert_eq!(out, jwks);
/// # Ok::<(), jwkpem::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct JwksNormalizer {
    overwrite_existing: bool,
}

impl JwksNormalizer {
    /// Normalizer that leaves entries with usable `n`/`e` alone
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive `n`/`e` from `x5c` even when the entry already has them
    pub fn overwrite_existing(mut self, overwrite: bool) -> Self {
        self.overwrite_existing = overwrite;
        self
    }

    /// Normalize a JWKS document and re-serialize it
    ///
    /// # Errors
    ///
    /// - `Error::FormatInvalidJson` if the input is not a JSON object
    /// - `Error::FormatMissingField` if `keys` is absent
    /// - `Error::FormatInvalidField` if `keys`, an entry, or `x5c` has the wrong shape
    /// - a certificate error if a leaf certificate cannot be used
    ///
    /// No output is produced on error.
    pub fn normalize(&self, jwks: &str) -> Result<String> {
        validate_input_size(jwks, MAX_INPUT_SIZE)?;

        let mut document: Value =
            serde_json::from_str(jwks).map_err(|e| Error::FormatInvalidJson(e.to_string()))?;
        let envelope = document
            .as_object_mut()
            .ok_or_else(|| Error::FormatInvalidJson("JWKS must be a JSON object".into()))?;
        let keys = envelope
            .get_mut("keys")
            .ok_or_else(|| Error::FormatMissingField("keys".into()))?
            .as_array_mut()
            .ok_or_else(|| invalid_field("keys", "expected an array"))?;

        let mut populated = 0usize;
        for (index, entry) in keys.iter_mut().enumerate() {
            let entry = entry
                .as_object_mut()
                .ok_or_else(|| invalid_field(&format!("keys[{index}]"), "expected an object"))?;
            match self.normalize_entry(index, entry)? {
                EntryAction::Populated => populated += 1,
                EntryAction::Skipped(reason) => {
                    trace!(index, ?reason, "jwks entry left unchanged");
                }
            }
        }
        debug!(keys = keys.len(), populated, "normalized jwks");

        serde_json::to_string(&document).map_err(|e| Error::EncodingFailed(e.to_string()))
    }

    fn normalize_entry(&self, index: usize, entry: &mut Map<String, Value>) -> Result<EntryAction> {
        if !jwk::is_rsa(entry) {
            return Ok(EntryAction::Skipped(SkipReason::NotRsa));
        }

        let leaf = jwk::leaf_certificate(entry).map_err(|err| within_entry(index, err))?;
        let Some(leaf) = leaf else {
            return Ok(EntryAction::Skipped(SkipReason::NoCertificateChain));
        };
        if !self.overwrite_existing && jwk::has_rsa_components(entry) {
            return Ok(EntryAction::Skipped(SkipReason::HasComponents));
        }

        let key = x5c::rsa_key_from_x5c(leaf)?;
        debug!(
            index,
            kid = jwk::text_member(entry, "kid").unwrap_or_default(),
            bits = key.bits(),
            "populating n/e from x5c leaf certificate"
        );
        entry.insert("n".into(), Value::String(key.jwk_n()));
        entry.insert("e".into(), Value::String(key.jwk_e()));
        Ok(EntryAction::Populated)
    }
}

/// Normalize a JWKS document with the default policy
///
/// See [`JwksNormalizer::normalize`].
pub fn normalize_jwks(jwks: &str) -> Result<String> {
    JwksNormalizer::new().normalize(jwks)
}

fn invalid_field(field: &str, reason: &str) -> Error {
    Error::FormatInvalidField {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Prefix a member error with the entry's position, e.g. `keys[2].x5c`
fn within_entry(index: usize, err: Error) -> Error {
    match err {
        Error::FormatInvalidField { field, reason } => Error::FormatInvalidField {
            field: format!("keys[{index}].{field}"),
            reason,
        },
        other => other,
    }
}
