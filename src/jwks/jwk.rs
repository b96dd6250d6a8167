//! JWK (JSON Web Key) member access and conversion
//!
//! A JWK is kept as its raw JSON object. Members are read on demand and
//! only the ones a caller asks for are type-checked, so unrelated members
//! of any JSON type pass through untouched.

use crate::error::{Error, Result};
use crate::keys::RsaPublicKey;
use crate::utils::base64url;
use serde_json::{Map, Value};

/// JSON Web Key (JWK) structure
///
/// All members are optional to handle various JWK formats gracefully.
/// Validation happens during conversion to [`RsaPublicKey`], not during parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Jwk {
    members: Map<String, Value>,
}

impl Jwk {
    /// Parse a single JWK from JSON text
    ///
    /// # Errors
    ///
    /// Returns `Error::FormatInvalidJson` if the input is not a JSON object.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| Error::FormatInvalidJson(e.to_string()))?;
        match value {
            Value::Object(members) => Ok(Self { members }),
            _ => Err(Error::FormatInvalidJson("JWK must be a JSON object".into())),
        }
    }

    /// Wrap an already-parsed JSON object
    pub fn from_members(members: Map<String, Value>) -> Self {
        Self { members }
    }

    /// Raw JSON members
    pub fn members(&self) -> &Map<String, Value> {
        &self.members
    }

    /// Key type, when `kty` is a string
    pub fn kty(&self) -> Option<&str> {
        text_member(&self.members, "kty")
    }

    /// Key ID, when `kid` is a string
    pub fn kid(&self) -> Option<&str> {
        text_member(&self.members, "kid")
    }

    /// Whether `kty` is `RSA`
    pub fn is_rsa(&self) -> bool {
        is_rsa(&self.members)
    }

    /// Leaf certificate of the `x5c` chain, if any
    ///
    /// # Errors
    ///
    /// Returns `Error::FormatInvalidField` if `x5c` is not an array or its
    /// first element is not a string.
    pub fn leaf_certificate(&self) -> Result<Option<&str>> {
        leaf_certificate(&self.members)
    }

    /// Whether `n` and `e` are both strings that decode to non-empty values
    pub fn has_rsa_components(&self) -> bool {
        has_rsa_components(&self.members)
    }

    /// Convert the `n`/`e` members to an RSA public key
    ///
    /// `kty` is not consulted; any JWK carrying `n` and `e` is accepted.
    ///
    /// # Errors
    ///
    /// - `Error::FormatMissingField` if `n` or `e` is absent or null
    /// - `Error::FormatInvalidField` if either is not a Base64URL string
    /// - `Error::FormatInvalidKey` if the values do not form an RSA key
    pub fn to_rsa_key(&self) -> Result<RsaPublicKey> {
        let n = required_string(&self.members, "n")?;
        let e = required_string(&self.members, "e")?;
        RsaPublicKey::from_jwk_members(n, e)
    }
}

/// `kty == "RSA"`; a non-string `kty` is not RSA
pub(crate) fn is_rsa(members: &Map<String, Value>) -> bool {
    text_member(members, "kty") == Some("RSA")
}

/// String value of `name`, ignoring members of other types
pub(crate) fn text_member<'a>(members: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    members.get(name).and_then(Value::as_str)
}

/// First element of `x5c`; absent, null or empty chains give `None`
pub(crate) fn leaf_certificate(members: &Map<String, Value>) -> Result<Option<&str>> {
    let chain = match members.get("x5c") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(chain)) => chain,
        Some(_) => return Err(invalid_field("x5c", "expected an array")),
    };
    match chain.first() {
        None => Ok(None),
        Some(Value::String(leaf)) => Ok(Some(leaf.as_str())),
        Some(_) => Err(invalid_field("x5c[0]", "expected a string")),
    }
}

/// `n` and `e` are both strings holding non-empty Base64URL data
pub(crate) fn has_rsa_components(members: &Map<String, Value>) -> bool {
    let usable = |name| {
        text_member(members, name)
            .and_then(|value| base64url::decode_bytes(value).ok())
            .is_some_and(|bytes| !bytes.is_empty())
    };
    usable("n") && usable("e")
}

fn required_string<'a>(members: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    match members.get(name) {
        None | Some(Value::Null) => Err(Error::FormatMissingField(name.into())),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(invalid_field(name, "expected a string")),
    }
}

fn invalid_field(field: &str, reason: &str) -> Error {
    Error::FormatInvalidField {
        field: field.into(),
        reason: reason.into(),
    }
}
