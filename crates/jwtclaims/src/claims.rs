//! Registered JWT claims and the claim set model
//!
//! A [`ClaimSet`] holds any subset of the eight registered claims. Every
//! conversion between a claim and its wire key goes through one static table,
//! so serialization, deserialization and validation always agree on the
//! mapping.

use crate::algorithm::Algorithm;
use crate::codec::{Codec, JsonWebTokenCodec};
use crate::error::CodecError;
use crate::key::Key;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Flat wire representation of a claims object (wire key to scalar value)
pub type WireMap = Map<String, Value>;

/// Registered claim
///
/// Variants are ordered as in the claim table; iteration over a [`ClaimSet`]
/// follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Claim {
    /// Issuer (iss) - identifies the principal that issued the JWT
    Issuer,
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    Subject,
    /// Audience (aud) - identifies the recipients that the JWT is intended for
    Audience,
    /// Expiration Time (exp) - the token is invalid on or after this instant
    ExpirationTime,
    /// Not Before (nbf) - the token is invalid before this instant
    NotBefore,
    /// Issued At (iat) - identifies the time at which the JWT was issued
    IssuedAt,
    /// JWT ID (jti) - provides a unique identifier for the JWT
    JwtId,
    /// Type (typ) - application-defined token type
    Type,
}

/// Claim table: claim, field name, wire key
const CLAIM_TABLE: [(Claim, &str, &str); 8] = [
    (Claim::Issuer, "issuer", "iss"),
    (Claim::Subject, "subject", "sub"),
    (Claim::Audience, "audience", "aud"),
    (Claim::ExpirationTime, "expiration_time", "exp"),
    (Claim::NotBefore, "not_before", "nbf"),
    (Claim::IssuedAt, "issued_at", "iat"),
    (Claim::JwtId, "jwt_id", "jti"),
    (Claim::Type, "token_type", "typ"),
];

impl Claim {
    /// All registered claims in table order
    pub const ALL: [Claim; 8] = [
        Claim::Issuer,
        Claim::Subject,
        Claim::Audience,
        Claim::ExpirationTime,
        Claim::NotBefore,
        Claim::IssuedAt,
        Claim::JwtId,
        Claim::Type,
    ];

    const fn entry(self) -> (Claim, &'static str, &'static str) {
        CLAIM_TABLE[self as usize]
    }

    /// Wire key used in the token payload
    pub const fn wire_key(self) -> &'static str {
        self.entry().2
    }

    /// Field name on [`ClaimSet`]
    pub const fn field_name(self) -> &'static str {
        self.entry().1
    }

    /// Look up a claim by its wire key
    pub fn from_wire_key(key: &str) -> Option<Self> {
        CLAIM_TABLE
            .iter()
            .find(|(_, _, wire)| *wire == key)
            .map(|(claim, _, _)| *claim)
    }

    /// Whether the claim carries a Unix timestamp
    pub const fn is_temporal(self) -> bool {
        matches!(
            self,
            Claim::ExpirationTime | Claim::NotBefore | Claim::IssuedAt
        )
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_key())
    }
}

macro_rules! string_claim {
    ($claim:ident, $get:ident, $with:ident, $set:ident) => {
        #[doc = concat!("Get the `", stringify!($get), "` claim, if set to a string")]
        pub fn $get(&self) -> Option<&str> {
            self.get(Claim::$claim).and_then(Value::as_str)
        }

        #[doc = concat!("Set the `", stringify!($get), "` claim")]
        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.set(Claim::$claim, Value::String(value.into()));
            self
        }

        #[doc = concat!("Set or unset the `", stringify!($get), "` claim")]
        pub fn $set<S: Into<String>>(&mut self, value: Option<S>) -> &mut Self {
            self.set(Claim::$claim, value.map(|v| Value::String(v.into())));
            self
        }
    };
}

macro_rules! time_claim {
    ($claim:ident, $get:ident, $with:ident, $set:ident) => {
        #[doc = concat!("Get the `", stringify!($get), "` claim as a Unix timestamp")]
        pub fn $get(&self) -> Option<i64> {
            self.get(Claim::$claim).and_then(Value::as_i64)
        }

        #[doc = concat!("Set the `", stringify!($get), "` claim (seconds since Unix epoch)")]
        pub fn $with(mut self, value: i64) -> Self {
            self.set(Claim::$claim, Value::from(value));
            self
        }

        #[doc = concat!("Set or unset the `", stringify!($get), "` claim")]
        pub fn $set(&mut self, value: Option<i64>) -> &mut Self {
            self.set(Claim::$claim, value.map(Value::from));
            self
        }
    };
}

/// A JWT claims object restricted to the registered claims
///
/// Typed getters return `None` both for unset claims and for claims that were
/// decoded with an unexpected JSON type; [`ClaimSet::get`] returns the raw
/// value in the latter case. A stored value is never JSON `null`.
///
/// # Examples
///
/// ```
/// use jwtclaims::{Claim, ClaimSet};
/// use serde_json::json;
///
/// let claims = ClaimSet::new()
///     .with_subject("user123")
///     .with_issuer("https://auth.example.com")
///     .with_expiration_time(1_700_000_030);
///
/// let wire = claims.to_wire_map();
/// assert_eq!(wire["sub"], "user123");
/// assert!(!wire.contains_key("aud"));
/// assert_eq!(ClaimSet::from_decoded(&wire), claims);
/// assert_eq!(claims.get(Claim::ExpirationTime), Some(&json!(1_700_000_030)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSet {
    values: BTreeMap<Claim, Value>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    string_claim!(Issuer, issuer, with_issuer, set_issuer);
    string_claim!(Subject, subject, with_subject, set_subject);
    string_claim!(Audience, audience, with_audience, set_audience);
    time_claim!(
        ExpirationTime,
        expiration_time,
        with_expiration_time,
        set_expiration_time
    );
    time_claim!(NotBefore, not_before, with_not_before, set_not_before);
    time_claim!(IssuedAt, issued_at, with_issued_at, set_issued_at);
    string_claim!(JwtId, jwt_id, with_jwt_id, set_jwt_id);
    string_claim!(Type, token_type, with_token_type, set_token_type);

    /// Raw value of a claim
    pub fn get(&self, claim: Claim) -> Option<&Value> {
        self.values.get(&claim)
    }

    /// Set or unset a claim without type checks
    ///
    /// `None` and JSON `null` both unset the claim.
    pub fn set(&mut self, claim: Claim, value: impl Into<Option<Value>>) -> &mut Self {
        match value.into() {
            Some(Value::Null) | None => {
                self.values.remove(&claim);
            }
            Some(value) => {
                self.values.insert(claim, value);
            }
        }
        self
    }

    /// Iterate over the claims that are set, in table order
    pub fn iter(&self) -> impl Iterator<Item = (Claim, &Value)> {
        self.values.iter().map(|(claim, value)| (*claim, value))
    }

    /// Number of claims that are set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no claim is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Wire representation containing only the claims that are set
    pub fn to_wire_map(&self) -> WireMap {
        self.iter()
            .map(|(claim, value)| (claim.wire_key().to_string(), value.clone()))
            .collect()
    }

    /// Build a claim set from a decoded claims object
    pub fn from_decoded(decoded: &WireMap) -> Self {
        let mut claims = Self::new();
        claims.merge_decoded(decoded);
        claims
    }

    /// Copy every registered claim found in `decoded` into this set
    ///
    /// Unknown keys are ignored. Values are stored as they are, without type
    /// coercion; a `null` value unsets the claim.
    pub fn merge_decoded(&mut self, decoded: &WireMap) -> &mut Self {
        for (key, value) in decoded {
            match Claim::from_wire_key(key) {
                Some(claim) => {
                    self.set(claim, value.clone());
                }
                None => tracing::trace!(claim = %key, "ignoring unregistered claim"),
            }
        }
        self
    }

    /// Encode and sign the claim set with the default codec
    pub fn encode(&self, key: &Key, algorithm: Algorithm) -> Result<String, CodecError> {
        self.encode_with(&JsonWebTokenCodec::default(), key, algorithm)
    }

    /// Encode and sign the claim set with the given codec
    pub fn encode_with<C: Codec + ?Sized>(
        &self,
        codec: &C,
        key: &Key,
        algorithm: Algorithm,
    ) -> Result<String, CodecError> {
        codec.encode(&self.to_wire_map(), key, algorithm)
    }
}

impl From<&WireMap> for ClaimSet {
    fn from(decoded: &WireMap) -> Self {
        Self::from_decoded(decoded)
    }
}

impl Serialize for ClaimSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_wire_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClaimSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let decoded = WireMap::deserialize(deserializer)?;
        Ok(Self::from_decoded(&decoded))
    }
}
