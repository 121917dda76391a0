//! JWT codec seam
//!
//! Signing, signature verification and the compact token format are delegated
//! to a [`Codec`]. The crate ships [`JsonWebTokenCodec`], backed by the
//! `jsonwebtoken` crate; tests and alternative backends can provide their own.

use crate::algorithm::Algorithm;
use crate::claims::{Claim, WireMap};
use crate::error::{CodecError, Error, Result};
use crate::key::Key;
use crate::limits::{MAX_LEEWAY_SECONDS, MAX_TOKEN_LENGTH};
use crate::utils::clock::{current_timestamp, with_leeway, without_leeway};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Header, Validation};
use serde_json::Value;
use std::collections::HashSet;

/// Encodes claims into signed tokens and decodes tokens back into claims
pub trait Codec {
    /// Serialize and sign `claims` with `key` using `algorithm`
    fn encode(
        &self,
        claims: &WireMap,
        key: &Key,
        algorithm: Algorithm,
    ) -> std::result::Result<String, CodecError>;

    /// Verify `token` with `key` and return its claims object
    ///
    /// Tokens signed with an algorithm outside `allowed` must be rejected.
    fn decode(
        &self,
        token: &str,
        key: &Key,
        allowed: &[Algorithm],
    ) -> std::result::Result<WireMap, CodecError>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn encode(
        &self,
        claims: &WireMap,
        key: &Key,
        algorithm: Algorithm,
    ) -> std::result::Result<String, CodecError> {
        (**self).encode(claims, key, algorithm)
    }

    fn decode(
        &self,
        token: &str,
        key: &Key,
        allowed: &[Algorithm],
    ) -> std::result::Result<WireMap, CodecError> {
        (**self).decode(token, key, allowed)
    }
}

/// Codec backed by the `jsonwebtoken` crate
///
/// Decoding checks the signature, the algorithm allow-list and the temporal
/// claims `exp`, `nbf` and `iat`. Temporal claims are optional; when present
/// they must be numeric and are enforced with the configured leeway
/// (default: 0 seconds). A token is invalid on and after its `exp` second.
#[derive(Debug, Clone, Default)]
pub struct JsonWebTokenCodec {
    leeway_seconds: u64,
}

impl JsonWebTokenCodec {
    /// Create a codec with zero leeway
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec that tolerates `seconds` of clock skew on temporal claims
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if `seconds` exceeds 300.
    pub fn with_leeway(seconds: u64) -> Result<Self> {
        if seconds > MAX_LEEWAY_SECONDS {
            return Err(Error::Configuration(format!(
                "Leeway too large: {seconds} seconds (maximum: {MAX_LEEWAY_SECONDS} seconds)"
            )));
        }
        Ok(Self {
            leeway_seconds: seconds,
        })
    }

    /// Configured leeway in seconds
    pub fn leeway(&self) -> u64 {
        self.leeway_seconds
    }

    fn validation(&self, allowed: &[Algorithm]) -> std::result::Result<Validation, CodecError> {
        let first = allowed.first().ok_or_else(|| CodecError::AlgorithmNotAllowed {
            allowed: Vec::new(),
        })?;

        let mut validation = Validation::new(first.to_jsonwebtoken());
        validation.algorithms = allowed.iter().map(|alg| alg.to_jsonwebtoken()).collect();
        validation.required_spec_claims = HashSet::new();
        // Temporal claims are checked on signed values in `check_temporal`;
        // jsonwebtoken reads them as u64 and skips anything else.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        // Audience is compared against the expected claim set, not here.
        validation.validate_aud = false;
        Ok(validation)
    }

    /// Enforce `exp`, `nbf` and `iat` against `now`
    ///
    /// A token is expired once `now - leeway >= exp`, not yet valid while
    /// `nbf > now + leeway`, and rejected when `iat > now + leeway`.
    fn check_temporal(&self, claims: &WireMap, now: i64) -> std::result::Result<(), CodecError> {
        if let Some(expiration) = timestamp(claims, Claim::ExpirationTime)? {
            if without_leeway(now, self.leeway_seconds) >= expiration {
                return Err(CodecError::Expired);
            }
        }

        if let Some(not_before) = timestamp(claims, Claim::NotBefore)? {
            if not_before > with_leeway(now, self.leeway_seconds) {
                return Err(CodecError::NotYetValid);
            }
        }

        if let Some(issued_at) = timestamp(claims, Claim::IssuedAt)? {
            if issued_at > with_leeway(now, self.leeway_seconds) {
                return Err(CodecError::IssuedInFuture { issued_at, now });
            }
        }

        Ok(())
    }
}

/// Read a temporal claim as whole seconds
///
/// Fractional values are truncated toward negative infinity. A present value
/// that is not a number is malformed.
fn timestamp(claims: &WireMap, claim: Claim) -> std::result::Result<Option<i64>, CodecError> {
    match claims.get(claim.wire_key()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(seconds) => Ok(Some(seconds)),
            // u64 above i64::MAX and floats; the cast saturates
            None => Ok(number.as_f64().map(|seconds| seconds.floor() as i64)),
        },
        Some(other) => Err(CodecError::Malformed(format!(
            "'{claim}' must be a numeric timestamp, found {other}"
        ))),
    }
}

impl Codec for JsonWebTokenCodec {
    fn encode(
        &self,
        claims: &WireMap,
        key: &Key,
        algorithm: Algorithm,
    ) -> std::result::Result<String, CodecError> {
        let encoding_key = key.encoding_key(algorithm)?;
        let token = jsonwebtoken::encode(
            &Header::new(algorithm.to_jsonwebtoken()),
            claims,
            &encoding_key,
        )
        .map_err(|err| map_error(err, &[algorithm]))?;

        tracing::trace!(%algorithm, claims = claims.len(), "encoded token");
        Ok(token)
    }

    fn decode(
        &self,
        token: &str,
        key: &Key,
        allowed: &[Algorithm],
    ) -> std::result::Result<WireMap, CodecError> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(CodecError::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let validation = self.validation(allowed)?;
        // jsonwebtoken rejects allow-lists that mix key families
        let decoding_key = key.decoding_key(allowed[0])?;

        let data = jsonwebtoken::decode::<WireMap>(token, &decoding_key, &validation)
            .map_err(|err| map_error(err, allowed))?;

        self.check_temporal(&data.claims, current_timestamp())?;
        Ok(data.claims)
    }
}

/// Translate a `jsonwebtoken` failure into a [`CodecError`]
fn map_error(err: jsonwebtoken::errors::Error, allowed: &[Algorithm]) -> CodecError {
    match err.kind() {
        ErrorKind::InvalidToken => CodecError::Malformed("invalid token structure".into()),
        ErrorKind::Base64(e) => CodecError::Malformed(format!("Base64URL decoding failed: {e}")),
        ErrorKind::Json(e) => CodecError::Malformed(format!("JSON parsing failed: {e}")),
        ErrorKind::Utf8(e) => CodecError::Malformed(format!("invalid UTF-8: {e}")),
        ErrorKind::InvalidSignature => CodecError::SignatureInvalid,
        ErrorKind::InvalidAlgorithm | ErrorKind::MissingAlgorithm => {
            CodecError::AlgorithmNotAllowed {
                allowed: allowed.iter().map(|alg| alg.to_string()).collect(),
            }
        }
        ErrorKind::ExpiredSignature => CodecError::Expired,
        ErrorKind::ImmatureSignature => CodecError::NotYetValid,
        ErrorKind::InvalidRsaKey(msg) => CodecError::InvalidKey(msg.clone()),
        ErrorKind::InvalidKeyFormat | ErrorKind::InvalidEcdsaKey => {
            CodecError::InvalidKey(err.to_string())
        }
        ErrorKind::RsaFailedSigning | ErrorKind::Crypto(_) => {
            CodecError::Encoding(err.to_string())
        }
        _ => CodecError::Other(err.to_string()),
    }
}
