//! Claim set validation
//!
//! A token passes when the codec accepts it and every claim set on the
//! expected [`ClaimSet`] is present in the decoded token with a loosely equal
//! value.

use crate::algorithm::Algorithm;
use crate::claims::ClaimSet;
use crate::codec::{Codec, JsonWebTokenCodec};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::utils::loose::loose_eq;

/// JWT claim set validator
///
/// The validator decodes a token through its codec and then checks the
/// decoded claims against an expected [`ClaimSet`]. Only the claims set on the
/// expected side are checked; every other claim in the token, registered or
/// not, is accepted as is.
///
/// The validator holds no per-call state and can be shared across threads
/// when its codec can.
///
/// # Example
///
/// ```
/// use jwtclaims::{Algorithm, Builder, Identity, Key, Validator};
///
/// let key = Key::from("my-secret");
/// let token = Builder::new_request_token(Identity::new("user123").issuer("auth"))
///     .encode(&key, Algorithm::HS512)?;
///
/// let expected = Builder::new_matching_token(Identity::new("user123").issuer("auth"));
/// Validator::new().validate(&token, &key, &expected)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator<C = JsonWebTokenCodec> {
    codec: C,
}

impl Validator {
    /// Create a validator backed by [`JsonWebTokenCodec`] with zero leeway
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Codec> Validator<C> {
    /// Create a validator backed by `codec`
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// The codec used for decoding
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Validate a token signed with HS512
    ///
    /// # Errors
    ///
    /// See [`validate_with_algorithm`](Self::validate_with_algorithm).
    pub fn validate(&self, token: &str, key: &Key, expected: &ClaimSet) -> Result<()> {
        self.validate_with_algorithm(token, key, expected, Algorithm::default())
    }

    /// Validate a token signed with `algorithm`
    ///
    /// Only `algorithm` is allowed when decoding. Expected claims are checked
    /// in claim table order and validation stops at the first failure.
    ///
    /// # Errors
    ///
    /// - `Error::Codec` - The codec rejected the token (malformed, bad
    ///   signature, disallowed algorithm, expired, not yet valid)
    /// - `Error::ClaimMismatch` - An expected claim is missing or differs
    pub fn validate_with_algorithm(
        &self,
        token: &str,
        key: &Key,
        expected: &ClaimSet,
        algorithm: Algorithm,
    ) -> Result<()> {
        let decoded = self
            .codec
            .decode(token, key, &[algorithm])
            .inspect_err(|err| tracing::warn!(%algorithm, error = %err, "JWT decoding failed"))?;

        for (claim, expected_value) in expected.iter() {
            match decoded.get(claim.wire_key()) {
                Some(found) if !found.is_null() && loose_eq(expected_value, found) => continue,
                found => {
                    tracing::warn!(
                        %claim,
                        expected = %expected_value,
                        found = ?found,
                        "JWT claim verification failed"
                    );
                    return Err(Error::ClaimMismatch {
                        claim,
                        found: found.cloned(),
                    });
                }
            }
        }

        tracing::debug!(%algorithm, checked = expected.len(), "JWT validated");
        Ok(())
    }
}
