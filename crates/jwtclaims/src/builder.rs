//! Factories for common claim sets
//!
//! Two shapes cover most uses: an identity-only set (typically the expected
//! claims handed to the validator) and a short-lived request token stamped
//! with `iat`, `nbf` and `exp`.

use crate::claims::ClaimSet;
use crate::utils::clock::current_timestamp;

/// Default lifetime of a request token in seconds
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 30;

/// Identity claims of a token: subject plus optional issuer, audience, ID and type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub jwt_id: Option<String>,
    pub token_type: Option<String>,
}

impl Identity {
    /// Create an identity for `subject`
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Set the issuer
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the audience
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the JWT ID
    pub fn jwt_id(mut self, jwt_id: impl Into<String>) -> Self {
        self.jwt_id = Some(jwt_id.into());
        self
    }

    /// Set the token type
    pub fn token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self
    }

    fn apply(self, claims: &mut ClaimSet) {
        claims
            .set_subject(Some(self.subject))
            .set_issuer(self.issuer)
            .set_audience(self.audience)
            .set_jwt_id(self.jwt_id)
            .set_token_type(self.token_type);
    }
}

impl From<&str> for Identity {
    fn from(subject: &str) -> Self {
        Self::new(subject)
    }
}

impl From<String> for Identity {
    fn from(subject: String) -> Self {
        Self::new(subject)
    }
}

/// Claim set factory
pub struct Builder;

impl Builder {
    /// Claim set with identity claims only; no temporal claims are set
    ///
    /// ```
    /// use jwtclaims::{Builder, Identity};
    ///
    /// let expected = Builder::new_matching_token(Identity::new("u1").issuer("issuerA"));
    /// assert_eq!(expected.subject(), Some("u1"));
    /// assert_eq!(expected.issuer(), Some("issuerA"));
    /// assert_eq!(expected.expiration_time(), None);
    /// ```
    pub fn new_matching_token(identity: impl Into<Identity>) -> ClaimSet {
        let mut claims = ClaimSet::new();
        identity.into().apply(&mut claims);
        claims
    }

    /// Request token expiring after [`DEFAULT_EXPIRATION_SECONDS`]
    pub fn new_request_token(identity: impl Into<Identity>) -> ClaimSet {
        Self::new_request_token_expiring_in(identity, DEFAULT_EXPIRATION_SECONDS)
    }

    /// Request token expiring after `expiration_in_seconds`
    ///
    /// Zero or negative lifetimes are not rejected here; such tokens fail
    /// validation as expired.
    pub fn new_request_token_expiring_in(
        identity: impl Into<Identity>,
        expiration_in_seconds: i64,
    ) -> ClaimSet {
        let mut claims = Self::new_claim_set_expiring_in(expiration_in_seconds);
        identity.into().apply(&mut claims);
        tracing::debug!(
            subject = ?claims.subject(),
            exp = ?claims.expiration_time(),
            "built request token"
        );
        claims
    }

    /// Claim set with `iat = nbf = now` and `exp = now + expiration_in_seconds`
    pub fn new_claim_set_expiring_in(expiration_in_seconds: i64) -> ClaimSet {
        Self::stamped_at(current_timestamp(), expiration_in_seconds)
    }

    pub(crate) fn stamped_at(issued_at: i64, expiration_in_seconds: i64) -> ClaimSet {
        ClaimSet::new()
            .with_issued_at(issued_at)
            .with_not_before(issued_at)
            .with_expiration_time(issued_at.saturating_add(expiration_in_seconds))
    }
}
