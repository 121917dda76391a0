//! Reference implementation helpers for parity tests
//!
//! Tokens are minted and checked with `jsonwebtoken` directly, bypassing
//! jwtclaims, so both sides of a round trip can be compared.

#![allow(dead_code)]

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

pub const SECRET: &[u8] = b"parity-shared-secret-0123456789abcdef";
pub const RSA_PRIVATE_PEM: &[u8] = include_bytes!("../fixtures/rsa_private_2048.pem");
pub const RSA_PUBLIC_PEM: &[u8] = include_bytes!("../fixtures/rsa_public_2048.pem");

/// Registered claims as a plain serde struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl ReferenceClaims {
    /// Claims valid for the next five minutes
    pub fn valid_for(subject: &str) -> Self {
        let now = now();
        Self {
            sub: Some(subject.into()),
            iat: Some(now),
            nbf: Some(now),
            exp: Some(now + 300),
            ..Self::default()
        }
    }
}

pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Mint a token with `jsonwebtoken`
pub fn reference_encode(claims: &ReferenceClaims, algorithm: jsonwebtoken::Algorithm) -> String {
    let key = match algorithm {
        jsonwebtoken::Algorithm::RS256 => EncodingKey::from_rsa_pem(RSA_PRIVATE_PEM).unwrap(),
        _ => EncodingKey::from_secret(SECRET),
    };
    jsonwebtoken::encode(&Header::new(algorithm), claims, &key).unwrap()
}

/// Decode a token with `jsonwebtoken`, enforcing `exp` and `nbf` without leeway
pub fn reference_decode(
    token: &str,
    algorithm: jsonwebtoken::Algorithm,
) -> jsonwebtoken::errors::Result<ReferenceClaims> {
    let key = match algorithm {
        jsonwebtoken::Algorithm::RS256 => DecodingKey::from_rsa_pem(RSA_PUBLIC_PEM)?,
        _ => DecodingKey::from_secret(SECRET),
    };
    let mut validation = Validation::new(algorithm);
    validation.leeway = 0;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp"]);
    jsonwebtoken::decode::<ReferenceClaims>(token, &key, &validation).map(|data| data.claims)
}
