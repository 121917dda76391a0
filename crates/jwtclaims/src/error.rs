//! Errors for jwtclaims

use crate::claims::Claim;
use serde_json::Value;
use thiserror::Error;

/// Message returned to unauthenticated callers for every token failure
pub const PUBLIC_MESSAGE: &str = "Provided JWT was invalid";

/// Failures raised by the JWT codec while encoding or decoding a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: {0}")]
    Malformed(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Algorithm not allowed. Allowed: {allowed:?}")]
    AlgorithmNotAllowed { allowed: Vec<String> },

    // ============================================================================
    // Temporal Errors
    // ============================================================================
    #[error("Token has expired")]
    Expired,

    #[error("Token is not valid yet")]
    NotYetValid,

    #[error("Token issued in future at {issued_at} (now: {now})")]
    IssuedInFuture { issued_at: i64, now: i64 },

    // ============================================================================
    // Key & Encoding Errors
    // ============================================================================
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Token encoding failed: {0}")]
    Encoding(String),

    #[error("Codec failure: {0}")]
    Other(String),
}

/// jwtclaims Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The codec rejected the token. The specific cause is kept as the source.
    #[error("Provided JWT was invalid")]
    Codec(#[from] CodecError),

    /// An expected claim was absent from the decoded token or did not match
    #[error("Provided JWT was invalid because the '{claim}' verification failed")]
    ClaimMismatch { claim: Claim, found: Option<Value> },

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Message safe to hand to the caller that presented the token.
    ///
    /// Token failures collapse into one message so that a client cannot tell a
    /// bad signature apart from a wrong claim. Use `Display` or the error source
    /// for logging.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::Codec(_) | Error::ClaimMismatch { .. } => PUBLIC_MESSAGE,
            Error::Configuration(_) => "Token validation is misconfigured",
        }
    }

    /// HTTP-equivalent classification of the failure
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Codec(_) | Error::ClaimMismatch { .. } => 401,
            Error::Configuration(_) => 500,
        }
    }

    /// The underlying codec failure, if the token was rejected by the codec
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            Error::Codec(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for jwtclaims operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codec_error_keeps_cause() {
        let err = Error::from(CodecError::Expired);
        assert_eq!(err.to_string(), "Provided JWT was invalid");
        assert_eq!(err.source().unwrap().to_string(), "Token has expired");
        assert_eq!(err.codec_error(), Some(&CodecError::Expired));
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_claim_mismatch_names_claim() {
        let err = Error::ClaimMismatch {
            claim: Claim::Subject,
            found: Some(Value::from("u1")),
        };
        assert_eq!(
            err.to_string(),
            "Provided JWT was invalid because the 'sub' verification failed"
        );
        assert_eq!(err.public_message(), PUBLIC_MESSAGE);
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_configuration_error() {
        let err = Error::Configuration("leeway too large".into());
        assert_eq!(err.status_code(), 500);
        assert!(err.codec_error().is_none());
    }
}
