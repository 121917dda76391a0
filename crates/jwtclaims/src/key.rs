//! Key material for signing and verification
//!
//! HMAC algorithms sign and verify with the same shared secret. RS256 signs
//! with a PEM-encoded private key and verifies with the matching PEM-encoded
//! public key.

use crate::algorithm::Algorithm;
use crate::error::CodecError;
use jsonwebtoken::{DecodingKey, EncodingKey};

/// A key that can be used to encode or decode a token
#[derive(Clone, PartialEq, Eq)]
pub enum Key {
    /// Shared secret for HMAC algorithms
    Secret(Vec<u8>),

    /// PEM-encoded RSA private key (PKCS#1 or PKCS#8), used for signing
    RsaPrivatePem(Vec<u8>),

    /// PEM-encoded RSA public key, used for verification
    RsaPublicPem(Vec<u8>),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn secret(secret: impl Into<Vec<u8>>) -> Self {
        Key::Secret(secret.into())
    }

    /// Create an RSA signing key from PEM
    pub fn rsa_private_pem(pem: impl Into<Vec<u8>>) -> Self {
        Key::RsaPrivatePem(pem.into())
    }

    /// Create an RSA verification key from PEM
    pub fn rsa_public_pem(pem: impl Into<Vec<u8>>) -> Self {
        Key::RsaPublicPem(pem.into())
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Secret(_) => "Symmetric",
            Key::RsaPrivatePem(_) => "RSA private",
            Key::RsaPublicPem(_) => "RSA public",
        }
    }

    pub(crate) fn encoding_key(&self, algorithm: Algorithm) -> Result<EncodingKey, CodecError> {
        match (self, algorithm.is_symmetric()) {
            (Key::Secret(secret), true) => Ok(EncodingKey::from_secret(secret)),
            (Key::RsaPrivatePem(pem), false) => EncodingKey::from_rsa_pem(pem)
                .map_err(|err| CodecError::InvalidKey(err.to_string())),
            _ => Err(self.mismatch(algorithm, "signing")),
        }
    }

    pub(crate) fn decoding_key(&self, algorithm: Algorithm) -> Result<DecodingKey, CodecError> {
        match (self, algorithm.is_symmetric()) {
            (Key::Secret(secret), true) => Ok(DecodingKey::from_secret(secret)),
            (Key::RsaPublicPem(pem), false) => DecodingKey::from_rsa_pem(pem)
                .map_err(|err| CodecError::InvalidKey(err.to_string())),
            _ => Err(self.mismatch(algorithm, "verification")),
        }
    }

    fn mismatch(&self, algorithm: Algorithm, purpose: &str) -> CodecError {
        CodecError::InvalidKey(format!(
            "{} key cannot be used for {algorithm} {purpose}",
            self.key_type()
        ))
    }
}

// Key material never appears in logs.
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Key").field(&self.key_type()).finish()
    }
}

impl From<&str> for Key {
    fn from(secret: &str) -> Self {
        Key::secret(secret.as_bytes())
    }
}

impl From<&[u8]> for Key {
    fn from(secret: &[u8]) -> Self {
        Key::secret(secret)
    }
}

impl From<Vec<u8>> for Key {
    fn from(secret: Vec<u8>) -> Self {
        Key::Secret(secret)
    }
}
