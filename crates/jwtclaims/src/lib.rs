//! Issue and validate JWT claim sets.
//!
//! A [`ClaimSet`] models the eight registered claims (`iss`, `sub`, `aud`,
//! `exp`, `nbf`, `iat`, `jti`, `typ`). The [`Builder`] produces identity-only
//! and short-lived request claim sets, and the [`Validator`] decodes a token
//! and checks it against an expected claim set.
//!
//! Signing and the compact token format are handled by a [`Codec`]; the
//! default [`JsonWebTokenCodec`] is backed by the `jsonwebtoken` crate.
//!
//! ```
//! use jwtclaims::{Algorithm, Builder, Error, Identity, Key, Validator};
//!
//! let key = Key::from("shared-secret");
//! let token = Builder::new_request_token(Identity::new("u1").issuer("A"))
//!     .encode(&key, Algorithm::HS256)?;
//!
//! let validator = Validator::new();
//! let expected = Builder::new_matching_token(Identity::new("u1").issuer("A"));
//! validator.validate_with_algorithm(&token, &key, &expected, Algorithm::HS256)?;
//!
//! let other = Builder::new_matching_token("u2");
//! let err = validator
//!     .validate_with_algorithm(&token, &key, &other, Algorithm::HS256)
//!     .unwrap_err();
//! assert!(matches!(err, Error::ClaimMismatch { .. }));
//! assert_eq!(err.public_message(), "Provided JWT was invalid");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod builder;
pub(crate) mod claims;
pub(crate) mod codec;
pub(crate) mod key;
pub(crate) mod utils;
pub(crate) mod validator;

// Public Interface
pub use algorithm::Algorithm;
pub use builder::{Builder, DEFAULT_EXPIRATION_SECONDS, Identity};
pub use claims::{Claim, ClaimSet, WireMap};
pub use codec::{Codec, JsonWebTokenCodec};
pub use error::{CodecError, Error, PUBLIC_MESSAGE, Result};
pub use key::Key;
pub use validator::Validator;

pub(crate) mod limits;
