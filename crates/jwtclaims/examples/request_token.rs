//! Issue a request token and validate it against an expected identity.
//!
//! Run with
//!
//! ```not_rust
//! RUST_LOG=jwtclaims=debug cargo run --example request_token
//! ```

use jwtclaims::{Algorithm, Builder, Identity, Key, Validator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("{}=debug,jwtclaims=debug", env!("CARGO_CRATE_NAME")).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me".into());
    let key = Key::from(secret.as_str());
    let identity = Identity::new("service-a")
        .issuer("https://auth.example.com")
        .audience("service-b");

    let token = Builder::new_request_token(identity.clone()).encode(&key, Algorithm::HS512)?;
    tracing::info!(%token, "issued request token");

    let validator = Validator::new();
    validator.validate(&token, &key, &Builder::new_matching_token(identity))?;
    tracing::info!("request token accepted");

    let stranger = Builder::new_matching_token(Identity::new("service-c"));
    if let Err(err) = validator.validate(&token, &key, &stranger) {
        tracing::info!(
            status = err.status_code(),
            message = err.public_message(),
            "rejected: {err}"
        );
    }

    Ok(())
}
