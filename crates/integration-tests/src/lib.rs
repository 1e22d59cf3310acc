//! Integration tests for Stockist.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database, migrate, and run the API
//! stockist migrate
//! cargo run -p stockist-api &
//!
//! # Run integration tests (they are #[ignore]d by default)
//! CLIENT_SECRET=... cargo test -p stockist-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a running server over HTTP and assume the migrations
//! have been applied. `STOCKIST_BASE_URL` overrides the default
//! `http://localhost:3000`; `CLIENT_SECRET` must match the server's so the
//! tests can mint tokens for the guarded endpoints.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("STOCKIST_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Mint a token the server under test will accept.
///
/// Reads `CLIENT_SECRET` from the environment; it must match the server's.
#[must_use]
pub fn mint_token() -> String {
    let secret = std::env::var("CLIENT_SECRET")
        .expect("CLIENT_SECRET must be set to mint tokens for integration tests");

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &json!({ "sub": "integration-tests", "iat": now, "exp": now + 600 }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

/// A merchant key that is unique per test-process run.
#[must_use]
pub fn unique_merchant_key(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}
