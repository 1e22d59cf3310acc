//! Mint bearer tokens for the guarded API endpoints.
//!
//! The API never mints tokens itself; they are provisioned out-of-band and
//! presented on mutating product requests. This command is that
//! out-of-band path: it signs an HS256 token with the same `CLIENT_SECRET`
//! the API verifies against.
//!
//! # Usage
//!
//! ```bash
//! # One-hour token
//! stockist token --sub ops@example.com --ttl-mins 60
//!
//! # Token without an expiry
//! stockist token --sub ci-bot
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while minting a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// System clock is set before the unix epoch.
    #[error("System clock error: {0}")]
    Clock(#[from] std::time::SystemTimeError),

    /// Encoding failed.
    #[error("Token encoding error: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// Claims written into minted tokens.
#[derive(Debug, Serialize)]
struct MintedClaims<'a> {
    sub: &'a str,
    iat: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<u64>,
}

/// Mint a token and write it to stdout.
///
/// # Errors
///
/// Returns `TokenError` if `CLIENT_SECRET` is unset or encoding fails.
#[allow(clippy::print_stdout)] // the token on stdout is the command's output
pub fn mint(sub: &str, ttl_mins: Option<u64>) -> Result<(), TokenError> {
    dotenvy::dotenv().ok();

    let secret =
        std::env::var("CLIENT_SECRET").map_err(|_| TokenError::MissingEnvVar("CLIENT_SECRET"))?;

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = MintedClaims {
        sub,
        iat: now,
        exp: ttl_mins.map(|mins| now + mins * 60),
    };

    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    println!("{token}");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct DecodedClaims {
        sub: String,
        exp: Option<u64>,
    }

    fn decode(token: &str, secret: &str) -> DecodedClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();

        jsonwebtoken::decode::<DecodedClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims
    }

    #[test]
    fn test_minted_claims_round_trip() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = MintedClaims {
            sub: "ops@example.com",
            iat: now,
            exp: Some(now + 3600),
        };

        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let decoded = decode(&token, "test-secret");
        assert_eq!(decoded.sub, "ops@example.com");
        assert_eq!(decoded.exp, Some(now + 3600));
    }

    #[test]
    fn test_exp_omitted_when_no_ttl() {
        let claims = MintedClaims {
            sub: "ci-bot",
            iat: 0,
            exp: None,
        };

        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let decoded = decode(&token, "test-secret");
        assert_eq!(decoded.exp, None);
    }
}
