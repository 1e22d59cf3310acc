//! Bearer-token authentication gate.
//!
//! Guarded routes are wrapped with [`require_token`], which looks for a
//! signed token in the request body, then the query string, then the
//! `Authorization` header, and verifies it against the process-wide client
//! secret. Verification is a pure function of (token, secret): no logging,
//! no retries, no side effects beyond the response or the decoded claims
//! landing in request extensions.

use axum::{
    Json,
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::state::AppState;

/// Largest request body the gate will buffer while looking for a token.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Claims carried by a verified token.
///
/// Tokens are minted out-of-band (`stockist token`), so beyond the standard
/// expiry claim the payload shape is not ours to dictate; whatever else the
/// issuer encoded is preserved in `extra` for downstream handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry as a unix timestamp. Optional: tokens without one never expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    /// All remaining claims, verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Errors produced by token verification.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The token's signature, structure, or expiry failed verification.
    #[error("token verification failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Verifies bearer tokens against the client secret.
///
/// Built once at startup from required configuration and injected through
/// [`AppState`]; the secret is read-only after startup and safe for
/// unsynchronized concurrent use.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier for HS256 tokens signed with `secret`.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is honored when present, but tokens without one are valid
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }

    /// Verify a token and return its decoded claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` for a bad signature, malformed
    /// token, or an encoded expiry in the past.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Rejection returned when the gate refuses a request.
#[derive(Debug)]
pub enum AuthRejection {
    /// No token in body, query string, or header.
    Missing,
    /// A token was presented but failed verification.
    Invalid,
    /// The request body could not be buffered for inspection.
    UnreadableBody,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Missing => (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "success": false,
                    "message": "You must be authorized to hit this endpoint"
                })),
            )
                .into_response(),
            Self::Invalid => (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "success": false,
                    "message": "Invalid authorization token."
                })),
            )
                .into_response(),
            Self::UnreadableBody => StatusCode::BAD_REQUEST.into_response(),
        }
    }
}

/// Middleware guarding mutating product routes.
///
/// On success the decoded [`Claims`] are inserted into request extensions
/// and the downstream handler runs exactly once; on failure the handler
/// never runs.
///
/// # Errors
///
/// Returns [`AuthRejection`] when no token is presented or verification
/// fails.
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let (parts, body) = req.into_parts();

    // The downstream handler still needs the body, so buffer it up front.
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| AuthRejection::UnreadableBody)?;

    let token = token_from_body(&bytes)
        .or_else(|| token_from_query(parts.uri.query()))
        .or_else(|| token_from_headers(&parts.headers));

    let Some(token) = token else {
        return Err(AuthRejection::Missing);
    };

    let claims = state
        .tokens()
        .verify(&token)
        .map_err(|_| AuthRejection::Invalid)?;

    let mut req = Request::from_parts(parts, Body::from(bytes));
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Pull a `token` field out of a JSON request body, if there is one.
fn token_from_body(bytes: &Bytes) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    value
        .get("token")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

/// Pull a `token` pair out of the raw query string, if there is one.
///
/// Tokens are URL-safe base64, so no percent-decoding is needed.
fn token_from_query(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "token")
        .map(|(_, value)| value.to_owned())
}

/// Pull a token out of the `Authorization` header, if there is one.
///
/// Accepts both a bare token and the standard `Bearer ` prefix.
fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        return None;
    }

    Some(token.to_owned())
}
