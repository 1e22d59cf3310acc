//! HTTP middleware for the API.
//!
//! The only middleware of consequence is the bearer-token gate; request
//! tracing is layered on in `main` via `tower_http::trace::TraceLayer`.

pub mod auth;

pub use auth::{AuthRejection, Claims, TokenVerifier, require_token};
