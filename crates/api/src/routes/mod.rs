//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                                  - Greeting
//! GET    /health                            - Liveness check
//! GET    /health/ready                      - Readiness check (pings the database)
//!
//! # Merchants (unguarded)
//! GET    /api/v1/merchants                  - List all merchants
//! GET    /api/v1/merchants/{merchant_id}    - Fetch by opaque key
//! GET    /api/v1/merchantName               - Fetch by display name (?merchant_name=)
//! POST   /api/v1/merchants                  - Create (201 returns full list)
//! DELETE /api/v1/merchants/{merchant_id}    - Delete (200 returns full list)
//!
//! # Products
//! GET    /api/v1/products                   - List all products
//! GET    /api/v1/products/{id}              - Fetch by id
//! POST   /api/v1/products                   - Create (201 returns created rows)
//! DELETE /api/v1/products/{id}              - Delete (guarded; 200 returns full list)
//! PUT    /api/v1/products/{id}/replace      - Replace fields (guarded)
//! PATCH  /api/v1/products/{id}/edit         - Edit keyword (guarded)
//! ```
//!
//! Guarded routes require a bearer token in the request body, query string,
//! or `Authorization` header; see [`crate::middleware::auth`].

pub mod merchants;
pub mod products;

use axum::{
    Router, middleware,
    extract::State,
    http::StatusCode,
    routing::{delete, get, patch, put},
};

use crate::middleware::require_token;
use crate::state::AppState;

/// Create the merchant routes router.
pub fn merchant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/merchants",
            get(merchants::index).post(merchants::create),
        )
        .route(
            "/merchants/{merchant_id}",
            get(merchants::show).delete(merchants::destroy),
        )
        // Custom lookup endpoint, kept off the /merchants tree
        .route("/merchantName", get(merchants::by_name))
}

/// Create the product routes router.
///
/// The mutating routes get the token gate via `route_layer` so the
/// unguarded read/create routes never pay for body buffering.
pub fn product_routes(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/products/{id}", delete(products::destroy))
        .route("/products/{id}/replace", put(products::replace))
        .route("/products/{id}/edit", patch(products::edit))
        .route_layer(middleware::from_fn_with_state(state, require_token));

    Router::new()
        .route("/products", get(products::index).post(products::create))
        .route("/products/{id}", get(products::show))
        .merge(guarded)
}

/// Create the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest(
            "/api/v1",
            merchant_routes().merge(product_routes(state.clone())),
        )
        .with_state(state)
}

/// Greeting for the root path.
async fn home() -> &'static str {
    "It's a Stockist kind of project."
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
