//! Merchant route handlers.
//!
//! Thin pass-throughs: one repository call per request, plus the re-list
//! that mutating endpoints answer with. Merchant endpoints are deliberately
//! unguarded (flagged in DESIGN.md for product-owner review).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use stockist_core::MerchantKey;

use crate::db::MerchantRepository;
use crate::error::{ApiError, Result};
use crate::models::Merchant;
use crate::state::AppState;

/// Request body for creating a merchant.
///
/// Fields are optional so presence can be checked explicitly; either one
/// missing is a 422, not a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateMerchantBody {
    pub merchant_name: Option<String>,
    pub merchant_id: Option<String>,
}

/// Query parameters for the merchant-name lookup.
#[derive(Debug, Deserialize)]
pub struct MerchantNameQuery {
    pub merchant_name: String,
}

/// List all merchants.
///
/// GET /api/v1/merchants
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Merchant>>> {
    let merchants = MerchantRepository::new(state.pool())
        .list()
        .await
        .map_err(|_| ApiError::NotFound("There are no merchants in the database".to_string()))?;

    Ok(Json(merchants))
}

/// Fetch merchants by their opaque key.
///
/// GET /api/v1/merchants/{merchant_id}
///
/// An unknown key answers 200 with an empty array, not a 404.
pub async fn show(
    State(state): State<AppState>,
    Path(merchant_id): Path<String>,
) -> Result<Json<Vec<Merchant>>> {
    let merchants = MerchantRepository::new(state.pool())
        .find_by_key(&merchant_id)
        .await
        .map_err(|_| {
            ApiError::NotFound("That merchant does not exist in the database".to_string())
        })?;

    Ok(Json(merchants))
}

/// Fetch merchants by display name.
///
/// GET /api/v1/merchantName?merchant_name=...
pub async fn by_name(
    State(state): State<AppState>,
    Query(query): Query<MerchantNameQuery>,
) -> Result<Json<Vec<Merchant>>> {
    let merchants = MerchantRepository::new(state.pool())
        .find_by_name(&query.merchant_name)
        .await
        .map_err(|_| ApiError::NotFound("There is no such merchant in the database".to_string()))?;

    Ok(Json(merchants))
}

/// Create a merchant, answering with the full post-insert collection.
///
/// POST /api/v1/merchants
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateMerchantBody>,
) -> Result<(StatusCode, Json<Vec<Merchant>>)> {
    let (Some(merchant_name), Some(merchant_id)) = (body.merchant_name, body.merchant_id) else {
        return Err(ApiError::Unprocessable);
    };
    let Ok(key) = MerchantKey::parse(&merchant_id) else {
        return Err(ApiError::Unprocessable);
    };

    let repo = MerchantRepository::new(state.pool());
    repo.create(&merchant_name, &key).await?;
    let merchants = repo.list().await?;

    Ok((StatusCode::CREATED, Json(merchants)))
}

/// Delete merchants by key, answering with the full post-delete collection.
///
/// DELETE /api/v1/merchants/{merchant_id}
///
/// Deleting an absent key still answers 200; delete is idempotent by
/// absence.
pub async fn destroy(
    State(state): State<AppState>,
    Path(merchant_id): Path<String>,
) -> Result<Json<Vec<Merchant>>> {
    let repo = MerchantRepository::new(state.pool());
    repo.delete_by_key(&merchant_id).await?;

    let merchants = repo.list().await.map_err(|_| {
        ApiError::NotFound("There is no such merchant in the database".to_string())
    })?;

    Ok(Json(merchants))
}
