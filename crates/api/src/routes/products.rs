//! Product route handlers.
//!
//! The mutating endpoints (delete, replace, edit) sit behind the
//! bearer-token gate; see `routes::routes` for where the layer is applied.
//! Each mutation is two sequentially awaited store calls: the mutation
//! itself, then the re-list the response is built from.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use stockist_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{ApiError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductBody {
    pub product_keyword: Option<String>,
    pub merchant: Option<String>,
}

/// Request body for replacing both mutable fields of a product.
#[derive(Debug, Deserialize)]
pub struct ReplaceProductBody {
    pub product_keyword: String,
    pub merchant: String,
}

/// Request body for editing a product's keyword.
#[derive(Debug, Deserialize)]
pub struct EditProductBody {
    pub product_keyword: String,
}

/// List all products.
///
/// GET /api/v1/products
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list()
        .await
        .map_err(|_| ApiError::NotFound("There are no products in the database".to_string()))?;

    Ok(Json(products))
}

/// Fetch products by id.
///
/// GET /api/v1/products/{id}
///
/// An unknown id answers 200 with an empty array, not a 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .find_by_id(id)
        .await
        .map_err(|_| {
            ApiError::NotFound("That product does not exist in the database".to_string())
        })?;

    Ok(Json(products))
}

/// Create a product, answering with the created row(s).
///
/// POST /api/v1/products
///
/// Unlike merchant creation, this answers with the insert result rather
/// than the full collection.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateProductBody>,
) -> Result<(StatusCode, Json<Vec<Product>>)> {
    let (Some(product_keyword), Some(merchant)) = (body.product_keyword, body.merchant) else {
        return Err(ApiError::Unprocessable);
    };

    let created = ProductRepository::new(state.pool())
        .create(&product_keyword, &merchant)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a product by id, answering with the full post-delete collection.
///
/// DELETE /api/v1/products/{id} (guarded)
///
/// Deleting an absent id still answers 200; delete is idempotent by
/// absence.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.pool());
    repo.delete_by_id(id).await?;
    let products = repo.list().await?;

    Ok(Json(products))
}

/// Replace both mutable fields of a product, answering with the full
/// post-update collection.
///
/// PUT /api/v1/products/{id}/replace (guarded)
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(body): Json<ReplaceProductBody>,
) -> Result<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.pool());
    repo.replace(id, &body.product_keyword, &body.merchant)
        .await?;
    let products = repo.list().await?;

    Ok(Json(products))
}

/// Edit a product's keyword, answering with the full post-update
/// collection.
///
/// PATCH /api/v1/products/{id}/edit (guarded)
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(body): Json<EditProductBody>,
) -> Result<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.pool());
    repo.set_keyword(id, &body.product_keyword).await?;
    let products = repo.list().await?;

    Ok(Json(products))
}
