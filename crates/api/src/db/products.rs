//! Product repository for database operations.

use sqlx::PgPool;

use stockist_core::ProductId;

use super::RepositoryError;
use crate::models::Product;

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, product_keyword, merchant, created_at, updated_at
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Find products by row id.
    ///
    /// Returns an empty vec when nothing matches; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_id(&self, id: ProductId) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, product_keyword, merchant, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Insert a new product and return the created row(s).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        keyword: &str,
        merchant: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        let created = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (product_keyword, merchant)
            VALUES ($1, $2)
            RETURNING id, product_keyword, merchant, created_at, updated_at
            ",
        )
        .bind(keyword)
        .bind(merchant)
        .fetch_all(self.pool)
        .await?;

        Ok(created)
    }

    /// Delete the product with the given id.
    ///
    /// Deleting an absent id is not an error; zero rows are affected.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_id(&self, id: ProductId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Replace both mutable fields of a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn replace(
        &self,
        id: ProductId,
        keyword: &str,
        merchant: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET product_keyword = $2, merchant = $3, updated_at = now()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(keyword)
        .bind(merchant)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Update only the keyword of a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_keyword(&self, id: ProductId, keyword: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET product_keyword = $2, updated_at = now()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(keyword)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
