//! Merchant repository for database operations.

use sqlx::PgPool;

use stockist_core::MerchantKey;

use super::RepositoryError;
use crate::models::Merchant;

/// Repository for merchant database operations.
pub struct MerchantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MerchantRepository<'a> {
    /// Create a new merchant repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all merchants.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Merchant>, RepositoryError> {
        let merchants = sqlx::query_as::<_, Merchant>(
            r"
            SELECT id, merchant_name, merchant_id, created_at, updated_at
            FROM merchants
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(merchants)
    }

    /// Find merchants by their opaque `merchant_id` key.
    ///
    /// Returns an empty vec when nothing matches; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_key(&self, key: &str) -> Result<Vec<Merchant>, RepositoryError> {
        let merchants = sqlx::query_as::<_, Merchant>(
            r"
            SELECT id, merchant_name, merchant_id, created_at, updated_at
            FROM merchants
            WHERE merchant_id = $1
            ",
        )
        .bind(key)
        .fetch_all(self.pool)
        .await?;

        Ok(merchants)
    }

    /// Find merchants by display name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Merchant>, RepositoryError> {
        let merchants = sqlx::query_as::<_, Merchant>(
            r"
            SELECT id, merchant_name, merchant_id, created_at, updated_at
            FROM merchants
            WHERE merchant_name = $1
            ",
        )
        .bind(name)
        .fetch_all(self.pool)
        .await?;

        Ok(merchants)
    }

    /// Insert a new merchant.
    ///
    /// The `merchant_id` column carries a unique constraint; a duplicate key
    /// surfaces as a database error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, name: &str, key: &MerchantKey) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO merchants (merchant_name, merchant_id)
            VALUES ($1, $2)
            ",
        )
        .bind(name)
        .bind(key.as_str())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Delete merchants matching the given key.
    ///
    /// Deleting an absent key is not an error; zero rows are affected.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_key(&self, key: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM merchants
            WHERE merchant_id = $1
            ",
        )
        .bind(key)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
