//! Product row type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockist_core::ProductId;

/// A product row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Database row id, unique across all products.
    pub id: ProductId,
    /// The tracked keyword.
    pub product_keyword: String,
    /// Owning merchant, referenced by display name (observed schema usage;
    /// deliberately not a foreign key).
    pub merchant: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_bare_number() {
        let product = Product {
            id: ProductId::new(9),
            product_keyword: "sunscreen".to_string(),
            merchant: "Walgreens".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["product_keyword"], "sunscreen");
    }
}
