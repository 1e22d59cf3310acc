//! Merchant row type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merchant row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Merchant {
    /// Database row id.
    pub id: i32,
    /// Display name (not unique; products reference merchants by this name).
    pub merchant_name: String,
    /// Opaque stable key, unique across all merchants.
    pub merchant_id: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let merchant = Merchant {
            id: 1,
            merchant_name: "Walgreens".to_string(),
            merchant_id: "walgreens-001".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&merchant).unwrap();
        assert_eq!(value["merchant_name"], "Walgreens");
        assert_eq!(value["merchant_id"], "walgreens-001");
        assert_eq!(value["id"], 1);
    }
}
