//! Seed the database with a small fixture set.
//!
//! Intended for fresh development databases: the merchant keys are unique,
//! so re-running against an already-seeded database fails on the first
//! duplicate.
//!
//! # Usage
//!
//! ```bash
//! stockist migrate && stockist seed
//! ```

use secrecy::SecretString;
use tracing::info;

use stockist_api::db::{self, MerchantRepository, ProductRepository};
use stockist_core::MerchantKey;

/// Fixture merchants: (display name, opaque key).
const MERCHANTS: &[(&str, &str)] = &[
    ("Walgreens", "walgreens-001"),
    ("CVS", "cvs-001"),
    ("Target", "target-001"),
];

/// Fixture products: (keyword, owning merchant display name).
const PRODUCTS: &[(&str, &str)] = &[
    ("sunscreen", "Walgreens"),
    ("ibuprofen", "Walgreens"),
    ("toothpaste", "CVS"),
    ("batteries", "Target"),
];

/// Insert the fixture set.
///
/// # Errors
///
/// Returns an error if the database URL is missing, a fixture merchant key
/// fails validation, or any insert fails (including duplicate-key failures
/// on an already-seeded database).
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("STOCKIST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let merchants = MerchantRepository::new(&pool);
    for &(name, key) in MERCHANTS {
        let key = MerchantKey::parse(key)?;
        merchants.create(name, &key).await?;
        info!(merchant = name, "Seeded merchant");
    }

    let products = ProductRepository::new(&pool);
    for &(keyword, merchant) in PRODUCTS {
        products.create(keyword, merchant).await?;
        info!(keyword, merchant, "Seeded product");
    }

    info!(
        merchants = MERCHANTS.len(),
        products = PRODUCTS.len(),
        "Seeding complete!"
    );
    Ok(())
}
