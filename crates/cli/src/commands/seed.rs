//! Catalog seeding command for development environments.

use rust_decimal::Decimal;

use super::{CommandError, connect};

struct SeedProduct {
    title: &'static str,
    slug: &'static str,
    sku: &'static str,
    short_description: &'static str,
    price: Decimal,
    featured: bool,
}

/// Seed the catalog with a sample category and a few products.
///
/// A no-op when the catalog already has data, so it is safe to run
/// repeatedly.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM store.categories")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        tracing::info!("Catalog already seeded, nothing to do");
        return Ok(());
    }

    let category_id: i32 = sqlx::query_scalar(
        "INSERT INTO store.categories (title, slug, description, is_active, is_featured) \
         VALUES ('Fragrances', 'fragrances', 'Signature scents', TRUE, TRUE) RETURNING id",
    )
    .fetch_one(&pool)
    .await?;

    let products = [
        SeedProduct {
            title: "Amber Oud",
            slug: "amber-oud",
            sku: "1",
            short_description: "Warm amber with a dark oud base",
            price: Decimal::new(4999, 2),
            featured: true,
        },
        SeedProduct {
            title: "Rose Attar",
            slug: "rose-attar",
            sku: "2",
            short_description: "Classic distilled rose",
            price: Decimal::new(3450, 2),
            featured: true,
        },
        SeedProduct {
            title: "Vetiver Noir",
            slug: "vetiver-noir",
            sku: "3",
            short_description: "Smoky vetiver for the evening",
            price: Decimal::new(5825, 2),
            featured: false,
        },
    ];

    for p in &products {
        sqlx::query(
            "INSERT INTO store.products \
             (title, slug, sku, short_description, detail_description, price, \
              is_active, is_featured, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $8)",
        )
        .bind(p.title)
        .bind(p.slug)
        .bind(p.sku)
        .bind(p.short_description)
        .bind(p.short_description)
        .bind(p.price)
        .bind(p.featured)
        .bind(category_id)
        .execute(&pool)
        .await?;
    }

    tracing::info!(products = products.len(), "Catalog seeded");
    Ok(())
}
