//! Product administration repository: full CRUD plus SKU assignment.

use rust_decimal::Decimal;
use sqlx::PgPool;

use taffreen_core::{CategoryId, ProductId};

use super::{RepositoryError, conflict_on_unique};
use crate::models::{CategoryOption, ProductRecord};

const PRODUCT_COLUMNS: &str = "id, title, slug, sku, short_description, detail_description, \
     price, popularity, is_active, is_featured, category_id";

/// Editable product fields, shared by create and update.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub title: String,
    pub slug: String,
    /// Empty means "assign the next SKU" on create.
    pub sku: String,
    pub short_description: String,
    pub detail_description: String,
    pub price: Decimal,
    pub popularity: i32,
    pub category_id: CategoryId,
    pub is_active: bool,
    pub is_featured: bool,
}

/// Compute the SKU for a new product given the current numeric maximum.
///
/// SKUs count up from "1"; non-numeric SKUs are ignored when finding the
/// maximum.
#[must_use]
pub fn next_sku(max_numeric: Option<i64>) -> String {
    max_numeric.map_or_else(|| "1".to_owned(), |max| (max + 1).to_string())
}

/// Repository for privileged product operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product administration repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products (active or not), oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let products = sqlx::query_as::<_, ProductRecord>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM store.products ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a single product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, RepositoryError> {
        let product = sqlx::query_as::<_, ProductRecord>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM store.products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// All categories, for the product form's category selector.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn category_options(&self) -> Result<Vec<CategoryOption>, RepositoryError> {
        let categories = sqlx::query_as::<_, CategoryOption>(
            "SELECT id, title FROM store.categories ORDER BY title",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Create a product.
    ///
    /// A blank SKU is assigned as (numerically largest existing SKU) + 1,
    /// or "1" when no numeric SKU exists. The read-max-then-insert pair is
    /// not safe against concurrent product creation; two simultaneous
    /// creates can observe the same maximum.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is taken.
    /// Returns `RepositoryError::NotFound` if the category does not exist.
    pub async fn create(&self, input: &ProductInput) -> Result<ProductRecord, RepositoryError> {
        let sku = if input.sku.trim().is_empty() {
            next_sku(self.max_numeric_sku().await?)
        } else {
            input.sku.trim().to_owned()
        };

        let product = sqlx::query_as::<_, ProductRecord>(&format!(
            "INSERT INTO store.products \
             (title, slug, sku, short_description, detail_description, price, popularity, \
              is_active, is_featured, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&sku)
        .bind(&input.short_description)
        .bind(&input.detail_description)
        .bind(input.price)
        .bind(input.popularity)
        .bind(input.is_active)
        .bind(input.is_featured)
        .bind(input.category_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            conflict_on_unique(e, "slug already exists")
        })?;

        Ok(product)
    }

    /// Update a product's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product or category does
    /// not exist.
    /// Returns `RepositoryError::Conflict` if the slug is taken.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE store.products \
             SET title = $2, slug = $3, sku = $4, short_description = $5, \
                 detail_description = $6, price = $7, popularity = $8, is_active = $9, \
                 is_featured = $10, category_id = $11, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(input.sku.trim())
        .bind(&input.short_description)
        .bind(&input.detail_description)
        .bind(input.price)
        .bind(input.popularity)
        .bind(input.is_active)
        .bind(input.is_featured)
        .bind(input.category_id)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            conflict_on_unique(e, "slug already exists")
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM store.products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// The numerically largest SKU, ignoring non-numeric SKUs.
    async fn max_numeric_sku(&self) -> Result<Option<i64>, RepositoryError> {
        let max: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(sku::BIGINT) FROM store.products WHERE sku ~ '^[0-9]+$'",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sku_counts_up_from_max() {
        assert_eq!(next_sku(Some(7)), "8");
        assert_eq!(next_sku(Some(99)), "100");
    }

    #[test]
    fn test_next_sku_defaults_to_one() {
        assert_eq!(next_sku(None), "1");
    }
}
