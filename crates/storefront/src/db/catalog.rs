//! Catalog repository: categories and products (read-mostly).

use sqlx::PgPool;

use taffreen_core::{CategoryId, ProductId, ProductSort};

use super::RepositoryError;
use crate::models::catalog::{Category, Page, Product, clamp_page, total_pages};

/// Fixed page size for category product listings.
pub const PAGE_SIZE: u32 = 12;

const CATEGORY_COLUMNS: &str = "id, title, slug, description, is_active, is_featured";
const PRODUCT_COLUMNS: &str = "id, title, slug, sku, short_description, detail_description, \
     price, popularity, is_active, is_featured, category_id";

/// Repository for catalog reads.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Active featured categories for the home page, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured_categories(&self, limit: i64) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM store.categories \
             WHERE is_active AND is_featured ORDER BY id LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// All active categories, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn active_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM store.categories WHERE is_active ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Look up an active category by slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM store.categories WHERE slug = $1 AND is_active"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Active featured products for the home page, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured_products(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM store.products \
             WHERE is_active AND is_featured ORDER BY id LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Look up a product by slug (active or not - detail pages stay
    /// reachable for recently deactivated products in order history).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM store.products WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Other active products from the same category, for the detail page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn related_products(
        &self,
        category_id: CategoryId,
        exclude: ProductId,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM store.products \
             WHERE is_active AND category_id = $1 AND id <> $2 ORDER BY id LIMIT $3"
        ))
        .bind(category_id)
        .bind(exclude)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// One page of a category's active products in the requested order.
    ///
    /// The sort's ORDER BY fragment comes from [`ProductSort::order_clause`]
    /// (static column lists, never user input). Out-of-range page numbers
    /// are clamped to the nearest valid page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn products_in_category(
        &self,
        category_id: CategoryId,
        sort: ProductSort,
        requested_page: u32,
    ) -> Result<Page<Product>, RepositoryError> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM store.products WHERE is_active AND category_id = $1",
        )
        .bind(category_id)
        .fetch_one(self.pool)
        .await?;

        let total_items = u32::try_from(total).unwrap_or(u32::MAX);
        let (number, offset) = clamp_page(requested_page, total_items, PAGE_SIZE);

        let items = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM store.products \
             WHERE is_active AND category_id = $1 \
             ORDER BY {} LIMIT $2 OFFSET $3",
            sort.order_clause()
        ))
        .bind(category_id)
        .bind(i64::from(PAGE_SIZE))
        .bind(i64::from(offset))
        .fetch_all(self.pool)
        .await?;

        Ok(Page {
            items,
            number,
            total_pages: total_pages(total_items, PAGE_SIZE),
            total_items,
        })
    }
}
