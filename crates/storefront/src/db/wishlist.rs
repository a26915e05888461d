//! Wishlist repository.
//!
//! A wishlist is created lazily on first add and holds a plain set of
//! products. Adding bumps the product's popularity counter on every call,
//! including adds of a product already in the set - the counter tracks
//! add events, not set membership.

use sqlx::PgPool;

use taffreen_core::{ProductId, UserId, WishlistId};

use super::{RepositoryError, not_found_on_fk};
use crate::models::catalog::Product;

/// Repository for wishlist operations.
pub struct WishlistRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WishlistRepository<'a> {
    /// Create a new wishlist repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a product to the user's wishlist.
    ///
    /// Creates the wishlist if the user has none yet. Adding a product
    /// already in the set leaves the set unchanged but still increments
    /// the product's popularity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(&self, user_id: UserId, product_id: ProductId) -> Result<(), RepositoryError> {
        let wishlist_id = self.ensure_wishlist(user_id).await?;

        sqlx::query(
            "INSERT INTO store.wishlist_products (wishlist_id, product_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(wishlist_id)
        .bind(product_id)
        .execute(self.pool)
        .await
        .map_err(not_found_on_fk)?;

        sqlx::query("UPDATE store.products SET popularity = popularity + 1 WHERE id = $1")
            .bind(product_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Remove a product from the user's wishlist.
    ///
    /// Removing a product that is not in the set is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user has no wishlist.
    pub async fn remove(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        let wishlist_id = self
            .wishlist_id(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        sqlx::query(
            "DELETE FROM store.wishlist_products WHERE wishlist_id = $1 AND product_id = $2",
        )
        .bind(wishlist_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// The products in the user's wishlist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user has never created a
    /// wishlist (distinct from an existing-but-empty one).
    pub async fn products(&self, user_id: UserId) -> Result<Vec<Product>, RepositoryError> {
        let wishlist_id = self
            .wishlist_id(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let products = sqlx::query_as::<_, Product>(
            "SELECT p.id, p.title, p.slug, p.sku, p.short_description, p.detail_description, \
                    p.price, p.popularity, p.is_active, p.is_featured, p.category_id \
             FROM store.wishlist_products w \
             JOIN store.products p ON p.id = w.product_id \
             WHERE w.wishlist_id = $1 \
             ORDER BY p.id",
        )
        .bind(wishlist_id)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// How many products the user has wishlisted; 0 without a wishlist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self, user_id: UserId) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM store.wishlist_products wp \
             JOIN store.wishlists w ON w.id = wp.wishlist_id \
             WHERE w.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// The id of the user's wishlist, if one exists.
    async fn wishlist_id(&self, user_id: UserId) -> Result<Option<WishlistId>, RepositoryError> {
        let id: Option<WishlistId> =
            sqlx::query_scalar("SELECT id FROM store.wishlists WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(self.pool)
                .await?;

        Ok(id)
    }

    /// Get-or-create the user's wishlist and return its id.
    async fn ensure_wishlist(&self, user_id: UserId) -> Result<WishlistId, RepositoryError> {
        sqlx::query(
            "INSERT INTO store.wishlists (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .execute(self.pool)
        .await?;

        self.wishlist_id(user_id)
            .await?
            .ok_or_else(|| RepositoryError::DataCorruption("wishlist vanished after insert".into()))
    }
}
