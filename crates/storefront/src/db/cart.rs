//! Cart repository.
//!
//! A cart is the set of `store.cart_lines` rows for one user, at most one
//! row per product. All mutating queries are scoped to the owning user so
//! another user's line id behaves exactly like a missing one.

use sqlx::PgPool;

use taffreen_core::{CartLineId, ProductId, UserId};

use super::{RepositoryError, not_found_on_fk};
use crate::models::cart::CartItem;

/// Repository for cart operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a product to the user's cart.
    ///
    /// If a line for this (user, product) already exists its quantity is
    /// incremented by one; otherwise a new line with quantity 1 is
    /// created. The upsert is a single statement, so concurrent adds for
    /// the same pair cannot lose updates.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add_or_increment(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO store.cart_lines (user_id, product_id, quantity) \
             VALUES ($1, $2, 1) \
             ON CONFLICT (user_id, product_id) \
             DO UPDATE SET quantity = store.cart_lines.quantity + 1",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await
        .map_err(not_found_on_fk)?;

        Ok(())
    }

    /// Increment a cart line's quantity by one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line does not exist or
    /// belongs to another user.
    pub async fn increment(
        &self,
        line_id: CartLineId,
        user_id: UserId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE store.cart_lines SET quantity = quantity + 1 \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(line_id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Decrement a cart line's quantity by one, deleting the line when the
    /// quantity would drop to zero.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line does not exist or
    /// belongs to another user.
    pub async fn decrement_or_delete(
        &self,
        line_id: CartLineId,
        user_id: UserId,
    ) -> Result<(), RepositoryError> {
        let quantity: Option<i32> = sqlx::query_scalar(
            "SELECT quantity FROM store.cart_lines WHERE id = $1 AND user_id = $2",
        )
        .bind(line_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        let Some(quantity) = quantity else {
            return Err(RepositoryError::NotFound);
        };

        if quantity <= 1 {
            sqlx::query("DELETE FROM store.cart_lines WHERE id = $1 AND user_id = $2")
                .bind(line_id)
                .bind(user_id)
                .execute(self.pool)
                .await?;
        } else {
            sqlx::query(
                "UPDATE store.cart_lines SET quantity = quantity - 1 \
                 WHERE id = $1 AND user_id = $2",
            )
            .bind(line_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;
        }

        Ok(())
    }

    /// Remove a cart line outright, whatever its quantity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line does not exist or
    /// belongs to another user.
    pub async fn remove(
        &self,
        line_id: CartLineId,
        user_id: UserId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM store.cart_lines WHERE id = $1 AND user_id = $2")
            .bind(line_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// The user's cart lines joined with product display fields, oldest
    /// line first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            "SELECT c.id, c.product_id, p.title, p.slug, p.price, c.quantity \
             FROM store.cart_lines c \
             JOIN store.products p ON p.id = c.product_id \
             WHERE c.user_id = $1 \
             ORDER BY c.id",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
