//! Order repository and the checkout pipeline.

use sqlx::PgPool;

use taffreen_core::{AddressId, OrderStatus, UserId};

use super::RepositoryError;
use crate::models::order::OrderWithProduct;

/// Repository for orders.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Convert the user's current cart into orders against `address_id`.
    ///
    /// Runs as one transaction: verify the address belongs to the user,
    /// snapshot each cart line into an order with status `placed`, then
    /// delete the cart lines. Either every step commits or none do, so a
    /// storage failure partway can never leave a half-checked-out cart.
    ///
    /// An empty cart is a no-op that returns 0.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address does not exist
    /// or belongs to another user.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn place_from_cart(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<u32, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let owned: Option<i32> =
            sqlx::query_scalar("SELECT id FROM store.addresses WHERE id = $1 AND user_id = $2")
                .bind(address_id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        if owned.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let lines: Vec<(i32, i32)> = sqlx::query_as(
            "SELECT product_id, quantity FROM store.cart_lines WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;

        for (product_id, quantity) in &lines {
            sqlx::query(
                "INSERT INTO store.orders (user_id, address_id, product_id, quantity, status) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(user_id)
            .bind(address_id)
            .bind(product_id)
            .bind(quantity)
            .bind(OrderStatus::Placed)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM store.cart_lines WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(u32::try_from(lines.len()).unwrap_or(u32::MAX))
    }

    /// The user's order history, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn history(&self, user_id: UserId) -> Result<Vec<OrderWithProduct>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderWithProduct>(
            "SELECT o.id, o.product_id, p.title, p.slug, p.price, o.quantity, o.status, \
                    o.ordered_at \
             FROM store.orders o \
             JOIN store.products p ON p.id = o.product_id \
             WHERE o.user_id = $1 \
             ORDER BY o.ordered_at DESC, o.id DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
