//! Product review repository.

use rust_decimal::Decimal;
use sqlx::PgPool;

use taffreen_core::{ProductId, UserId};

use super::{RepositoryError, not_found_on_fk};
use crate::models::catalog::ReviewWithAuthor;

/// Repository for product reviews.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a review.
    ///
    /// Rating bounds (1..=5) are validated by the caller; the database
    /// CHECK constraint is the backstop.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        user_id: UserId,
        product_id: ProductId,
        rating: i32,
        comment: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO store.product_reviews (user_id, product_id, rating, comment) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(rating)
        .bind(comment)
        .execute(self.pool)
        .await
        .map_err(not_found_on_fk)?;

        Ok(())
    }

    /// Reviews for a product with author names, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<ReviewWithAuthor>, RepositoryError> {
        let reviews = sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, u.name AS author, r.rating, r.comment, r.posted_at \
             FROM store.product_reviews r \
             JOIN store.users u ON u.id = r.user_id \
             WHERE r.product_id = $1 \
             ORDER BY r.posted_at DESC, r.id DESC",
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Average rating across a product's reviews; `None` with no reviews.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn average_rating(
        &self,
        product_id: ProductId,
    ) -> Result<Option<Decimal>, RepositoryError> {
        let average: Option<Decimal> = sqlx::query_scalar(
            "SELECT AVG(rating) FROM store.product_reviews WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_one(self.pool)
        .await?;

        Ok(average)
    }
}
