//! Newsletter subscription repository.

use sqlx::PgPool;

use taffreen_core::Email;

use super::{RepositoryError, conflict_on_unique};
use crate::models::content::Subscription;

/// Repository for newsletter subscriptions.
pub struct SubscriptionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SubscriptionRepository<'a> {
    /// Create a new subscription repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Subscribe an email address.
    ///
    /// A duplicate email is rejected, not silently ignored; the unique
    /// index surfaces it as `Conflict`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already
    /// subscribed.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, email: &Email) -> Result<Subscription, RepositoryError> {
        let subscription = sqlx::query_as::<_, Subscription>(
            "INSERT INTO store.subscriptions (email) VALUES ($1) \
             RETURNING id, email, subscribed_at",
        )
        .bind(email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "email already subscribed"))?;

        Ok(subscription)
    }
}
