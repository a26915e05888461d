//! Dashboard statistics repository.

use sqlx::PgPool;

use super::RepositoryError;

/// Entity counts shown on the dashboard overview.
#[derive(Debug, Clone, Copy)]
pub struct DashboardCounts {
    pub users: i64,
    pub products: i64,
    pub orders: i64,
    pub subscriptions: i64,
}

/// Repository for dashboard statistics.
pub struct StatsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepository<'a> {
    /// Create a new stats repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Entity counts across the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn counts(&self) -> Result<DashboardCounts, RepositoryError> {
        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM store.users")
            .fetch_one(self.pool)
            .await?;
        let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM store.products")
            .fetch_one(self.pool)
            .await?;
        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM store.orders")
            .fetch_one(self.pool)
            .await?;
        let subscriptions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM store.subscriptions")
            .fetch_one(self.pool)
            .await?;

        Ok(DashboardCounts {
            users,
            products,
            orders,
            subscriptions,
        })
    }
}
